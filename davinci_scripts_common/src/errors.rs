//! Error handling of the scripts, based on `failure` crate.

pub type Result<T> = std::result::Result<T, failure::Error>;
pub use failure::{bail, ensure, err_msg, format_err, Error, ResultExt};
use log::{log, Level};
use std::env;

/// Exit status of a script stopped by an error.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Terminates the script with a readable report instead of a panic
/// when a fatal error reaches `main`.
pub trait FancyUnwrap {
    type Output;
    fn fancy_unwrap(self) -> Self::Output;
}

/// Keeps the frames of `backtrace` that belong to the scripts: frames of
/// the backtrace constructor and of the runtime entry are cut off.
pub fn short_backtrace(backtrace: &str) -> Vec<&str> {
    let lines: Vec<&str> = backtrace.lines().collect();
    let end = lines
        .iter()
        .position(|line| line.contains("std::rt::lang_start"))
        .unwrap_or(lines.len());
    let start = lines[..end]
        .iter()
        .position(|line| line.contains("failure::backtrace::Backtrace::new"))
        .map_or(0, |position| (position + 2).min(end));
    lines[start..end].to_vec()
}

/// Logs `err` with its causes, followed by the backtrace if one
/// was captured (shortened unless `RUST_BACKTRACE=full`).
pub fn print_trace(err: &Error, log_level: Level) {
    log!(log_level, "");
    log!(log_level, "Error: {}", err);
    for cause in err.iter_causes() {
        log!(log_level, "   caused by: {}", cause);
    }

    let backtrace = err.backtrace().to_string();
    if backtrace.is_empty() {
        return;
    }
    match env::var("RUST_BACKTRACE") {
        Ok(ref value) if value == "full" => log!(log_level, "{}", backtrace),
        _ => {
            log!(log_level, "Short backtrace:");
            log!(log_level, "{}", short_backtrace(&backtrace).join("\n"));
        }
    }
}

impl<T> FancyUnwrap for Result<T> {
    type Output = T;

    fn fancy_unwrap(self) -> T {
        self.unwrap_or_else(|err| {
            print_trace(&err, Level::Error);
            std::process::exit(FAILURE_EXIT_CODE);
        })
    }
}
