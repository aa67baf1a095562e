//! Running external tools and other small utilities.

use crate::errors::{bail, Result, ResultExt};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::process::{Command, ExitStatus};

/// Status and decoded output streams of a finished tool.
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn is_success(&self) -> bool {
        self.status.success()
    }

    /// Logs non-empty output streams: stdout as progress,
    /// stderr as a warning.
    fn log_streams(&self) {
        let stdout = self.stdout.trim_end();
        if !stdout.trim_start().is_empty() {
            info!("{}", stdout);
        }
        let stderr = self.stderr.trim_end();
        if !stderr.trim_start().is_empty() {
            warn!("{}", stderr);
        }
    }
}

/// Runs `command` to completion and captures its output. Only a tool
/// that can't be started is an error; the exit status is returned
/// as is.
pub fn run_command_and_capture_output(command: &mut Command) -> Result<CommandOutput> {
    debug!("Executing command: {:?}", command);
    let output = command
        .output()
        .with_context(|_| format!("failed to run command: {:?}", command))?;
    Ok(CommandOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Runs a query tool (e.g. `qmake -query`) and returns its stdout.
/// A non-zero exit status is an error.
pub fn get_command_output(command: &mut Command) -> Result<String> {
    let output = run_command_and_capture_output(command)?;
    if !output.is_success() {
        output.log_streams();
        bail!("command failed with {}: {:?}", output.status, command);
    }
    Ok(output.stdout)
}

/// Runs an external tool as one step of a pipeline and logs its output.
///
/// A tool that can't be started is an error, but a tool that
/// finishes with a non-zero status is only reported and the
/// pipeline goes on with its next step.
pub fn run_pipeline_step(command: &mut Command) -> Result<CommandOutput> {
    let output = run_command_and_capture_output(command)?;
    output.log_streams();
    if !output.is_success() {
        warn!("command failed with {}: {:?}", output.status, command);
    }
    Ok(output)
}

/// Converts `date` from `from_format` to `to_format`
/// (both in `strftime` notation).
pub fn convert_date(date: &str, from_format: &str, to_format: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, from_format).with_context(|_| {
        format!(
            "date {:?} doesn't match the format {:?}",
            date, from_format
        )
    })?;
    Ok(parsed.format(to_format).to_string())
}
