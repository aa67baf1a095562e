use crate::utils::{convert_date, get_command_output, run_pipeline_step};
use std::process::Command;

#[test]
fn convert_date_to_changelog_format() {
    assert_eq!(
        convert_date("2018-01-11", "%Y-%m-%d", "%d %b %Y").unwrap(),
        "11 Jan 2018"
    );
    assert_eq!(
        convert_date("2017-12-09", "%Y-%m-%d", "%d %b %Y").unwrap(),
        "09 Dec 2017"
    );
}

#[test]
fn convert_date_back_to_iso() {
    assert_eq!(
        convert_date("07 Jul 2018", "%d %b %Y", "%Y-%m-%d").unwrap(),
        "2018-07-07"
    );
    assert_eq!(convert_date("07 Jul 2018", "%d %b %Y", "%Y").unwrap(), "2018");
}

#[test]
fn convert_date_rejects_malformed_input() {
    assert!(convert_date("2018-13-40", "%Y-%m-%d", "%d %b %Y").is_err());
    assert!(convert_date("11 Jan 2018", "%Y-%m-%d", "%d %b %Y").is_err());
    assert!(convert_date("", "%Y-%m-%d", "%d %b %Y").is_err());
}

#[cfg(unix)]
#[test]
fn pipeline_step_survives_failed_tool() {
    let output = run_pipeline_step(Command::new("sh").args(&["-c", "echo built; exit 3"])).unwrap();
    assert!(!output.is_success());
    assert_eq!(output.stdout, "built\n");
}

#[cfg(unix)]
#[test]
fn query_fails_on_failed_tool() {
    assert_eq!(
        get_command_output(Command::new("sh").args(&["-c", "echo 5.11.1"])).unwrap(),
        "5.11.1\n"
    );
    assert!(get_command_output(Command::new("sh").args(&["-c", "exit 1"])).is_err());
}

#[test]
fn missing_tool_is_an_error() {
    assert!(run_pipeline_step(&mut Command::new("davinci-no-such-tool")).is_err());
}
