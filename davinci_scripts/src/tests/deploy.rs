use super::sample_config;
use crate::deploy::deploy_commands;
use crate::tools::Tools;
use davinci_scripts_common::target::Platform;
use std::process::Command;

fn command_line(command: &Command) -> Vec<String> {
    let mut line = vec![command.get_program().to_string_lossy().to_string()];
    line.extend(command.get_args().map(|arg| arg.to_string_lossy().to_string()));
    line
}

#[test]
fn macos_bundles_all_executables() {
    let config = sample_config(Platform::MacOS);
    let commands = deploy_commands(&config, &Tools::default()).unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(
        command_line(&commands[0]),
        vec![
            "macdeployqt",
            "/work/Build/Deploy/Davinci.app",
            "-executable=/work/Build/Deploy/DavinciConsole",
            "-executable=/work/Build/Deploy/DavinciTests",
            "-verbose=1",
        ]
    );
}

#[test]
fn windows_deploys_each_executable() {
    let config = sample_config(Platform::Windows);
    let tools = Tools {
        windeployqt: "C:/Qt/bin/windeployqt.exe".to_string(),
        ..Tools::default()
    };
    let commands = deploy_commands(&config, &tools).unwrap();
    assert_eq!(commands.len(), 3);
    let line = command_line(&commands[1]);
    assert_eq!(line[0], "C:/Qt/bin/windeployqt.exe");
    assert!(line[1].ends_with("DavinciConsole.exe"));
    assert_eq!(&line[2..], &["--release", "--verbose", "1"]);
}

#[test]
fn linux_bundles_non_qt_libs() {
    let config = sample_config(Platform::Linux);
    let commands = deploy_commands(&config, &Tools::default()).unwrap();
    let line = command_line(&commands[0]);
    assert_eq!(line[0], "linuxdeployqt");
    assert_eq!(line.last().map(|s| s.as_str()), Some("-bundle-non-qt-libs"));
    assert_eq!(line.len(), 5);
}

#[test]
fn unknown_platform_is_an_error() {
    let config = sample_config(Platform::Unknown);
    assert!(deploy_commands(&config, &Tools::default()).is_err());
}
