//! Copies release binaries to the deploy directory and bundles
//! their Qt dependencies with the platform deploy tool.

use crate::config::ProjectConfig;
use crate::tools::Tools;
use davinci_scripts_common::errors::{bail, Result};
use davinci_scripts_common::file_utils::{copy_into, normalize_path, recreate_dir};
use davinci_scripts_common::target::Platform;
use davinci_scripts_common::utils::run_pipeline_step;
use log::info;
use std::process::Command;

/// Arguments of `macdeployqt`/`linuxdeployqt`: the GUI application
/// followed by the extra executables sharing its bundle.
fn bundle_args(config: &ProjectConfig) -> Vec<String> {
    let mut args = vec![normalize_path(&config.deploy_path(&config.app_file))];
    for name in &[&config.app_console_file, &config.tests_file] {
        args.push(format!(
            "-executable={}",
            normalize_path(&config.deploy_path(name))
        ));
    }
    args
}

/// Returns deploy tool invocations for the current platform.
pub fn deploy_commands(config: &ProjectConfig, tools: &Tools) -> Result<Vec<Command>> {
    Ok(match config.platform {
        Platform::MacOS => {
            let mut command = Command::new(&tools.macdeployqt);
            command.args(bundle_args(config)).arg("-verbose=1");
            vec![command]
        }
        Platform::Windows => {
            let mut commands = Vec::new();
            for name in &config.deploy_names {
                let mut command = Command::new(&tools.windeployqt);
                command
                    .arg(normalize_path(&config.deploy_path(name)))
                    .arg("--release")
                    .args(&["--verbose", "1"]);
                commands.push(command);
            }
            commands
        }
        Platform::Linux => {
            let mut command = Command::new(&tools.linuxdeployqt);
            command.args(bundle_args(config)).arg("-bundle-non-qt-libs");
            vec![command]
        }
        Platform::Unknown => bail!("Unknown OS"),
    })
}

/// Recreates the deploy directory, copies release outputs into it and
/// runs the deploy tool(s).
pub fn make_deploy(config: &ProjectConfig, tools: &Tools) -> Result<()> {
    let commands = deploy_commands(config, tools)?;

    recreate_dir(&config.deploy_dir)?;
    for path in config.release_paths_to_deploy() {
        let copied = copy_into(&path, &config.deploy_dir)?;
        info!("Copied {}", copied.display());
    }

    for mut command in commands {
        run_pipeline_step(&mut command)?;
    }
    Ok(())
}
