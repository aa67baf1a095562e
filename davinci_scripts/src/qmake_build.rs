//! Release build of the project through qmake and make.

use crate::config::ProjectConfig;
use crate::tools::Tools;
use davinci_scripts_common::errors::{bail, Result};
use davinci_scripts_common::file_utils::{recreate_dir, with_appended_extension};
use davinci_scripts_common::utils::run_pipeline_step;
use log::info;
use std::process::Command;

/// Recreates the release directory and builds the project in it.
/// `branch` selects the toolchain on Windows.
pub fn make_build(config: &ProjectConfig, tools: &Tools, branch: Option<&str>) -> Result<()> {
    let toolchain = config.platform.toolchain(branch.unwrap_or(""))?;
    let (make, make_args) = match toolchain.make_command.split_first() {
        Some(split) => split,
        None => bail!("empty make command for {}", config.platform),
    };

    recreate_dir(&config.release_dir)?;

    info!("Running qmake in {}", config.release_dir.display());
    run_pipeline_step(
        Command::new(&tools.qmake)
            .current_dir(&config.release_dir)
            .arg(with_appended_extension(config.project_file(), ".pro"))
            .args(&toolchain.qmake_args),
    )?;

    info!("Running {}", make);
    run_pipeline_step(
        Command::new(make)
            .current_dir(&config.release_dir)
            .args(make_args),
    )?;
    Ok(())
}
