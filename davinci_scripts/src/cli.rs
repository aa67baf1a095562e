//! Command line entry points of the scripts.

use crate::changelog::Changelog;
use crate::config::ProjectConfig;
use crate::tools::Tools;
use crate::{deploy, docs, installer, pro_files, qmake_build, upload};
use clap::Parser;
use davinci_scripts_common::env_var_names;
use davinci_scripts_common::errors::Result;
use davinci_scripts_common::file_utils::save_string;
use flexi_logger::{LogSpecification, Logger, LoggerHandle};
use log::{info, warn};
use std::env;
use std::path::PathBuf;

/// Starts logging to stderr. The log specification is taken from
/// `DAVINCI_LOG` and defaults to `info`. Logging stops when the
/// returned handle is dropped.
pub fn init_logging() -> LoggerHandle {
    let spec = env::var(env_var_names::LOG).ok();
    let (spec, parse_error) = match spec.as_deref().map(LogSpecification::parse) {
        Some(Ok(spec)) => (spec, None),
        Some(Err(err)) => (LogSpecification::info(), Some(err)),
        None => (LogSpecification::info(), None),
    };
    let handle = Logger::with(spec)
        .log_to_stderr()
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed: {}", e));
    if let Some(err) = parse_error {
        warn!("Invalid {}: {}", env_var_names::LOG, err);
    }
    handle
}

fn load() -> Result<(ProjectConfig, Tools)> {
    let config = ProjectConfig::detect()?;
    info!(
        "{} {} on {}",
        config.app_name,
        config.app_version,
        config.platform.short_text()
    );
    info!("Project: {}", config.project_dir.display());
    let tools = Tools::load(&config)?;
    Ok((config, tools))
}

#[derive(Debug, Parser)]
/// Generates qmake project files for the whole project tree.
pub struct MakeProFilesArgs {}

pub fn make_pro_files(_args: MakeProFilesArgs) -> Result<()> {
    let config = ProjectConfig::detect()?;
    let files = pro_files::generate(&config)?;
    info!("{} project files written", files.len());
    Ok(())
}

#[derive(Debug, Parser)]
/// Builds the release configuration of the project.
pub struct MakeBuildArgs {
    /// Branch selecting the toolchain (`windows_mingw` or `windows_msvc` on Windows)
    pub branch: Option<String>,
}

pub fn make_build(args: MakeBuildArgs) -> Result<()> {
    let (config, tools) = load()?;
    qmake_build::make_build(&config, &tools, args.branch.as_deref())
}

#[derive(Debug, Parser)]
/// Copies release binaries to the deploy directory and bundles Qt with them.
pub struct MakeDeployArgs {}

pub fn make_deploy(_args: MakeDeployArgs) -> Result<()> {
    let (config, tools) = load()?;
    deploy::make_deploy(&config, &tools)
}

#[derive(Debug, Parser)]
/// Creates the installer and the online repository.
pub struct MakeInstallerArgs {
    /// Name of the online repository (default: `macos_clang`)
    pub branch: Option<String>,
}

pub fn make_installer(args: MakeInstallerArgs) -> Result<()> {
    let (config, tools) = load()?;
    installer::make_installer(&config, &tools, args.branch.as_deref())
}

#[derive(Debug, Parser)]
/// Builds the documentation of the original libraries.
pub struct MakeDocsArgs {}

pub fn make_docs(_args: MakeDocsArgs) -> Result<()> {
    let (config, tools) = load()?;
    docs::make_docs(&config, &tools)
}

#[derive(Debug, Parser)]
/// Writes the release history to `CHANGELOG.md`.
pub struct MakeChangelogArgs {}

pub fn make_changelog(_args: MakeChangelogArgs) -> Result<()> {
    let config = ProjectConfig::detect()?;
    let changelog = Changelog::davinci()?;
    let path = save_string(
        &config.changelog_file,
        &changelog.to_markdown(&config.changelog_title),
        "",
    )?;
    info!("Created file: {}", path.display());
    Ok(())
}

#[derive(Debug, Parser)]
/// Uploads a file or a directory to an FTP server.
pub struct UploadArgs {
    /// Server name, optionally with `:port`
    pub server: String,
    pub username: String,
    pub password: String,
    /// File or directory to upload
    pub local_path: PathBuf,
    /// Remote directory. A directory upload replaces its content.
    pub remote_dir: String,
}

pub fn upload(args: UploadArgs) -> Result<()> {
    upload::upload(
        &args.server,
        &args.username,
        &args.password,
        &args.local_path,
        &args.remote_dir,
    )?;
    Ok(())
}
