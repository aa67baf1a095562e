mod deploy;
mod installer;
mod pro_file;
mod qt_query;

use crate::changelog::Changelog;
use crate::config::ProjectConfig;
use davinci_scripts_common::target::Platform;
use std::path::Path;

/// Configuration of a project located at `/work/Davinci`.
fn sample_config(platform: Platform) -> ProjectConfig {
    sample_config_in(Path::new("/work/Davinci"), platform)
}

fn sample_config_in(project_dir: &Path, platform: Platform) -> ProjectConfig {
    ProjectConfig::new(project_dir, platform, &Changelog::davinci().unwrap()).unwrap()
}
