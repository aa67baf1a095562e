//! Names of the external tools invoked by the scripts.

use crate::config::ProjectConfig;
use davinci_scripts_common::errors::Result;
use davinci_scripts_common::file_utils::load_toml;
use log::debug;
use serde_derive::{Deserialize, Serialize};
use std::path::PathBuf;

/// File in the scripts directory that can override tool names,
/// e.g. `qmake = "/opt/Qt/5.11.1/clang_64/bin/qmake"`.
pub const TOOLS_CONFIG_FILE_NAME: &str = "scripts.toml";

/// External tools. Each value is a program name looked up in `PATH`
/// or a full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tools {
    pub qmake: String,
    pub binarycreator: String,
    pub repogen: String,
    pub qdoc: String,
    pub qhelpgenerator: String,
    pub macdeployqt: String,
    pub windeployqt: String,
    pub linuxdeployqt: String,
}

impl Default for Tools {
    fn default() -> Self {
        Tools {
            qmake: "qmake".into(),
            binarycreator: "binarycreator".into(),
            repogen: "repogen".into(),
            qdoc: "qdoc".into(),
            qhelpgenerator: "qhelpgenerator".into(),
            macdeployqt: "macdeployqt".into(),
            windeployqt: "windeployqt".into(),
            linuxdeployqt: "linuxdeployqt".into(),
        }
    }
}

impl Tools {
    pub fn config_path(config: &ProjectConfig) -> PathBuf {
        config.scripts_dir.join(TOOLS_CONFIG_FILE_NAME)
    }

    /// Reads `scripts.toml` of the project if it exists.
    /// Tools missing in the file keep their default names.
    pub fn load(config: &ProjectConfig) -> Result<Self> {
        let path = Self::config_path(config);
        if path.exists() {
            debug!("Loading tool names from {}", path.display());
            load_toml(path)
        } else {
            Ok(Tools::default())
        }
    }
}
