//! Qt installation properties reported by `qmake -query`.

use crate::tools::Tools;
use davinci_scripts_common::env_var_names;
use davinci_scripts_common::errors::{format_err, Result};
use davinci_scripts_common::file_utils::normalize_path;
use davinci_scripts_common::utils::get_command_output;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Ordered `NAME -> value` pairs describing the Qt installation,
/// used as environment of the documentation tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QtEnvironment {
    vars: Vec<(String, String)>,
}

impl QtEnvironment {
    /// Parses `qmake -query` output: one `NAME:value` per line.
    /// Only the first `:` separates the name, so Windows paths
    /// like `C:/Qt` are kept intact. Lines without a value are skipped.
    pub fn parse(output: &str) -> Self {
        let mut env = QtEnvironment::default();
        for line in output.lines() {
            let line = line.trim_end();
            if let Some((name, value)) = line.split_once(':') {
                if !name.is_empty() && !value.is_empty() {
                    env.set(name, value);
                }
            }
        }
        env
    }

    /// Runs `qmake -query` and parses its output.
    pub fn query(tools: &Tools) -> Result<Self> {
        let output = get_command_output(Command::new(&tools.qmake).arg("-query"))?;
        let env = Self::parse(&output);
        debug!("Qt properties: {:?}", env.vars);
        Ok(env)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets `name`, replacing the previous value.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.vars.iter_mut().find(|(key, _)| key == name) {
            Some(pair) => pair.1 = value.to_string(),
            None => self.vars.push((name.to_string(), value.to_string())),
        }
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    /// Fails if `name` is not set.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| format_err!("qmake doesn't report {}", name))
    }

    /// Adds the variables expected by the Qt documentation
    /// configuration: version aliases and the build directory.
    pub fn with_docs_vars(mut self, build_dir: &Path) -> Result<Self> {
        let version = self.require(env_var_names::QT_VERSION)?.to_string();
        self.set(env_var_names::QT_VERSION_TAG, &version);
        self.set(env_var_names::QT_VER, &version);
        self.set(env_var_names::BUILDDIR, &normalize_path(build_dir));
        Ok(self)
    }

    /// Passes all variables to `command`.
    pub fn apply(&self, command: &mut Command) {
        command.envs(self.vars.iter().map(|(key, value)| (key, value)));
    }
}
