//! Operating system detection and the conventions that differ
//! between the platforms the application is built for.

use crate::errors::{bail, Result};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Operating system the scripts are running on. Each build is made
/// on the platform it targets, so this is also the target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unknown,
}

#[cfg(target_os = "windows")]
/// Returns current operating system
pub fn current_platform() -> Platform {
    Platform::Windows
}
#[cfg(target_os = "macos")]
/// Returns current operating system
pub fn current_platform() -> Platform {
    Platform::MacOS
}
#[cfg(target_os = "linux")]
/// Returns current operating system
pub fn current_platform() -> Platform {
    Platform::Linux
}
#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
/// Returns current operating system
pub fn current_platform() -> Platform {
    Platform::Unknown
}

/// Commands building the project generated by qmake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Extra arguments passed to qmake after the project file.
    pub qmake_args: Vec<String>,
    /// Make tool followed by its arguments.
    pub make_command: Vec<String>,
}

impl Toolchain {
    fn new(qmake_args: &[&str], make_command: &[&str]) -> Self {
        Toolchain {
            qmake_args: qmake_args.iter().map(|s| s.to_string()).collect(),
            make_command: make_command.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Windows branch built with MinGW.
pub const WINDOWS_MINGW_BRANCH: &str = "windows_mingw";
/// Windows branch built with Visual Studio.
pub const WINDOWS_MSVC_BRANCH: &str = "windows_msvc";

impl Platform {
    /// Short name used in logs.
    pub fn short_text(self) -> &'static str {
        match self {
            Platform::Windows => "win",
            Platform::MacOS => "mac",
            Platform::Linux => "lin",
            Platform::Unknown => "unknown",
        }
    }

    /// File name of a GUI application executable:
    /// `Name.exe`, `Name.app` or `Name`.
    pub fn gui_file_name(self, name: &str) -> String {
        match self {
            Platform::Windows => format!("{}.exe", name),
            Platform::MacOS => format!("{}.app", name),
            Platform::Linux | Platform::Unknown => name.to_string(),
        }
    }

    /// File name of a command line executable: `Name.exe` or `Name`.
    pub fn cli_file_name(self, name: &str) -> String {
        match self {
            Platform::Windows => format!("{}.exe", name),
            Platform::MacOS | Platform::Linux | Platform::Unknown => name.to_string(),
        }
    }

    /// Path of a static library built by qmake into `dir`, or `None` if
    /// the naming convention of this platform is not known.
    /// Only the MacOS `lib<name>.a` convention is implemented.
    pub fn static_library_path(self, dir: &str, prefix: &str, lib: &str) -> Option<String> {
        match self {
            Platform::MacOS => Some(format!("{}/lib{}{}.a", dir, prefix, lib)),
            Platform::Windows | Platform::Linux | Platform::Unknown => None,
        }
    }

    /// Default installation directory of the application in the
    /// Qt Installer Framework notation.
    pub fn installer_target_dir(self, app_name: &str) -> String {
        match self {
            Platform::MacOS => format!("@ApplicationsDir@/{}", app_name),
            Platform::Windows => format!("@ApplicationsDir@\\{}", app_name),
            Platform::Linux | Platform::Unknown => format!("@HomeDir@/{}", app_name),
        }
    }

    /// Returns qmake arguments and make command for `branch`.
    /// Windows has one toolchain per branch, other platforms
    /// ignore the branch.
    pub fn toolchain(self, branch: &str) -> Result<Toolchain> {
        Ok(match self {
            Platform::MacOS => Toolchain::new(&["-spec", "macx-clang", "CONFIG+=x86_64"], &["make"]),
            Platform::Windows => match branch {
                WINDOWS_MINGW_BRANCH => {
                    Toolchain::new(&["-spec", "win32-g++", "CONFIG+=x86"], &["mingw32-make"])
                }
                WINDOWS_MSVC_BRANCH => {
                    Toolchain::new(&["-spec", "win32-msvc", "CONFIG+=x64"], &["nmake", "/NOLOGO"])
                }
                _ => bail!(
                    "unknown Windows branch: {:?} (expected {} or {})",
                    branch,
                    WINDOWS_MINGW_BRANCH,
                    WINDOWS_MSVC_BRANCH
                ),
            },
            Platform::Linux => Toolchain::new(&["PREFIX=/usr"], &["make"]),
            Platform::Unknown => bail!("Unknown OS"),
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_text())
    }
}
