//! Names of environment variables read or set by the scripts.

/// Root directory of the Davinci project (the one containing `Project.pro`).
/// The current directory is used if it's not set.
pub const PROJECT_DIR: &str = "DAVINCI_PROJECT_DIR";

/// Log specification in `flexi_logger` syntax, e.g. `debug` or
/// `info, davinci_scripts::upload=trace`.
pub const LOG: &str = "DAVINCI_LOG";

/// Qt documentation directory reported by `qmake -query`.
pub const QT_INSTALL_DOCS: &str = "QT_INSTALL_DOCS";

/// Qt version reported by `qmake -query`.
pub const QT_VERSION: &str = "QT_VERSION";

/// Version tag used by Qt's global QDoc configuration.
pub const QT_VERSION_TAG: &str = "QT_VERSION_TAG";

/// Short Qt version used by Qt's global QDoc configuration.
pub const QT_VER: &str = "QT_VER";

/// Build directory referenced by Qt's global QDoc configuration.
pub const BUILDDIR: &str = "BUILDDIR";
