//! Generator of qmake project files (`.pro`).

use davinci_scripts_common::errors::Result;
use davinci_scripts_common::file_utils::{join_path, normalize_path};
use davinci_scripts_common::target::Platform;
use davinci_scripts_common::text_document::{Operator, TextDocument, Values};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// Kind of the qmake project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    App,
    Lib,
    Subdirs,
}

impl Template {
    pub fn as_str(self) -> &'static str {
        match self {
            Template::App => "app",
            Template::Lib => "lib",
            Template::Subdirs => "subdirs",
        }
    }
}

/// A path given either literally or as segments to be joined.
/// Segments are joined and normalized to `/` separators,
/// a literal is emitted as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    Literal(String),
    Segments(Vec<String>),
}

impl PathValue {
    pub fn render(&self) -> String {
        match self {
            PathValue::Literal(path) => path.clone(),
            PathValue::Segments(segments) => join_path(segments),
        }
    }
}

impl From<&str> for PathValue {
    fn from(path: &str) -> Self {
        PathValue::Literal(path.to_string())
    }
}

impl From<String> for PathValue {
    fn from(path: String) -> Self {
        PathValue::Literal(path)
    }
}

impl From<Vec<String>> for PathValue {
    fn from(segments: Vec<String>) -> Self {
        PathValue::Segments(segments)
    }
}

impl From<&Path> for PathValue {
    fn from(path: &Path) -> Self {
        PathValue::Segments(vec![normalize_path(path)])
    }
}

impl From<&PathBuf> for PathValue {
    fn from(path: &PathBuf) -> Self {
        PathValue::from(path.as_path())
    }
}

impl From<PathBuf> for PathValue {
    fn from(path: PathBuf) -> Self {
        PathValue::from(path.as_path())
    }
}

/// Wraps `value` so that the compiler receives it as a string literal:
/// qmake, the shell and the compiler each strip one level of quoting.
pub fn quoted_define(key: &str, value: &str) -> String {
    format!("\"{}=\\\"\\\\\\\"{}\\\\\\\"\\\"\"", key, value)
}

/// Content of a qmake project file. Every `add_*` call appends
/// one or more lines; nothing is reordered.
#[derive(Debug, Clone)]
pub struct ProFile {
    platform: Platform,
    doc: TextDocument,
}

impl ProFile {
    /// Creates an empty project file for `platform`.
    pub fn new(platform: Platform) -> Self {
        ProFile {
            platform,
            doc: TextDocument::new(),
        }
    }

    fn add_path(&mut self, field: &str, operator: Operator, path: PathValue) {
        self.doc.emit(field, operator, path.render());
    }

    fn add_list(&mut self, field: &str, values: Values) {
        if !values.is_empty() {
            self.doc.emit(field, Operator::Append, values);
        }
    }

    pub fn add_target(&mut self, target: &str) {
        self.doc.emit("TARGET", Operator::Set, target);
    }

    pub fn add_template(&mut self, template: Template) {
        self.doc.emit("TEMPLATE", Operator::Set, template.as_str());
    }

    pub fn add_objects_dir(&mut self, path: impl Into<PathValue>) {
        self.add_path("OBJECTS_DIR", Operator::Set, path.into());
    }

    pub fn add_moc_dir(&mut self, path: impl Into<PathValue>) {
        self.add_path("MOC_DIR", Operator::Set, path.into());
    }

    pub fn add_rcc_dir(&mut self, path: impl Into<PathValue>) {
        self.add_path("RCC_DIR", Operator::Set, path.into());
    }

    pub fn add_ui_dir(&mut self, path: impl Into<PathValue>) {
        self.add_path("UI_DIR", Operator::Set, path.into());
    }

    pub fn add_dest_dir(&mut self, path: impl Into<PathValue>) {
        self.add_path("DESTDIR", Operator::Set, path.into());
    }

    pub fn add_include_path(&mut self, path: impl Into<PathValue>) {
        self.add_path("INCLUDEPATH", Operator::Append, path.into());
    }

    /// Skipped if `files` is empty. The same holds for sources,
    /// subdirectories, other files and Qt modules.
    pub fn add_headers(&mut self, files: impl Into<Values>) {
        self.add_list("HEADERS", files.into());
    }

    pub fn add_sources(&mut self, files: impl Into<Values>) {
        self.add_list("SOURCES", files.into());
    }

    pub fn add_sub_dirs(&mut self, dirs: impl Into<Values>) {
        self.add_list("SUBDIRS", dirs.into());
    }

    pub fn add_other_files(&mut self, files: impl Into<Values>) {
        self.add_list("OTHER_FILES", files.into());
    }

    pub fn add_qt(&mut self, modules: impl Into<Values>) {
        self.add_list("QT", modules.into());
    }

    /// Adds resource files located in `dir`.
    pub fn add_resources<S: AsRef<str>>(&mut self, dir: impl Into<PathValue>, files: &[S]) {
        if files.is_empty() {
            return;
        }
        let dir = dir.into().render();
        let paths = files
            .iter()
            .map(|file| join_path(&[dir.as_str(), file.as_ref()]))
            .collect_vec();
        self.doc.emit("RESOURCES", Operator::Append, paths);
    }

    pub fn add_define(&mut self, define: &str) {
        self.doc.emit("DEFINES", Operator::Append, define);
    }

    /// Adds one string macro per pair, keeping the order of `defines`.
    pub fn add_string_defines<K: AsRef<str>, V: AsRef<str>>(&mut self, defines: &[(K, V)]) {
        for (key, value) in defines {
            self.doc.emit(
                "DEFINES",
                Operator::Append,
                quoted_define(key.as_ref(), value.as_ref()),
            );
        }
    }

    pub fn add_config(&mut self, values: impl Into<Values>) {
        self.doc.emit("CONFIG", Operator::Append, values);
    }

    pub fn del_config(&mut self, values: impl Into<Values>) {
        self.doc.emit("CONFIG", Operator::Remove, values);
    }

    pub fn add_cpp_version(&mut self, version: &str) {
        self.add_config(version);
    }

    /// Links library `<prefix><lib>` located in `path`.
    pub fn add_libs(&mut self, path: impl Into<PathValue>, prefix: &str, lib: &str) {
        let path = path.into().render();
        self.doc.emit(
            "LIBS",
            Operator::Append,
            format!("-L{} -l{}{}", path, prefix, lib),
        );
    }

    /// Makes the target relink when static library `<prefix><lib>`
    /// located in `path` changes. Emits nothing on platforms where
    /// the library file name is not known.
    pub fn add_post_target_deps(&mut self, path: impl Into<PathValue>, prefix: &str, lib: &str) {
        let path = path.into().render();
        if let Some(library) = self.platform.static_library_path(&path, prefix, lib) {
            self.doc.emit("POST_TARGETDEPS", Operator::Append, library);
        }
    }

    /// Compiler flags for all compilers except MSVC.
    pub fn add_qmake_cxx_flags(&mut self, flags: impl Into<Values>) {
        self.doc.append_raw("!msvc { ");
        self.doc.emit_inline("QMAKE_CXXFLAGS", Operator::Append, flags);
        self.doc.append_raw(" }\n");
    }

    /// Sets `BUILD_TYPE` to the name of the output directory
    /// of the current build configuration.
    pub fn add_build_type(&mut self, debug_dir: &str, profile_dir: &str, release_dir: &str) {
        self.doc.text(&format!(
            "CONFIG(debug, debug|release)  {{ BUILD_TYPE = {} }}",
            debug_dir
        ));
        self.doc.text(&format!(
            "else:CONFIG(force_debug_info) {{ BUILD_TYPE = {} }}",
            profile_dir
        ));
        self.doc.text(&format!(
            "else                          {{ BUILD_TYPE = {} }}",
            release_dir
        ));
    }

    /// Subproject `app` is built after subproject `lib`.
    pub fn add_depends(&mut self, app: &str, lib: &str) {
        self.doc.text(&format!("{}.depends = {}", app, lib));
    }

    /// Sets up the application icon. `path` is the icon file without
    /// extension; `desktop_file` is the Linux desktop entry to install.
    pub fn add_icon(&mut self, path: impl Into<PathValue>, desktop_file: &str) {
        let path = path.into().render();
        match self.platform {
            Platform::MacOS => {
                self.doc.emit("ICON", Operator::Set, format!("{}.icns", path));
            }
            Platform::Windows => {
                self.doc.emit("RC_ICONS", Operator::Set, format!("{}.ico", path));
                self.doc.emit("RC_FILE", Operator::Set, format!("{}.rc", path));
            }
            Platform::Linux => {
                self.doc.text("isEmpty(PREFIX) { PREFIX = /usr/local }");
                self.doc.emit("shortcutfiles.files", Operator::Set, desktop_file);
                self.doc.emit(
                    "shortcutfiles.path",
                    Operator::Set,
                    "$$PREFIX/share/applications/",
                );
                self.doc.emit("INSTALLS", Operator::Append, "shortcutfiles");
            }
            Platform::Unknown => {}
        }
    }

    pub fn render(&self) -> &str {
        self.doc.render()
    }

    /// Writes the file to `path` + `.pro`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.doc.save(path, ".pro")
    }
}
