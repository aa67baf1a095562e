//! Names, paths and metadata shared by all scripts.

use crate::changelog::Changelog;
use davinci_scripts_common::env_var_names;
use davinci_scripts_common::errors::{bail, Result};
use davinci_scripts_common::file_utils::canonicalize;
use davinci_scripts_common::target::{current_platform, Platform};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

/// Configuration table of the project. It's computed once from the
/// platform and the latest changelog entry and is read-only afterwards.
///
/// Paths point into the project tree located at `project_dir`:
///
/// ```text
/// <parent>/
///   Build/{Debug,Profile,Release,Deploy,Installer}
///   <project_dir>/
///     Applications/{Console,Window}
///     Libraries/{3rdParty,Original}
///     Tests  Resources  Examples  Docs  Scripts
/// ```
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub platform: Platform,

    // Application
    pub app_name: String,
    pub app_console_name: String,
    pub tests_name: String,
    pub app_file: String,
    pub app_console_file: String,
    pub tests_file: String,
    pub app_version: String,
    /// Release date as `11 Jan 2018`.
    pub app_release_date: String,
    /// Release date as `2018-01-11`.
    pub app_release_date_iso: String,
    pub app_release_year: String,
    pub app_domain: String,
    pub app_owner: String,
    pub app_publisher: String,
    pub app_url: String,
    pub app_copyright: String,
    pub app_description: String,
    pub issue_tracker_url: String,
    pub maintainer_name: String,
    pub user_manual_url: String,

    // Project tree
    pub project_name: String,
    pub project_dir: PathBuf,
    pub scripts_dir: PathBuf,
    pub project_subdirs: Vec<String>,
    /// Directories whose files are listed as `OTHER_FILES` of `Project.pro`.
    pub project_other_files_dirs: Vec<String>,
    pub other_files_ext: Vec<String>,

    // Applications
    pub apps_dir_name: String,
    pub console_app_dir_name: String,
    pub window_app_dir_name: String,
    pub apps_dir: PathBuf,
    pub console_app_dir: PathBuf,
    pub window_app_dir: PathBuf,
    pub apps_subdirs: Vec<String>,
    pub app_qt_modules: Vec<String>,
    pub app_console_config: Vec<String>,
    pub app_console_config_del: Vec<String>,

    // Libraries
    pub libs_config: String,
    pub libs_dir_name: String,
    pub my_libs_prefix: String,
    pub my_libs_dir_name: String,
    /// Built in this order, each one may depend on the previous ones.
    pub my_libs_names: Vec<String>,
    /// Extra Qt modules of original libraries.
    pub my_libs_qt_modules: Vec<(String, String)>,
    pub other_libs_dir_name: String,
    pub other_libs_names: Vec<String>,
    pub other_libs_qt_modules: String,
    pub libs_dir: PathBuf,
    pub my_libs_dir: PathBuf,
    pub other_libs_dir: PathBuf,
    pub libs_subdirs: Vec<String>,

    // Tests
    pub tests_dir_name: String,
    pub tests_dir: PathBuf,

    // Resources
    pub resources_dir: PathBuf,
    pub icon_dir: PathBuf,
    /// Desktop entry installed on Linux, relative to the project dir.
    pub desktop_file: String,

    // Builds
    pub build_dir: PathBuf,
    pub objects_dir_name: String,
    pub moc_dir_name: String,
    pub rcc_dir_name: String,
    pub ui_dir_name: String,
    /// qmake variable holding the name of the current build type directory.
    pub build_type: String,
    pub build_type_dir: PathBuf,
    pub debug_dir_name: String,
    pub profile_dir_name: String,
    pub release_dir_name: String,
    pub release_dir: PathBuf,
    /// Executables copied from the release dir to the deploy dir.
    pub deploy_names: Vec<String>,
    pub deploy_dir: PathBuf,

    // Installer
    pub installer_title: String,
    pub installer_version: String,
    pub installer_dir: PathBuf,
    pub installer_file: PathBuf,
    pub installer_config_dir: PathBuf,
    pub installer_config_file: PathBuf,
    pub installer_packages_dir: PathBuf,
    pub installer_package_id: String,
    pub installer_packages_data_dir: PathBuf,
    pub installer_packages_meta_dir: PathBuf,
    pub installer_package_file: PathBuf,
    pub control_script_file_name: String,
    pub control_script_file: PathBuf,
    pub install_script_file_name: String,
    pub install_script_file: PathBuf,
    pub target_dir: String,
    pub repos_url: String,
    pub default_repo_name: String,

    // Misc files
    pub license_name: String,
    pub license_file_name: String,
    pub license_file: PathBuf,
    pub changelog_file: PathBuf,
    pub changelog_title: String,
    pub examples_dir: PathBuf,

    // Documentation
    pub docs_dir: PathBuf,
    /// `.qdocconf` file without extension.
    pub docs_qdocconf_file: PathBuf,
    /// `.qhp`/`.qch` files without extension.
    pub docs_qhp_file: PathBuf,
    pub docs_qhp_namespace: String,
    pub docs_ignore_tokens: Vec<String>,

    // File extensions
    pub header_ext: Vec<String>,
    pub source_ext: Vec<String>,
    pub resource_ext: Vec<String>,
    pub doc_ext: Vec<String>,

    // C++
    /// Preprocessor macros giving the C++ code access to application metadata.
    pub defines: Vec<(String, String)>,
    /// Adds `%{function}`, `%{line}` etc. to release log messages.
    pub defines_misc: String,
    pub cpp_version: String,
    pub qmake_cxx_flags: Vec<String>,
}

impl ProjectConfig {
    /// Computes the configuration for the project located at `project_dir`.
    pub fn new(project_dir: &Path, platform: Platform, changelog: &Changelog) -> Result<Self> {
        if changelog.is_empty() {
            bail!("changelog is empty, the application version is unknown");
        }
        let project_dir = project_dir.to_path_buf();

        let app_name = "Davinci".to_string();
        let app_console_name = format!("{}Console", app_name);
        let tests_name = format!("{}Tests", app_name);
        let app_file = platform.gui_file_name(&app_name);
        let app_console_file = platform.cli_file_name(&app_console_name);
        let tests_file = platform.cli_file_name(&tests_name);

        let app_version = changelog.version().to_string();
        let app_release_date = changelog.date().to_string();
        let app_release_date_iso = changelog.release_date_iso()?;
        let app_release_year = changelog.release_year()?;

        let app_domain = "sazonov.org".to_string();
        let app_owner = "Andrew Sazonov".to_string();
        let app_publisher = "Sazonov".to_string();
        let app_url = "http://davinci.sazonov.org".to_string();
        let app_copyright = format!(
            "Copyright (C) {} {}. All rights reserved.",
            app_release_year, app_owner
        );
        let app_description = "A Scientific Software for the Visualization and Processing of \
                               Single-Crystal Diffraction Data Measured with a Point Detector"
            .to_string();
        let issue_tracker_url = format!("https://github.com/AndrewSazonov/{}/issues", app_name);
        let maintainer_name = format!("{}Uninstaller", app_name);
        let user_manual_url = format!("{}/umanual.html", app_url);

        let project_name = "Project".to_string();
        let scripts_dir = project_dir.join("Scripts");

        let apps_dir_name = "Applications".to_string();
        let console_app_dir_name = "Console".to_string();
        let window_app_dir_name = "Window".to_string();
        let apps_dir = project_dir.join(&apps_dir_name);

        let libs_dir_name = "Libraries".to_string();
        let my_libs_dir_name = "Original".to_string();
        let other_libs_dir_name = "3rdParty".to_string();
        let libs_dir = project_dir.join(&libs_dir_name);

        let tests_dir_name = "Tests".to_string();
        let resources_dir = project_dir.join("Resources");

        let build_dir = project_dir.join("..").join("Build");
        let build_type = "$${BUILD_TYPE}".to_string();
        let release_dir_name = "Release".to_string();

        let installer_dir = build_dir.join("Installer");
        let installer_config_dir = installer_dir.join("config");
        let installer_packages_dir = installer_dir.join("packages");
        let installer_package_id = "org.sazonov.davinci".to_string();
        let installer_packages_main_dir = installer_packages_dir.join(&installer_package_id);
        let installer_packages_meta_dir = installer_packages_main_dir.join("meta");
        let control_script_file_name = "controlscript.js".to_string();
        let install_script_file_name = "installscript.js".to_string();

        let license_file_name = "LICENSE".to_string();
        let docs_dir = project_dir.join("Docs");

        let defines = vec![
            ("APP_NAME", &app_name),
            ("APP_VERSION", &app_version),
            ("APP_RELEASE_DATE", &app_release_date),
            ("APP_URL", &app_url),
            ("APP_DOMAIN", &app_domain),
            ("APP_OWNER", &app_owner),
            ("APP_COPYRIGHT", &app_copyright),
            ("APP_DESCRIPTION", &app_description),
            ("MAINTAINER_NAME", &maintainer_name),
            ("USERMANUAL_URL", &user_manual_url),
            ("ISSUETRACKER_URL", &issue_tracker_url),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();

        let config = ProjectConfig {
            platform,
            deploy_names: vec![
                app_file.clone(),
                app_console_file.clone(),
                tests_file.clone(),
            ],
            installer_title: format!("{} Installer", app_name),
            installer_version: "1.0.0".to_string(),
            installer_file: installer_dir
                .join(format!("{}{}", app_name, platform.gui_file_name("Installer"))),
            installer_config_file: installer_config_dir.join("config.xml"),
            installer_packages_data_dir: installer_packages_main_dir.join("data"),
            installer_package_file: installer_packages_meta_dir.join("package.xml"),
            control_script_file: scripts_dir.join(&control_script_file_name),
            install_script_file: scripts_dir.join(&install_script_file_name),
            target_dir: platform.installer_target_dir(&app_name),
            repos_url: format!("{}/repositories", app_url),
            default_repo_name: "macos_clang".to_string(),
            license_name: "GNU General Public License Version 3".to_string(),
            license_file: project_dir.join(&license_file_name),
            changelog_file: project_dir.join("CHANGELOG.md"),
            changelog_title: format!("{} Version History", app_name),
            examples_dir: project_dir.join("Examples"),
            docs_qdocconf_file: project_dir.join(&app_name),
            docs_qhp_file: docs_dir.join(&app_name),
            docs_qhp_namespace: "org.sazonov.davinci.003".to_string(),
            docs_ignore_tokens: words("AS_BEGIN_NAMESPACE AS_END_NAMESPACE"),
            header_ext: words(".hpp .h"),
            source_ext: words(".cpp"),
            resource_ext: words(".qrc"),
            doc_ext: words(".qdoc"),
            defines,
            defines_misc: "QT_MESSAGELOGCONTEXT".to_string(),
            cpp_version: "c++11".to_string(),
            qmake_cxx_flags: words("-std=gnu++11 -std=c++11"),

            project_subdirs: vec![
                apps_dir_name.clone(),
                libs_dir_name.clone(),
                tests_dir_name.clone(),
            ],
            project_other_files_dirs: words("Scripts"),
            other_files_ext: words(".py .js .md .txt .yml"),
            console_app_dir: apps_dir.join(&console_app_dir_name),
            window_app_dir: apps_dir.join(&window_app_dir_name),
            apps_subdirs: vec![console_app_dir_name.clone(), window_app_dir_name.clone()],
            app_qt_modules: words("core gui xml svg network widgets printsupport"),
            app_console_config: words("console"),
            app_console_config_del: words("app_bundle"),
            libs_config: "staticlib".to_string(),
            my_libs_prefix: "As".to_string(),
            my_libs_names: words("Core Diffraction DataTypes Widgets"),
            my_libs_qt_modules: vec![
                ("Diffraction".to_string(), "widgets concurrent".to_string()),
                ("Widgets".to_string(), "widgets".to_string()),
            ],
            other_libs_names: words("QCodeEditor QCustomPlot"),
            other_libs_qt_modules: "widgets".to_string(),
            my_libs_dir: libs_dir.join(&my_libs_dir_name),
            other_libs_dir: libs_dir.join(&other_libs_dir_name),
            libs_subdirs: vec![other_libs_dir_name.clone(), my_libs_dir_name.clone()],
            tests_dir: project_dir.join(&tests_dir_name),
            icon_dir: resources_dir.join("Icon"),
            desktop_file: format!("Resources/Desktop/{}.desktop", app_name.to_lowercase()),
            objects_dir_name: ".obj".to_string(),
            moc_dir_name: ".moc".to_string(),
            rcc_dir_name: ".rcc".to_string(),
            ui_dir_name: ".ui".to_string(),
            build_type_dir: build_dir.join(&build_type),
            debug_dir_name: "Debug".to_string(),
            profile_dir_name: "Profile".to_string(),
            release_dir: build_dir.join(&release_dir_name),
            deploy_dir: build_dir.join("Deploy"),

            app_name,
            app_console_name,
            tests_name,
            app_file,
            app_console_file,
            tests_file,
            app_version,
            app_release_date,
            app_release_date_iso,
            app_release_year,
            app_domain,
            app_owner,
            app_publisher,
            app_url,
            app_copyright,
            app_description,
            issue_tracker_url,
            maintainer_name,
            user_manual_url,
            project_name,
            scripts_dir,
            apps_dir_name,
            console_app_dir_name,
            window_app_dir_name,
            apps_dir,
            libs_dir_name,
            my_libs_dir_name,
            other_libs_dir_name,
            libs_dir,
            tests_dir_name,
            resources_dir,
            build_type,
            release_dir_name,
            installer_dir,
            installer_config_dir,
            installer_packages_dir,
            installer_package_id,
            installer_packages_meta_dir,
            control_script_file_name,
            install_script_file_name,
            license_file_name,
            docs_dir,
            build_dir,
            project_dir,
        };
        debug!(
            "Configuration: {} {} ({}) on {}",
            config.app_name, config.app_version, config.app_release_date, config.platform
        );
        Ok(config)
    }

    /// Computes the configuration for the project found through
    /// the `DAVINCI_PROJECT_DIR` variable (or the current directory),
    /// the current platform and the built-in changelog.
    pub fn detect() -> Result<Self> {
        let dir = match env::var_os(env_var_names::PROJECT_DIR) {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()?,
        };
        let project_dir = canonicalize(dir)?;
        ProjectConfig::new(&project_dir, current_platform(), &Changelog::davinci()?)
    }

    /// Path of `Project.pro` (without extension).
    pub fn project_file(&self) -> PathBuf {
        self.project_dir.join(&self.project_name)
    }

    /// Extra Qt modules of original library `lib`.
    pub fn my_lib_qt_modules(&self, lib: &str) -> Option<&str> {
        self.my_libs_qt_modules
            .iter()
            .find(|(name, _)| name == lib)
            .map(|(_, modules)| modules.as_str())
    }

    /// Release build outputs to be deployed.
    pub fn release_paths_to_deploy(&self) -> Vec<PathBuf> {
        self.deploy_names
            .iter()
            .map(|name| self.release_dir.join(name))
            .collect()
    }

    /// Deployed application bundle or executable with file name `name`.
    pub fn deploy_path(&self, name: &str) -> PathBuf {
        self.deploy_dir.join(name)
    }
}
