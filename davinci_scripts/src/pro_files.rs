//! Generates qmake project files for the whole project tree.

use crate::config::ProjectConfig;
use crate::pro_file::{ProFile, Template};
use davinci_scripts_common::errors::Result;
use davinci_scripts_common::file_utils::selected_file_list;
use log::info;
use std::path::{Path, PathBuf};

/// Build output directories of one target: `<build type dir>/<kind>/<sub path...>`.
fn output_dir(config: &ProjectConfig, kind: &str, sub_path: &[&str]) -> PathBuf {
    let mut path = config.build_type_dir.join(kind);
    for segment in sub_path {
        path.push(segment);
    }
    path
}

fn set_output_dirs(pro: &mut ProFile, config: &ProjectConfig, sub_path: &[&str]) {
    pro.add_objects_dir(output_dir(config, &config.objects_dir_name, sub_path));
    pro.add_moc_dir(output_dir(config, &config.moc_dir_name, sub_path));
    pro.add_rcc_dir(output_dir(config, &config.rcc_dir_name, sub_path));
    pro.add_ui_dir(output_dir(config, &config.ui_dir_name, sub_path));
}

fn set_source_files(pro: &mut ProFile, config: &ProjectConfig, dir: &Path) -> Result<()> {
    pro.add_headers(selected_file_list(dir, &config.header_ext)?);
    pro.add_sources(selected_file_list(dir, &config.source_ext)?);
    Ok(())
}

/// Settings shared by applications and libraries.
fn set_common_for_all(pro: &mut ProFile, config: &ProjectConfig) {
    pro.add_build_type(
        &config.debug_dir_name,
        &config.profile_dir_name,
        &config.release_dir_name,
    );
    pro.add_dest_dir(&config.build_type_dir);

    for lib in &config.my_libs_names {
        pro.add_include_path(config.my_libs_dir.join(lib));
    }
    for lib in &config.other_libs_names {
        pro.add_include_path(config.other_libs_dir.join(lib));
    }
    pro.add_include_path(&config.resources_dir);

    for lib in &config.my_libs_names {
        pro.add_libs(&config.build_type_dir, &config.my_libs_prefix, lib);
    }
    for lib in &config.other_libs_names {
        pro.add_libs(&config.build_type_dir, "", lib);
    }

    pro.add_cpp_version(&config.cpp_version);
    pro.add_qmake_cxx_flags(&config.qmake_cxx_flags);
}

fn set_common_for_apps(pro: &mut ProFile, config: &ProjectConfig) {
    pro.add_template(Template::App);
    pro.add_string_defines(&config.defines);
    pro.add_define(&config.defines_misc);

    for lib in &config.my_libs_names {
        pro.add_post_target_deps(&config.build_type_dir, &config.my_libs_prefix, lib);
    }
    for lib in &config.other_libs_names {
        pro.add_post_target_deps(&config.build_type_dir, "", lib);
    }
}

fn set_common_for_libs(pro: &mut ProFile, config: &ProjectConfig) {
    pro.add_template(Template::Lib);
    pro.add_config(config.libs_config.as_str());
}

fn subdirs_pro_file(config: &ProjectConfig, sub_dirs: &[String]) -> ProFile {
    let mut pro = ProFile::new(config.platform);
    pro.add_template(Template::Subdirs);
    pro.add_sub_dirs(sub_dirs);
    pro
}

/// `Project.pro`: top-level subdirs project.
pub fn project_pro_file(config: &ProjectConfig) -> Result<ProFile> {
    let mut pro = subdirs_pro_file(config, &config.project_subdirs);
    pro.add_depends(&config.apps_dir_name, &config.libs_dir_name);
    pro.add_depends(&config.tests_dir_name, &config.libs_dir_name);
    for dir_name in &config.project_other_files_dirs {
        let dir = config.project_dir.join(dir_name);
        if !dir.is_dir() {
            continue;
        }
        let files: Vec<String> = selected_file_list(&dir, &config.other_files_ext)?
            .into_iter()
            .map(|file| format!("{}/{}", dir_name, file))
            .collect();
        pro.add_other_files(files);
    }
    Ok(pro)
}

/// `Window.pro`: the GUI application.
pub fn window_pro_file(config: &ProjectConfig) -> Result<ProFile> {
    let mut pro = ProFile::new(config.platform);
    set_common_for_all(&mut pro, config);
    set_common_for_apps(&mut pro, config);
    pro.add_icon(config.icon_dir.join(&config.app_name), &config.desktop_file);
    pro.add_qt(&config.app_qt_modules);
    pro.add_target(&config.app_name);
    set_output_dirs(&mut pro, config, &[config.apps_dir_name.as_str(), config.app_name.as_str()]);
    set_source_files(&mut pro, config, &config.window_app_dir)?;
    let resources = selected_file_list(&config.resources_dir, &config.resource_ext)?;
    pro.add_resources(&config.resources_dir, &resources);
    Ok(pro)
}

/// `Console.pro`: the command line application.
pub fn console_pro_file(config: &ProjectConfig) -> Result<ProFile> {
    let mut pro = ProFile::new(config.platform);
    set_common_for_all(&mut pro, config);
    set_common_for_apps(&mut pro, config);
    pro.add_qt(&config.app_qt_modules);
    pro.add_target(&config.app_console_name);
    pro.add_config(&config.app_console_config);
    pro.del_config(&config.app_console_config_del);
    set_output_dirs(
        &mut pro,
        config,
        &[config.apps_dir_name.as_str(), config.app_console_name.as_str()],
    );
    set_source_files(&mut pro, config, &config.console_app_dir)?;
    Ok(pro)
}

/// `Tests.pro`: the unit tests application.
pub fn tests_pro_file(config: &ProjectConfig) -> Result<ProFile> {
    let mut pro = ProFile::new(config.platform);
    set_common_for_all(&mut pro, config);
    set_common_for_apps(&mut pro, config);
    pro.add_target(&config.tests_name);
    pro.add_config(&config.app_console_config);
    pro.del_config(&config.app_console_config_del);
    set_output_dirs(&mut pro, config, &[config.apps_dir_name.as_str(), config.tests_name.as_str()]);
    set_source_files(&mut pro, config, &config.tests_dir)?;
    Ok(pro)
}

/// Project file of third-party library `lib`.
pub fn other_lib_pro_file(config: &ProjectConfig, lib: &str) -> Result<ProFile> {
    let mut pro = ProFile::new(config.platform);
    set_common_for_all(&mut pro, config);
    set_common_for_libs(&mut pro, config);
    pro.add_qt(config.other_libs_qt_modules.as_str());
    set_output_dirs(
        &mut pro,
        config,
        &[config.libs_dir_name.as_str(), config.other_libs_dir_name.as_str(), lib],
    );
    let dir = config.other_libs_dir.join(lib);
    set_source_files(&mut pro, config, &dir)?;
    pro.add_other_files(selected_file_list(&dir, &config.doc_ext)?);
    Ok(pro)
}

/// Project file of original library `lib`, built as `<prefix><lib>`.
pub fn my_lib_pro_file(config: &ProjectConfig, lib: &str) -> Result<ProFile> {
    let mut pro = ProFile::new(config.platform);
    set_common_for_all(&mut pro, config);
    set_common_for_libs(&mut pro, config);
    if let Some(modules) = config.my_lib_qt_modules(lib) {
        pro.add_qt(modules);
    }
    pro.add_target(&format!("{}{}", config.my_libs_prefix, lib));
    set_output_dirs(
        &mut pro,
        config,
        &[config.libs_dir_name.as_str(), config.my_libs_dir_name.as_str(), lib],
    );
    let dir = config.my_libs_dir.join(lib);
    set_source_files(&mut pro, config, &dir)?;
    pro.add_other_files(selected_file_list(&dir, &config.doc_ext)?);
    Ok(pro)
}

/// Generates and saves every project file. Returns paths of the
/// written files.
pub fn generate(config: &ProjectConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut save = |pro: ProFile, path: PathBuf| -> Result<()> {
        let path = pro.save(path)?;
        info!("Created file: {}", path.display());
        written.push(path);
        Ok(())
    };

    save(project_pro_file(config)?, config.project_file())?;

    save(
        subdirs_pro_file(config, &config.apps_subdirs),
        config.apps_dir.join(&config.apps_dir_name),
    )?;
    save(
        window_pro_file(config)?,
        config.window_app_dir.join(&config.window_app_dir_name),
    )?;
    save(
        console_pro_file(config)?,
        config.console_app_dir.join(&config.console_app_dir_name),
    )?;

    save(
        subdirs_pro_file(config, &config.libs_subdirs),
        config.libs_dir.join(&config.libs_dir_name),
    )?;
    save(
        subdirs_pro_file(config, &config.other_libs_names),
        config.other_libs_dir.join(&config.other_libs_dir_name),
    )?;
    for lib in &config.other_libs_names {
        save(
            other_lib_pro_file(config, lib)?,
            config.other_libs_dir.join(lib).join(lib),
        )?;
    }
    save(
        subdirs_pro_file(config, &config.my_libs_names),
        config.my_libs_dir.join(&config.my_libs_dir_name),
    )?;
    for lib in &config.my_libs_names {
        save(
            my_lib_pro_file(config, lib)?,
            config.my_libs_dir.join(lib).join(lib),
        )?;
    }

    save(
        tests_pro_file(config)?,
        config.tests_dir.join(&config.tests_dir_name),
    )?;
    Ok(written)
}
