//! QDoc configuration and the documentation pipeline.

use crate::config::ProjectConfig;
use crate::qt_query::QtEnvironment;
use crate::tools::Tools;
use davinci_scripts_common::env_var_names;
use davinci_scripts_common::errors::Result;
use davinci_scripts_common::file_utils::{
    dir_tree, normalize_path, recreate_dir, remove_if_exists, with_appended_extension,
};
use davinci_scripts_common::text_document::{Operator, TextDocument};
use davinci_scripts_common::utils::run_pipeline_step;
use log::info;
use std::process::Command;

/// Renders the `.qdocconf` of the project. Headers and sources are
/// looked up in `header_dirs` and `source_dirs`.
pub fn qdoc_config(
    config: &ProjectConfig,
    qt_env: &QtEnvironment,
    header_dirs: &[String],
    source_dirs: &[String],
) -> Result<TextDocument> {
    let app = &config.app_name;
    let qt_docs = qt_env.require(env_var_names::QT_INSTALL_DOCS)?;

    let mut doc = TextDocument::new();
    doc.text(&format!(
        "include({}/global/qt-module-defaults.qdocconf)",
        qt_docs
    ));

    doc.emit("project", Operator::Set, app);
    doc.emit("description", Operator::Set, &config.app_description);
    doc.emit("version", Operator::Set, &config.app_version);

    // Overrides of the Qt defaults: home page title and navigation bar.
    doc.emit(
        "navigation.homepage",
        Operator::Set,
        format!("{} {}", app, config.app_version),
    );
    doc.emit(
        "buildversion",
        Operator::Set,
        format!("{} {} Reference Documentation", app, config.app_version),
    );

    doc.emit("qhp.projects", Operator::Set, app);
    doc.emit(
        &format!("qhp.{}.file", app),
        Operator::Set,
        format!("{}.qhp", app.to_lowercase()),
    );
    doc.emit(
        &format!("qhp.{}.namespace", app),
        Operator::Set,
        &config.docs_qhp_namespace,
    );
    doc.emit(&format!("qhp.{}.virtualFolder", app), Operator::Set, app);
    doc.emit(&format!("qhp.{}.indexTitle", app), Operator::Set, app);
    doc.emit(&format!("qhp.{}.indexRoot", app), Operator::Set, "");

    doc.emit("Cpp.ignoretokens", Operator::Append, &config.docs_ignore_tokens);
    doc.emit(
        "spurious",
        Operator::Set,
        ["\"Cannot find .*\"", "\"Missing .*\""],
    );

    doc.emit("outputdir", Operator::Set, normalize_path(&config.docs_dir));
    doc.emit("outputformats", Operator::Set, "HTML");

    doc.emit("headerdirs", Operator::Append, header_dirs);
    doc.emit("sourcedirs", Operator::Append, source_dirs);
    Ok(doc)
}

/// Builds HTML documentation and the Qt help file of the original
/// libraries.
pub fn make_docs(config: &ProjectConfig, tools: &Tools) -> Result<()> {
    let qt_env = QtEnvironment::query(tools)?.with_docs_vars(&config.build_dir)?;

    let dirs = dir_tree(&config.my_libs_dir)?;
    let doc = qdoc_config(config, &qt_env, &dirs, &dirs)?;
    let qdocconf = doc.save(&config.docs_qdocconf_file, ".qdocconf")?;
    info!("Created file: {}", qdocconf.display());

    recreate_dir(&config.docs_dir)?;

    info!("Running qdoc");
    let mut qdoc = Command::new(&tools.qdoc);
    qdoc.arg(&qdocconf);
    qt_env.apply(&mut qdoc);
    run_pipeline_step(&mut qdoc)?;

    info!("Running qhelpgenerator");
    let mut qhelpgenerator = Command::new(&tools.qhelpgenerator);
    qhelpgenerator
        .arg(with_appended_extension(&config.docs_qhp_file, ".qhp"))
        .arg("-o")
        .arg(with_appended_extension(&config.docs_qhp_file, ".qch"))
        .arg("-s");
    qt_env.apply(&mut qhelpgenerator);
    run_pipeline_step(&mut qhelpgenerator)?;

    remove_if_exists(&qdocconf)?;
    Ok(())
}
