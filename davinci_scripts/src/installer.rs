//! Qt Installer Framework descriptors and the installer pipeline.

use crate::config::ProjectConfig;
use crate::tools::Tools;
use davinci_scripts_common::errors::{format_err, Result};
use davinci_scripts_common::file_utils::{
    copy_into, create_dir_all, entry_list, path_to_str, remove_dir_if_exists, save_string,
};
use davinci_scripts_common::utils::run_pipeline_step;
use log::info;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::process::Command;

/// Repository branch used when none is given.
pub const DEFAULT_BRANCH: &str = "macos_clang";

/// Small helper over `quick_xml::Writer` producing the nested
/// `<Tag>text</Tag>` layout of the installer descriptors.
struct XmlBuilder {
    writer: Writer<Vec<u8>>,
}

impl XmlBuilder {
    fn new() -> Self {
        XmlBuilder {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn start(&mut self, tag: &str) -> Result<()> {
        self.writer
            .write_event(Event::Start(BytesStart::new(tag)))?;
        Ok(())
    }

    fn end(&mut self, tag: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    fn text_element(&mut self, tag: &str, text: &str) -> Result<()> {
        self.start(tag)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(tag)
    }

    fn empty_element(&mut self, tag: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(tag).with_attributes(attributes.iter().cloned());
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    /// Returns the document with CRLF line endings.
    fn finish(self) -> Result<String> {
        let text = String::from_utf8(self.writer.into_inner())
            .map_err(|err| format_err!("generated XML is not valid UTF-8: {}", err))?;
        Ok(text.replace('\n', "\r\n"))
    }
}

/// Global installer configuration (`config/config.xml`) pointing
/// to the online repository `repo`.
pub fn config_xml(config: &ProjectConfig, repo: &str) -> Result<String> {
    let mut xml = XmlBuilder::new();
    xml.start("Installer")?;
    xml.text_element("Name", &config.app_name)?;
    xml.text_element("Version", &config.installer_version)?;
    xml.text_element("Title", &config.installer_title)?;
    xml.text_element("Publisher", &config.app_publisher)?;
    xml.text_element("ProductUrl", &config.app_url)?;
    xml.text_element("StartMenuDir", &config.app_name)?;
    xml.text_element("TargetDir", &config.target_dir)?;
    xml.text_element("MaintenanceToolName", &config.maintainer_name)?;
    xml.start("RemoteRepositories")?;
    xml.start("Repository")?;
    xml.text_element("Url", &format!("{}/{}", config.repos_url, repo))?;
    xml.end("Repository")?;
    xml.end("RemoteRepositories")?;
    xml.text_element("ControlScript", &config.control_script_file_name)?;
    xml.text_element("InstallActionColumnVisible", "false")?;
    xml.text_element("AllowSpaceInPath", "true")?;
    xml.end("Installer")?;
    xml.finish()
}

/// Description of the application package (`meta/package.xml`).
pub fn package_xml(config: &ProjectConfig) -> Result<String> {
    let mut xml = XmlBuilder::new();
    xml.start("Package")?;
    xml.text_element("DisplayName", &config.app_name)?;
    xml.text_element("Version", &config.app_version)?;
    xml.text_element("ReleaseDate", &config.app_release_date_iso)?;
    xml.text_element("Description", &config.app_description)?;
    xml.text_element("Script", &config.install_script_file_name)?;
    xml.start("Licenses")?;
    xml.empty_element(
        "License",
        &[
            ("name", config.license_name.as_str()),
            ("file", config.license_file_name.as_str()),
        ],
    )?;
    xml.end("Licenses")?;
    xml.text_element("Default", "true")?;
    xml.text_element("Essential", "true")?;
    xml.text_element("ForcedInstallation", "true")?;
    xml.end("Package")?;
    xml.finish()
}

/// Lays out the installer directory tree and fills it with
/// the descriptors, deployed binaries and project files.
pub fn prepare_installer_dir(config: &ProjectConfig, branch: &str) -> Result<()> {
    remove_dir_if_exists(&config.installer_dir)?;
    create_dir_all(&config.installer_config_dir)?;
    create_dir_all(&config.installer_packages_data_dir)?;
    create_dir_all(&config.installer_packages_meta_dir)?;

    save_string(&config.installer_config_file, &config_xml(config, branch)?, "")?;
    save_string(&config.installer_package_file, &package_xml(config)?, "")?;

    for name in entry_list(&config.deploy_dir)? {
        copy_into(config.deploy_dir.join(name), &config.installer_packages_data_dir)?;
    }
    copy_into(&config.examples_dir, &config.installer_packages_data_dir)?;
    copy_into(&config.license_file, &config.installer_packages_meta_dir)?;
    copy_into(&config.changelog_file, &config.installer_packages_data_dir)?;
    copy_into(&config.control_script_file, &config.installer_config_dir)?;
    copy_into(&config.install_script_file, &config.installer_packages_meta_dir)?;
    Ok(())
}

/// Builds the offline installer and the online repository for `branch`
/// (`DEFAULT_BRANCH` if `None`).
pub fn make_installer(config: &ProjectConfig, tools: &Tools, branch: Option<&str>) -> Result<()> {
    let branch = branch.unwrap_or(DEFAULT_BRANCH);
    info!("Preparing installer files for branch {}", branch);
    prepare_installer_dir(config, branch)?;

    info!("Creating installer {}", config.installer_file.display());
    run_pipeline_step(
        Command::new(&tools.binarycreator)
            .arg(path_to_str(&config.installer_file)?)
            .arg("-c")
            .arg(path_to_str(&config.installer_config_file)?)
            .arg("-p")
            .arg(path_to_str(&config.installer_packages_dir)?)
            .arg("--verbose"),
    )?;

    let repository = config.installer_dir.join(branch);
    info!("Creating repository {}", repository.display());
    run_pipeline_step(
        Command::new(&tools.repogen)
            .arg("--verbose")
            .arg("--update-new-components")
            .arg("-p")
            .arg(path_to_str(&config.installer_packages_dir)?)
            .arg(path_to_str(&repository)?),
    )?;
    Ok(())
}
