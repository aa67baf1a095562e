use super::{sample_config, sample_config_in};
use crate::installer::{config_xml, package_xml, prepare_installer_dir};
use davinci_scripts_common::file_utils::{
    create_dir_all, entry_list, file_to_string, save_string,
};
use davinci_scripts_common::target::Platform;
use tempdir::TempDir;

#[test]
fn installer_config() {
    let config = sample_config(Platform::MacOS);
    assert_eq!(
        config_xml(&config, "macos_clang").unwrap(),
        "<Installer>\r\n\
         \x20 <Name>Davinci</Name>\r\n\
         \x20 <Version>1.0.0</Version>\r\n\
         \x20 <Title>Davinci Installer</Title>\r\n\
         \x20 <Publisher>Sazonov</Publisher>\r\n\
         \x20 <ProductUrl>http://davinci.sazonov.org</ProductUrl>\r\n\
         \x20 <StartMenuDir>Davinci</StartMenuDir>\r\n\
         \x20 <TargetDir>@ApplicationsDir@/Davinci</TargetDir>\r\n\
         \x20 <MaintenanceToolName>DavinciUninstaller</MaintenanceToolName>\r\n\
         \x20 <RemoteRepositories>\r\n\
         \x20   <Repository>\r\n\
         \x20     <Url>http://davinci.sazonov.org/repositories/macos_clang</Url>\r\n\
         \x20   </Repository>\r\n\
         \x20 </RemoteRepositories>\r\n\
         \x20 <ControlScript>controlscript.js</ControlScript>\r\n\
         \x20 <InstallActionColumnVisible>false</InstallActionColumnVisible>\r\n\
         \x20 <AllowSpaceInPath>true</AllowSpaceInPath>\r\n\
         </Installer>"
    );
}

#[test]
fn package_description() {
    let config = sample_config(Platform::Linux);
    let xml = package_xml(&config).unwrap();
    assert!(xml.starts_with("<Package>\r\n  <DisplayName>Davinci</DisplayName>\r\n"));
    assert!(xml.contains("  <Version>1.0.6</Version>\r\n"));
    assert!(xml.contains("  <ReleaseDate>2018-07-07</ReleaseDate>\r\n"));
    assert!(xml.contains("  <Script>installscript.js</Script>\r\n"));
    assert!(xml.contains(
        "  <Licenses>\r\n\
         \x20   <License name=\"GNU General Public License Version 3\" file=\"LICENSE\"/>\r\n\
         \x20 </Licenses>\r\n"
    ));
    assert!(xml.ends_with(
        "  <Default>true</Default>\r\n\
         \x20 <Essential>true</Essential>\r\n\
         \x20 <ForcedInstallation>true</ForcedInstallation>\r\n\
         </Package>"
    ));
    // Only CRLF line endings.
    assert_eq!(xml.matches('\n').count(), xml.matches("\r\n").count());
}

#[test]
fn installer_dir_layout() {
    let dir = TempDir::new("davinci_installer").unwrap();
    let project = dir.path().join("Davinci");
    create_dir_all(&project).unwrap();
    let config = sample_config_in(&project, Platform::Linux);

    create_dir_all(config.deploy_dir.join("lib")).unwrap();
    save_string(config.deploy_dir.join("Davinci"), "bin", "").unwrap();
    save_string(config.deploy_dir.join("lib/libQt5Core.so"), "lib", "").unwrap();
    create_dir_all(&config.examples_dir).unwrap();
    save_string(config.examples_dir.join("sample.dat"), "data", "").unwrap();
    create_dir_all(&config.scripts_dir).unwrap();
    save_string(&config.license_file, "GPL", "").unwrap();
    save_string(&config.changelog_file, "# History", "").unwrap();
    save_string(&config.control_script_file, "// control", "").unwrap();
    save_string(&config.install_script_file, "// install", "").unwrap();
    // Leftover of a previous run.
    create_dir_all(&config.installer_dir).unwrap();
    save_string(config.installer_dir.join("stale.txt"), "", "").unwrap();

    prepare_installer_dir(&config, "linux").unwrap();

    assert_eq!(entry_list(&config.installer_dir).unwrap(), vec!["config", "packages"]);
    assert_eq!(
        entry_list(&config.installer_config_dir).unwrap(),
        vec!["config.xml", "controlscript.js"]
    );
    assert_eq!(
        entry_list(&config.installer_packages_data_dir).unwrap(),
        vec!["CHANGELOG.md", "Davinci", "Examples", "lib"]
    );
    assert_eq!(
        entry_list(&config.installer_packages_meta_dir).unwrap(),
        vec!["LICENSE", "installscript.js", "package.xml"]
    );
    assert_eq!(
        file_to_string(config.installer_packages_data_dir.join("lib/libQt5Core.so")).unwrap(),
        "lib"
    );
    assert!(file_to_string(&config.installer_config_file)
        .unwrap()
        .contains("<Url>http://davinci.sazonov.org/repositories/linux</Url>"));
}
