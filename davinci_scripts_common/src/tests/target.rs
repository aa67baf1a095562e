use crate::target::{Platform, WINDOWS_MINGW_BRANCH, WINDOWS_MSVC_BRANCH};

#[test]
fn executable_names() {
    assert_eq!(Platform::Windows.gui_file_name("Davinci"), "Davinci.exe");
    assert_eq!(Platform::MacOS.gui_file_name("Davinci"), "Davinci.app");
    assert_eq!(Platform::Linux.gui_file_name("Davinci"), "Davinci");
    assert_eq!(Platform::MacOS.cli_file_name("DavinciConsole"), "DavinciConsole");
    assert_eq!(Platform::Windows.cli_file_name("DavinciTests"), "DavinciTests.exe");
}

#[test]
fn static_library_only_on_mac() {
    assert_eq!(
        Platform::MacOS.static_library_path("/b/Release", "As", "Core"),
        Some("/b/Release/libAsCore.a".to_string())
    );
    assert_eq!(Platform::Linux.static_library_path("/b", "As", "Core"), None);
    assert_eq!(Platform::Windows.static_library_path("/b", "As", "Core"), None);
    assert_eq!(Platform::Unknown.static_library_path("/b", "As", "Core"), None);
}

#[test]
fn installer_target_dirs() {
    assert_eq!(
        Platform::MacOS.installer_target_dir("Davinci"),
        "@ApplicationsDir@/Davinci"
    );
    assert_eq!(
        Platform::Windows.installer_target_dir("Davinci"),
        "@ApplicationsDir@\\Davinci"
    );
    assert_eq!(
        Platform::Linux.installer_target_dir("Davinci"),
        "@HomeDir@/Davinci"
    );
}

#[test]
fn toolchains() {
    let mac = Platform::MacOS.toolchain("").unwrap();
    assert_eq!(mac.qmake_args, vec!["-spec", "macx-clang", "CONFIG+=x86_64"]);
    assert_eq!(mac.make_command, vec!["make"]);

    let lin = Platform::Linux.toolchain("anything").unwrap();
    assert_eq!(lin.qmake_args, vec!["PREFIX=/usr"]);

    let msvc = Platform::Windows.toolchain(WINDOWS_MSVC_BRANCH).unwrap();
    assert_eq!(msvc.make_command, vec!["nmake", "/NOLOGO"]);
    let mingw = Platform::Windows.toolchain(WINDOWS_MINGW_BRANCH).unwrap();
    assert_eq!(mingw.make_command, vec!["mingw32-make"]);

    assert!(Platform::Windows.toolchain("").is_err());
    assert!(Platform::Unknown.toolchain("").is_err());
}
