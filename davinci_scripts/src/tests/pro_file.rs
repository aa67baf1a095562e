use crate::pro_file::{quoted_define, PathValue, ProFile, Template};
use davinci_scripts_common::target::Platform;
use std::path::Path;

#[test]
fn lines_in_call_order() {
    let mut pro = ProFile::new(Platform::Linux);
    pro.add_target("Davinci");
    pro.add_qt(vec!["core", "gui"]);
    pro.add_template(Template::App);
    assert_eq!(
        pro.render(),
        "TARGET = Davinci\nQT += core gui\nTEMPLATE = app\n"
    );
}

#[test]
fn empty_lists_emit_nothing() {
    let mut pro = ProFile::new(Platform::MacOS);
    pro.add_headers(Vec::<String>::new());
    pro.add_sources(Vec::<String>::new());
    pro.add_sub_dirs(Vec::<String>::new());
    pro.add_other_files(Vec::<String>::new());
    pro.add_qt(Vec::<String>::new());
    let no_files: [&str; 0] = [];
    pro.add_resources("/p/Resources", &no_files);
    assert_eq!(pro.render(), "");
}

#[test]
fn paths_are_normalized() {
    let mut pro = ProFile::new(Platform::Linux);
    pro.add_dest_dir(Path::new("/p/Davinci/../Build/$${BUILD_TYPE}"));
    pro.add_include_path(vec!["/p".to_string(), "Libraries".to_string(), "Core".to_string()]);
    pro.add_objects_dir("literal\\path");
    assert_eq!(
        pro.render(),
        "DESTDIR = /p/Build/$${BUILD_TYPE}\n\
         INCLUDEPATH += /p/Libraries/Core\n\
         OBJECTS_DIR = literal\\path\n"
    );
    assert_eq!(PathValue::from("a/../b").render(), "a/../b");
}

#[test]
fn string_defines() {
    assert_eq!(
        quoted_define("APP_NAME", "Davinci"),
        r#""APP_NAME=\"\\\"Davinci\\\"\"""#
    );
    let mut pro = ProFile::new(Platform::Windows);
    pro.add_string_defines(&[("APP_NAME", "Davinci"), ("APP_VERSION", "1.0.6")]);
    pro.add_define("QT_MESSAGELOGCONTEXT");
    assert_eq!(
        pro.render(),
        "DEFINES += \"APP_NAME=\\\"\\\\\\\"Davinci\\\\\\\"\\\"\"\n\
         DEFINES += \"APP_VERSION=\\\"\\\\\\\"1.0.6\\\\\\\"\\\"\"\n\
         DEFINES += QT_MESSAGELOGCONTEXT\n"
    );
}

#[test]
fn libs_and_post_target_deps() {
    let mut mac = ProFile::new(Platform::MacOS);
    mac.add_libs("/b/$${BUILD_TYPE}", "As", "Core");
    mac.add_post_target_deps("/b/$${BUILD_TYPE}", "As", "Core");
    assert_eq!(
        mac.render(),
        "LIBS += -L/b/$${BUILD_TYPE} -lAsCore\n\
         POST_TARGETDEPS += /b/$${BUILD_TYPE}/libAsCore.a\n"
    );

    for platform in &[Platform::Windows, Platform::Linux] {
        let mut pro = ProFile::new(*platform);
        pro.add_post_target_deps("/b", "As", "Core");
        assert_eq!(pro.render(), "");
    }
}

#[test]
fn config_and_flags() {
    let mut pro = ProFile::new(Platform::MacOS);
    pro.add_config("staticlib");
    pro.add_cpp_version("c++11");
    pro.del_config(vec!["app_bundle"]);
    pro.add_qmake_cxx_flags(vec!["-std=gnu++11", "-std=c++11"]);
    assert_eq!(
        pro.render(),
        "CONFIG += staticlib\n\
         CONFIG += c++11\n\
         CONFIG -= app_bundle\n\
         !msvc { QMAKE_CXXFLAGS += -std=gnu++11 -std=c++11 }\n"
    );
}

#[test]
fn build_type_and_depends() {
    let mut pro = ProFile::new(Platform::Linux);
    pro.add_build_type("Debug", "Profile", "Release");
    pro.add_depends("Applications", "Libraries");
    assert_eq!(
        pro.render(),
        "CONFIG(debug, debug|release)  { BUILD_TYPE = Debug }\n\
         else:CONFIG(force_debug_info) { BUILD_TYPE = Profile }\n\
         else                          { BUILD_TYPE = Release }\n\
         Applications.depends = Libraries\n"
    );
}

#[test]
fn resources_are_joined_with_dir() {
    let mut pro = ProFile::new(Platform::Linux);
    pro.add_resources("/p/Resources", &["Fonts.qrc", "Icons/Icons.qrc"]);
    assert_eq!(
        pro.render(),
        "RESOURCES += /p/Resources/Fonts.qrc /p/Resources/Icons/Icons.qrc\n"
    );
}

#[test]
fn icon_per_platform() {
    let desktop = "Resources/Desktop/davinci.desktop";

    let mut mac = ProFile::new(Platform::MacOS);
    mac.add_icon("/p/Resources/Icon/Davinci", desktop);
    assert_eq!(mac.render(), "ICON = /p/Resources/Icon/Davinci.icns\n");

    let mut win = ProFile::new(Platform::Windows);
    win.add_icon("/p/Resources/Icon/Davinci", desktop);
    assert_eq!(
        win.render(),
        "RC_ICONS = /p/Resources/Icon/Davinci.ico\n\
         RC_FILE = /p/Resources/Icon/Davinci.rc\n"
    );

    let mut lin = ProFile::new(Platform::Linux);
    lin.add_icon("/p/Resources/Icon/Davinci", desktop);
    assert_eq!(
        lin.render(),
        "isEmpty(PREFIX) { PREFIX = /usr/local }\n\
         shortcutfiles.files = Resources/Desktop/davinci.desktop\n\
         shortcutfiles.path = $$PREFIX/share/applications/\n\
         INSTALLS += shortcutfiles\n"
    );
}

#[test]
fn save_appends_extension() {
    let dir = tempdir::TempDir::new("davinci_pro_file").unwrap();
    let mut pro = ProFile::new(Platform::Linux);
    pro.add_template(Template::Subdirs);
    pro.add_sub_dirs(vec!["Console", "Window"]);
    let path = pro.save(dir.path().join("Applications")).unwrap();
    assert_eq!(path, dir.path().join("Applications.pro"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "TEMPLATE = subdirs\nSUBDIRS += Console Window\n"
    );
}
