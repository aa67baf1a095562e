use crate::qt_query::QtEnvironment;
use std::path::Path;

const QUERY_OUTPUT: &str = "QT_SYSROOT:\n\
QT_INSTALL_PREFIX:C:/Qt/5.11.1/mingw53_32\n\
QT_INSTALL_DOCS:C:/Qt/Docs/Qt-5.11.1\n\
QT_VERSION:5.11.1\n\
QMAKE_SPEC:win32-g++\n";

#[test]
fn parse_keeps_colons_in_values() {
    let env = QtEnvironment::parse(QUERY_OUTPUT);
    assert_eq!(env.get("QT_INSTALL_PREFIX"), Some("C:/Qt/5.11.1/mingw53_32"));
    assert_eq!(env.get("QT_INSTALL_DOCS"), Some("C:/Qt/Docs/Qt-5.11.1"));
    assert_eq!(env.get("QT_VERSION"), Some("5.11.1"));
    assert_eq!(env.get("QT_SYSROOT"), None);
    assert_eq!(env.vars().len(), 4);
}

#[test]
fn parse_accepts_crlf() {
    let env = QtEnvironment::parse("QT_VERSION:5.11.1\r\nQT_INSTALL_DOCS:/opt/qt/doc\r\n");
    assert_eq!(env.get("QT_VERSION"), Some("5.11.1"));
    assert_eq!(env.get("QT_INSTALL_DOCS"), Some("/opt/qt/doc"));
}

#[test]
fn docs_vars() {
    let env = QtEnvironment::parse(QUERY_OUTPUT)
        .with_docs_vars(Path::new("/work/Davinci/../Build"))
        .unwrap();
    assert_eq!(env.get("QT_VERSION_TAG"), Some("5.11.1"));
    assert_eq!(env.get("QT_VER"), Some("5.11.1"));
    assert_eq!(env.get("BUILDDIR"), Some("/work/Build"));
}

#[test]
fn docs_vars_need_qt_version() {
    let env = QtEnvironment::parse("QT_INSTALL_DOCS:/opt/qt/doc\n");
    assert!(env.with_docs_vars(Path::new("/work/Build")).is_err());
}

#[test]
fn set_replaces_value() {
    let mut env = QtEnvironment::default();
    env.set("A", "1");
    env.set("B", "2");
    env.set("A", "3");
    assert_eq!(
        env.vars(),
        &[("A".to_string(), "3".to_string()), ("B".to_string(), "2".to_string())]
    );
}
