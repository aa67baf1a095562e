use crate::file_utils::{
    copy_into, create_dir_all, dir_tree, dotted_extension, entry_list, file_to_string,
    join_path, normalize_path, os_string_into_string, recreate_dir, remove_if_exists, save_string,
    selected_file_list, sub_dir_list,
};
use std::path::Path;
use tempdir::TempDir;

fn touch(path: &Path) {
    save_string(path, "x", "").unwrap();
}

#[test]
fn join_path_normalizes_separators() {
    assert_eq!(join_path(&["a", "b", "c"]), "a/b/c");
    assert_eq!(join_path(&["a\\b", "c/../d"]), "a/b/d");
    assert_eq!(join_path(&["/project/Scripts", "..", "Build"]), "/project/Build");
    assert_eq!(join_path(&["C:\\Project\\Scripts", "..", "Build"]), "C:/Project/Build");
    assert_eq!(join_path(&["a", "/abs", "b"]), "/abs/b");
    assert_eq!(join_path(&["a//b/./c/"]), "a/b/c");
    assert_eq!(join_path(&["..", "a"]), "../a");
    assert_eq!(join_path(&["a", ".."]), ".");
    assert_eq!(join_path(&["/", ".."]), "/");
    assert_eq!(
        join_path(&["/p/Build", "$${BUILD_TYPE}", ".obj"]),
        "/p/Build/$${BUILD_TYPE}/.obj"
    );
}

#[test]
fn normalize_path_of_path_buf() {
    let path = Path::new("/project").join("Scripts").join("..").join("Build");
    assert_eq!(normalize_path(&path), "/project/Build");
}

#[test]
fn extensions() {
    assert_eq!(dotted_extension("main.cpp"), ".cpp");
    assert_eq!(dotted_extension("Window.hpp"), ".hpp");
    assert_eq!(dotted_extension("LICENSE"), "");
    assert_eq!(dotted_extension(".gitignore"), "");
}

#[test]
fn selected_files_include_first_level_subdirs() {
    let dir = TempDir::new("davinci_selected_files").unwrap();
    let root = dir.path();
    create_dir_all(root.join("Sub/Deep")).unwrap();
    touch(&root.join("b.cpp"));
    touch(&root.join("a.hpp"));
    touch(&root.join("c.h"));
    touch(&root.join("notes.txt"));
    touch(&root.join("Sub/d.hpp"));
    touch(&root.join("Sub/Deep/e.hpp"));

    let headers = selected_file_list(root, &[".hpp", ".h"]).unwrap();
    assert_eq!(headers, vec!["a.hpp", "c.h", "Sub/d.hpp"]);
    let sources = selected_file_list(root, &[".cpp"]).unwrap();
    assert_eq!(sources, vec!["b.cpp"]);
    let none = selected_file_list(root, &[".qdoc"]).unwrap();
    assert!(none.is_empty());
}

#[test]
fn dir_tree_is_top_down() {
    let dir = TempDir::new("davinci_dir_tree").unwrap();
    let root = dir.path();
    create_dir_all(root.join("B/C")).unwrap();
    create_dir_all(root.join("A")).unwrap();
    touch(&root.join("B/file.hpp"));
    let base = normalize_path(root);
    assert_eq!(
        dir_tree(root).unwrap(),
        vec![
            base.clone(),
            format!("{}/A", base),
            format!("{}/B", base),
            format!("{}/B/C", base),
        ]
    );
}

#[test]
fn copy_into_replaces_existing_dir() {
    let dir = TempDir::new("davinci_copy_into").unwrap();
    let root = dir.path();
    create_dir_all(root.join("src/Examples/Sub")).unwrap();
    touch(&root.join("src/Examples/Sub/new.txt"));
    touch(&root.join("src/LICENSE"));
    create_dir_all(root.join("dst/Examples")).unwrap();
    touch(&root.join("dst/Examples/stale.txt"));

    let copied = copy_into(root.join("src/Examples"), root.join("dst")).unwrap();
    assert_eq!(copied, root.join("dst/Examples"));
    assert!(root.join("dst/Examples/Sub/new.txt").is_file());
    assert!(!root.join("dst/Examples/stale.txt").exists());

    copy_into(root.join("src/LICENSE"), root.join("dst")).unwrap();
    assert_eq!(file_to_string(root.join("dst/LICENSE")).unwrap(), "x");
    assert_eq!(entry_list(root.join("dst")).unwrap(), vec!["Examples", "LICENSE"]);
}

#[test]
fn recreate_and_remove() {
    let dir = TempDir::new("davinci_recreate").unwrap();
    let target = dir.path().join("Release");
    create_dir_all(target.join("old")).unwrap();
    recreate_dir(&target).unwrap();
    assert!(target.is_dir());
    assert!(sub_dir_list(&target).unwrap().is_empty());

    recreate_dir(dir.path().join("New/Nested")).unwrap();
    assert!(dir.path().join("New/Nested").is_dir());

    let file = dir.path().join("Davinci.qdocconf");
    touch(&file);
    remove_if_exists(&file).unwrap();
    assert!(!file.exists());
    remove_if_exists(&file).unwrap();
    remove_if_exists(&target).unwrap();
    assert!(!target.exists());
}

#[test]
fn entry_list_is_sorted_and_includes_dirs() {
    let dir = TempDir::new("davinci_entries").unwrap();
    let root = dir.path();
    touch(&root.join("b.txt"));
    touch(&root.join("Z.md"));
    create_dir_all(root.join("a")).unwrap();
    assert_eq!(entry_list(root).unwrap(), vec!["Z.md", "a", "b.txt"]);
    assert!(entry_list(root.join("missing")).is_err());
}

#[test]
fn os_string_conversion() {
    assert_eq!(
        os_string_into_string("Window.pro".into()).unwrap(),
        "Window.pro"
    );
}

#[cfg(unix)]
#[test]
fn os_string_conversion_rejects_invalid_unicode() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    assert!(os_string_into_string(OsString::from_vec(vec![b'a', 0xff])).is_err());
}
