//! Various utilities for working with files and paths

use crate::errors::{bail, err_msg, Result, ResultExt};
use log::trace;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Joins `segments` into one path and normalizes it: `.` and empty
/// components are dropped, `..` consumes the preceding component and
/// both `/` and `\` are treated as separators. The result always uses
/// `/` as separator, which both Windows and Unix tools accept.
///
/// As with `Path::join`, an absolute segment discards everything
/// before it.
pub fn join_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if is_absolute_str(segment) || joined.is_empty() {
            joined = segment.to_string();
        } else {
            joined.push('/');
            joined.push_str(segment);
        }
    }
    normalize_path_str(&joined)
}

/// Normalizes `path` the same way as `join_path` does.
pub fn normalize_path(path: &Path) -> String {
    normalize_path_str(&path.to_string_lossy())
}

fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn is_absolute_str(s: &str) -> bool {
    s.starts_with('/') || s.starts_with('\\') || has_drive_prefix(s)
}

fn normalize_path_str(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let (prefix, rest) = if has_drive_prefix(&unified) {
        let (drive, rest) = unified.split_at(2);
        if rest.starts_with('/') {
            (format!("{}/", drive), rest)
        } else {
            (drive.to_string(), rest)
        }
    } else if unified.starts_with('/') {
        ("/".to_string(), unified.as_str())
    } else {
        (String::new(), unified.as_str())
    };
    let rooted = prefix.ends_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().map_or(false, |last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }
    let joined = parts.join("/");
    if prefix.is_empty() && joined.is_empty() {
        ".".to_string()
    } else {
        format!("{}{}", prefix, joined)
    }
}

/// Opens `path` for buffered reading.
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<BufReader<fs::File>> {
    let file = fs::File::open(path.as_ref())
        .with_context(|_| format!("Failed to open file for reading: {:?}", path.as_ref()))?;
    Ok(BufReader::new(file))
}

/// Returns content of the file `path` as a string.
pub fn file_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(fs::read_to_string(path.as_ref())
        .with_context(|_| format!("Failed to read from file: {:?}", path.as_ref()))?)
}

/// Appends `extension` to the file name of `path`.
/// `with_appended_extension("a/Project", ".pro")` is `a/Project.pro`.
pub fn with_appended_extension<P: AsRef<Path>>(path: P, extension: &str) -> PathBuf {
    let mut os_string: OsString = path.as_ref().as_os_str().to_os_string();
    os_string.push(extension);
    PathBuf::from(os_string)
}

/// Writes `content` to `path` with `extension` appended to the file name,
/// replacing the old file if it exists.
pub fn save_string<P: AsRef<Path>>(path: P, content: &str, extension: &str) -> Result<PathBuf> {
    let path = with_appended_extension(path, extension);
    fs::write(&path, content).with_context(|_| format!("Failed to write file: {:?}", path))?;
    trace!("File written: {}", path.display());
    Ok(path)
}

/// Deserialize value from TOML file `path`.
pub fn load_toml<P: AsRef<Path>, T: serde::de::DeserializeOwned>(path: P) -> Result<T> {
    let data = file_to_string(path.as_ref())?;
    Ok(toml::from_str(&data)
        .with_context(|_| format!("failed to parse TOML file: {}", path.as_ref().display()))?)
}

/// A wrapper over `std::fs::create_dir` with better error reporting
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir(path.as_ref())
        .with_context(|_| format!("Failed to create dir: {:?}", path.as_ref()))?;
    Ok(())
}

/// A wrapper over `std::fs::create_dir_all` with better error reporting
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path.as_ref()).with_context(|_| {
        format!(
            "Failed to create dirs (with parent components): {:?}",
            path.as_ref()
        )
    })?;
    Ok(())
}

/// A wrapper over `std::fs::remove_dir_all` with better error reporting
pub fn remove_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::remove_dir_all(path.as_ref())
        .with_context(|_| format!("Failed to remove dir (recursively): {:?}", path.as_ref()))?;
    Ok(())
}

/// A wrapper over `std::fs::remove_file` with better error reporting
pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::remove_file(path.as_ref())
        .with_context(|_| format!("Failed to remove file: {:?}", path.as_ref()))?;
    Ok(())
}

/// Removes directory `path` with its content. Does nothing if `path`
/// is not an existing directory.
pub fn remove_dir_if_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    if path.as_ref().is_dir() {
        trace!("Removing dir: {}", path.as_ref().display());
        remove_dir_all(path)?;
    }
    Ok(())
}

/// Removes `path`, whether it's a file or a directory. Does nothing if
/// `path` doesn't exist.
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        remove_dir_if_exists(path)
    } else if path.exists() {
        trace!("Removing file: {}", path.display());
        remove_file(path)
    } else {
        Ok(())
    }
}

/// Creates directory `path` with all missing parents, unless it exists.
pub fn create_dir_if_absent<P: AsRef<Path>>(path: P) -> Result<()> {
    if !path.as_ref().exists() {
        trace!("Creating dir: {}", path.as_ref().display());
        create_dir_all(path)?;
    }
    Ok(())
}

/// Removes directory `path` if it exists and creates it again, empty.
pub fn recreate_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    remove_dir_if_exists(path.as_ref())?;
    create_dir_if_absent(path)
}

/// A wrapper over `std::fs::copy` with better error reporting
pub fn copy_file<P: AsRef<Path>, P2: AsRef<Path>>(path1: P, path2: P2) -> Result<()> {
    fs::copy(path1.as_ref(), path2.as_ref())
        .map(|_| ())
        .with_context(|_| {
            format!(
                "Failed to copy file from {:?} to {:?}",
                path1.as_ref(),
                path2.as_ref()
            )
        })?;
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src)
        .with_context(|_| format!("Failed to read symlink: {:?}", src))?;
    std::os::unix::fs::symlink(&target, dst)
        .with_context(|_| format!("Failed to create symlink: {:?} -> {:?}", dst, target))?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    copy_recursively_resolved(src, dst)
}

/// Copy file or directory `src` to `dst` recursively.
/// Symbolic links are copied as links on Unix, which keeps
/// MacOS application bundles intact.
pub fn copy_recursively<P: AsRef<Path>, P2: AsRef<Path>>(src: P, dst: P2) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let inner = || -> Result<()> {
        let is_symlink = fs::symlink_metadata(src)
            .with_context(|_| format!("Failed to read metadata: {:?}", src))?
            .file_type()
            .is_symlink();
        if is_symlink {
            copy_symlink(src, dst)
        } else {
            copy_recursively_resolved(src, dst)
        }
    };
    inner().with_context(|_| format!("failed: copy_recursively({:?}, {:?})", src, dst))?;
    Ok(())
}

fn copy_recursively_resolved(src: &Path, dst: &Path) -> Result<()> {
    if src.is_dir() {
        if !dst.is_dir() {
            create_dir(dst)?;
        }
        for item in read_dir(src)? {
            let item = item?;
            copy_recursively(item.path(), dst.join(item.file_name()))?;
        }
    } else {
        copy_file(src, dst)?;
    }
    Ok(())
}

/// Copies file or directory `src` into directory `dst_dir`, keeping its
/// name. A directory with the same name already present in `dst_dir`
/// is replaced.
pub fn copy_into<P: AsRef<Path>, P2: AsRef<Path>>(src: P, dst_dir: P2) -> Result<PathBuf> {
    let src = src.as_ref();
    let name = src
        .file_name()
        .ok_or_else(|| err_msg(format!("Path has no file name: {}", src.display())))?;
    let dst = dst_dir.as_ref().join(name);
    if src.is_dir() {
        remove_dir_if_exists(&dst)?;
    }
    trace!("Copying {} to {}", src.display(), dst.display());
    copy_recursively(src, &dst)?;
    Ok(dst)
}

/// A wrapper over `std::fs::DirEntry` iterator with better error reporting
pub struct ReadDir {
    read_dir: fs::ReadDir,
    path: PathBuf,
}

/// A wrapper over `std::fs::read_dir` with better error reporting
pub fn read_dir<P: AsRef<Path>>(path: P) -> Result<ReadDir> {
    Ok(ReadDir {
        read_dir: fs::read_dir(path.as_ref())
            .with_context(|_| format!("Failed to read dir: {:?}", path.as_ref()))?,
        path: path.as_ref().to_path_buf(),
    })
}

impl Iterator for ReadDir {
    type Item = Result<fs::DirEntry>;
    fn next(&mut self) -> Option<Result<fs::DirEntry>> {
        self.read_dir.next().map(|value| {
            Ok(value.with_context(|_| format!("Failed to read dir (in item): {:?}", self.path))?)
        })
    }
}

/// Returns sorted names of all entries (files and directories) of `dir`.
pub fn entry_list<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for item in read_dir(dir)? {
        names.push(os_string_into_string(item?.file_name())?);
    }
    names.sort();
    Ok(names)
}

/// Returns sorted names of files located directly in `dir`.
pub fn file_list<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    Ok(entry_list(dir)?
        .into_iter()
        .filter(|name| dir.join(name).is_file())
        .collect())
}

/// Returns sorted names of directories located directly in `dir`.
pub fn sub_dir_list<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    Ok(entry_list(dir)?
        .into_iter()
        .filter(|name| dir.join(name).is_dir())
        .collect())
}

/// Returns extension of `file_name` including the leading dot,
/// or an empty string. Dot files like `.gitignore` have no extension.
pub fn dotted_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Returns files of `dir` and of its first-level subdirectories having
/// one of `extensions` (given with the leading dot, e.g. `".hpp"`).
/// Files of subdirectories are returned as `"<subdir>/<file>"`.
/// Files of `dir` come first, grouped in the order of `extensions`.
pub fn selected_file_list<P, S>(dir: P, extensions: &[S]) -> Result<Vec<String>>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let dir = dir.as_ref();
    let mut result = Vec::new();
    let files = file_list(dir)?;
    for extension in extensions {
        result.extend(
            files
                .iter()
                .filter(|file| dotted_extension(file) == extension.as_ref())
                .cloned(),
        );
    }
    for sub_dir in sub_dir_list(dir)? {
        let files = file_list(dir.join(&sub_dir))?;
        for extension in extensions {
            result.extend(
                files
                    .iter()
                    .filter(|file| dotted_extension(file) == extension.as_ref())
                    .map(|file| format!("{}/{}", sub_dir, file)),
            );
        }
    }
    Ok(result)
}

/// Returns `dir` and all directories below it, top-down, as normalized
/// paths.
pub fn dir_tree<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    fn walk(dir: &Path, output: &mut Vec<String>) -> Result<()> {
        output.push(normalize_path(dir));
        for sub_dir in sub_dir_list(dir)? {
            walk(&dir.join(sub_dir), output)?;
        }
        Ok(())
    }
    let mut output = Vec::new();
    walk(dir.as_ref(), &mut output)?;
    Ok(output)
}

/// Canonicalize `path`. Similar to `std::fs::canonicalize`, but
/// `\\?\` prefix is removed. Windows implementation of `std::fs::canonicalize`
/// adds this prefix, but qmake and the Qt deploy tools don't process it.
pub fn canonicalize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    Ok(dunce::canonicalize(path.as_ref())
        .with_context(|_| format!("failed to canonicalize {}", path.as_ref().display()))?)
}

/// A wrapper over `Path::to_str` with better error reporting
pub fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| err_msg(format!("Path is not valid unicode: {}", path.display())))
}

/// A wrapper over `OsStr::to_str` with better error reporting
pub fn os_str_to_str(os_str: &OsStr) -> Result<&str> {
    os_str.to_str().ok_or_else(|| {
        err_msg(format!(
            "String is not valid unicode: {}",
            os_str.to_string_lossy()
        ))
    })
}

/// A wrapper over `OsString::into_string` with better error reporting
pub fn os_string_into_string(s: OsString) -> Result<String> {
    s.into_string().map_err(|s| {
        err_msg(format!(
            "String is not valid unicode: {}",
            s.to_string_lossy()
        ))
    })
}

/// Returns the last component of `path` as a string.
pub fn file_name_str(path: &Path) -> Result<&str> {
    match path.file_name() {
        Some(name) => os_str_to_str(name),
        None => bail!("Path has no file name: {}", path.display()),
    }
}
