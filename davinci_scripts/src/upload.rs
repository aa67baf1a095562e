//! Mirrors local build outputs to a remote FTP directory.

use davinci_scripts_common::errors::{bail, format_err, Error, Result};
use davinci_scripts_common::file_utils::{entry_list, file_name_str, open_file};
use log::{debug, info, warn};
use std::path::Path;
use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpResult, FtpStream};

/// Default FTP control port.
pub const FTP_PORT: u16 = 21;

/// File operations on the remote side. Paths are relative to the
/// current remote directory unless they start with `/`.
pub trait RemoteHost {
    fn dir_exists(&mut self, path: &str) -> Result<bool>;
    /// Removes directory `path` with everything below it.
    fn remove_dir_all(&mut self, path: &str) -> Result<()>;
    fn create_dir(&mut self, path: &str) -> Result<()>;
    fn change_dir(&mut self, path: &str) -> Result<()>;
    fn change_to_parent_dir(&mut self) -> Result<()>;
    /// Uploads local file `local` to `remote`, replacing an existing file.
    fn upload_file(&mut self, local: &Path, remote: &str) -> Result<()>;
}

fn ftp_error(action: &'static str, path: &str) -> impl FnOnce(FtpError) -> Error {
    let path = path.to_string();
    move |err| format_err!("FTP {} failed for {:?}: {}", action, path, err)
}

/// Returns `server` as `host:port`, adding `FTP_PORT` when no port is
/// given. Bare IPv6 literals are put in brackets.
pub(crate) fn server_address(server: &str) -> String {
    if let Some(rest) = server.strip_prefix('[') {
        return match rest.split_once("]:") {
            Some((_, port)) if port.parse::<u16>().is_ok() => server.to_string(),
            _ => format!("{}:{}", server, FTP_PORT),
        };
    }
    match server.split_once(':') {
        Some((_, port)) if port.parse::<u16>().is_ok() => server.to_string(),
        Some(_) => format!("[{}]:{}", server, FTP_PORT),
        None => format!("{}:{}", server, FTP_PORT),
    }
}

/// Full paths of the entries of remote directory `path` listed by NLST.
/// Servers that answer NLST on an empty directory with a 450 or 550
/// reply instead of an empty listing are handled as empty.
pub(crate) fn listed_children(
    path: &str,
    listing: FtpResult<Vec<String>>,
) -> Result<Vec<String>> {
    let entries = match listing {
        Ok(entries) => entries,
        Err(FtpError::UnexpectedResponse(response)) => {
            debug!("Nothing listed in {}: {:?}", path, response.status);
            Vec::new()
        }
        Err(err) => return Err(ftp_error("NLST", path)(err)),
    };
    let parent = path.trim_end_matches('/');
    Ok(entries
        .iter()
        // Some servers list full paths, others bare names.
        .filter_map(|entry| entry.rsplit('/').next())
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .map(|name| format!("{}/{}", parent, name))
        .collect())
}

/// Remote host reached over an FTP session. The session is closed
/// when the value is dropped.
pub struct FtpHost {
    stream: FtpStream,
}

impl FtpHost {
    /// Connects to `server` (`host` or `host:port`) and logs in.
    /// Transfers are binary.
    pub fn connect(server: &str, username: &str, password: &str) -> Result<Self> {
        let address = server_address(server);
        debug!("Connecting to {}", address);
        let mut stream = FtpStream::connect(address.as_str())
            .map_err(|err| format_err!("failed to connect to {}: {}", address, err))?;
        stream
            .login(username, password)
            .map_err(|err| format_err!("failed to log in to {} as {}: {}", address, username, err))?;
        stream
            .transfer_type(FileType::Binary)
            .map_err(|err| format_err!("failed to set binary mode: {}", err))?;
        info!("Connected to {}", address);
        Ok(FtpHost { stream })
    }
}

impl RemoteHost for FtpHost {
    fn dir_exists(&mut self, path: &str) -> Result<bool> {
        let current = self.stream.pwd().map_err(ftp_error("PWD", "."))?;
        match self.stream.cwd(path) {
            Ok(()) => {
                self.stream.cwd(&current).map_err(ftp_error("CWD", &current))?;
                Ok(true)
            }
            Err(FtpError::UnexpectedResponse(_)) => Ok(false),
            Err(err) => Err(ftp_error("CWD", path)(err)),
        }
    }

    fn remove_dir_all(&mut self, path: &str) -> Result<()> {
        let listing = self.stream.nlst(Some(path));
        for child in listed_children(path, listing)? {
            if self.dir_exists(&child)? {
                self.remove_dir_all(&child)?;
            } else {
                self.stream.rm(&child).map_err(ftp_error("DELE", &child))?;
            }
        }
        self.stream.rmdir(path).map_err(ftp_error("RMD", path))?;
        debug!("Removed remote dir: {}", path);
        Ok(())
    }

    fn create_dir(&mut self, path: &str) -> Result<()> {
        self.stream.mkdir(path).map_err(ftp_error("MKD", path))
    }

    fn change_dir(&mut self, path: &str) -> Result<()> {
        self.stream.cwd(path).map_err(ftp_error("CWD", path))
    }

    fn change_to_parent_dir(&mut self) -> Result<()> {
        self.stream.cdup().map_err(ftp_error("CDUP", ".."))
    }

    fn upload_file(&mut self, local: &Path, remote: &str) -> Result<()> {
        let mut reader = open_file(local)?;
        let size = self
            .stream
            .put_file(remote, &mut reader)
            .map_err(ftp_error("STOR", remote))?;
        debug!("Sent {} bytes to {}", size, remote);
        Ok(())
    }
}

impl Drop for FtpHost {
    fn drop(&mut self) {
        if let Err(err) = self.stream.quit() {
            debug!("FTP QUIT failed: {}", err);
        }
    }
}

/// Outcome of an upload. Paths are relative to the uploaded directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub uploaded: Vec<String>,
    pub failed: Vec<String>,
}

impl UploadReport {
    fn record<H: RemoteHost + ?Sized>(
        &mut self,
        host: &mut H,
        local: &Path,
        remote: &str,
        display_name: String,
    ) {
        match host.upload_file(local, remote) {
            Ok(()) => {
                info!("Uploaded file: {}", display_name);
                self.uploaded.push(display_name);
            }
            Err(err) => {
                warn!("Failed to upload: {}: {}", display_name, err);
                self.failed.push(display_name);
            }
        }
    }
}

fn mirror_dir<H: RemoteHost + ?Sized>(
    host: &mut H,
    local: &Path,
    prefix: &str,
    report: &mut UploadReport,
) -> Result<()> {
    for name in entry_list(local)? {
        let path = local.join(&name);
        let display_name = format!("{}{}", prefix, name);
        if path.is_file() {
            report.record(host, &path, &name, display_name);
        } else if path.is_dir() {
            host.create_dir(&name)?;
            host.change_dir(&name)?;
            mirror_dir(host, &path, &format!("{}/", display_name), report)?;
            host.change_to_parent_dir()?;
        }
    }
    Ok(())
}

/// Replaces remote directory `remote_dir` with a copy of local
/// directory `local`. Failed file uploads are logged and reported,
/// directory errors abort the upload.
pub fn upload_dir<H: RemoteHost + ?Sized>(
    host: &mut H,
    local: &Path,
    remote_dir: &str,
) -> Result<UploadReport> {
    if host.dir_exists(remote_dir)? {
        host.remove_dir_all(remote_dir)?;
    } else {
        info!("Failed to find: {}", remote_dir);
    }
    host.create_dir(remote_dir)?;
    host.change_dir(remote_dir)?;

    let mut report = UploadReport::default();
    mirror_dir(host, local, "", &mut report)?;
    Ok(report)
}

/// Uploads local file `local` into remote directory `remote_dir`,
/// creating the directory if needed. A failed upload is logged and
/// reported.
pub fn upload_file<H: RemoteHost + ?Sized>(
    host: &mut H,
    local: &Path,
    remote_dir: &str,
) -> Result<UploadReport> {
    let name = file_name_str(local)?.to_string();
    if !host.dir_exists(remote_dir)? {
        if let Err(err) = host.create_dir(remote_dir) {
            warn!("Failed to create: {}: {}", remote_dir, err);
        }
    }
    let mut report = UploadReport::default();
    let remote = format!("{}/{}", remote_dir.trim_end_matches('/'), name);
    report.record(host, local, &remote, name);
    Ok(report)
}

/// Uploads `local_path` (a file or a directory) to `remote_dir`
/// on FTP server `server`.
pub fn upload(
    server: &str,
    username: &str,
    password: &str,
    local_path: &Path,
    remote_dir: &str,
) -> Result<UploadReport> {
    let is_file = local_path.is_file();
    if !is_file && !local_path.is_dir() {
        bail!("nothing to upload: {} is not a file or directory", local_path.display());
    }
    let mut host = FtpHost::connect(server, username, password)?;
    let report = if is_file {
        upload_file(&mut host, local_path, remote_dir)?
    } else {
        upload_dir(&mut host, local_path, remote_dir)?
    };
    info!(
        "Uploaded {} file(s), {} failed",
        report.uploaded.len(),
        report.failed.len()
    );
    Ok(report)
}
