//! Build automation of the Davinci application: qmake project files,
//! release builds, deployment, installer, documentation, changelog
//! and FTP upload.
//!
//! Each task has a binary in `src/bin` that detects the project
//! directory (`DAVINCI_PROJECT_DIR` or the current directory) and
//! runs the corresponding function of `cli`.

#![forbid(unsafe_code)]

pub mod changelog;
pub mod cli;
pub mod config;
pub mod deploy;
pub mod docs;
pub mod installer;
pub mod pro_file;
pub mod pro_files;
pub mod qmake_build;
pub mod qt_query;
pub mod tools;
pub mod upload;

#[cfg(test)]
mod tests;
