//! Utility types and functions used by the Davinci build scripts:
//! file and path helpers, platform conventions, running external
//! tools and the text buffer behind the generated configuration files.

#![forbid(unsafe_code)]

pub mod env_var_names;
pub mod errors;
pub mod file_utils;
pub mod target;
pub mod text_document;
pub mod utils;

#[cfg(test)]
mod tests;
