//! Line-oriented text buffer shared by the qmake project file and
//! QDoc configuration generators.

use crate::errors::Result;
use crate::file_utils::save_string;
use std::fmt;
use std::path::{Path, PathBuf};

/// Assignment operator of a `field operator values` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=`
    Set,
    /// `+=`
    Append,
    /// `-=`
    Remove,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Set => "=",
            Operator::Append => "+=",
            Operator::Remove => "-=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of an emitted line: one value or an ordered
/// sequence of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Values {
    Single(String),
    Many(Vec<String>),
}

impl Values {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Values::Single(value) => vec![value],
            Values::Many(values) => values,
        }
    }

    /// True for an empty sequence. A single value is never empty,
    /// even if it's an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Values::Single(_) => false,
            Values::Many(values) => values.is_empty(),
        }
    }
}

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Values::Single(value.to_string())
    }
}

impl From<String> for Values {
    fn from(value: String) -> Self {
        Values::Single(value)
    }
}

impl From<&String> for Values {
    fn from(value: &String) -> Self {
        Values::Single(value.clone())
    }
}

impl From<Vec<String>> for Values {
    fn from(values: Vec<String>) -> Self {
        Values::Many(values)
    }
}

impl From<&[String]> for Values {
    fn from(values: &[String]) -> Self {
        Values::Many(values.to_vec())
    }
}

impl From<&Vec<String>> for Values {
    fn from(values: &Vec<String>) -> Self {
        Values::Many(values.clone())
    }
}

impl From<Vec<&str>> for Values {
    fn from(values: Vec<&str>) -> Self {
        Values::Many(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Values {
    fn from(values: &[&str]) -> Self {
        Values::Many(values.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Values {
    fn from(values: [&str; N]) -> Self {
        Values::Many(values.iter().map(|s| s.to_string()).collect())
    }
}

/// Append-only text buffer. The output is exactly the emitted
/// lines in call order. Nothing is validated or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    buffer: String,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, field: &str, operator: Operator, values: Values) {
        self.buffer.push_str(field);
        self.buffer.push(' ');
        self.buffer.push_str(operator.as_str());
        for value in values.into_vec() {
            self.buffer.push(' ');
            self.buffer.push_str(&value);
        }
    }

    /// Appends `"<field> <operator> <value1> <value2> ...\n"`.
    pub fn emit(&mut self, field: &str, operator: Operator, values: impl Into<Values>) {
        self.push_line(field, operator, values.into());
        self.buffer.push('\n');
    }

    /// Same as `emit`, without the line break, so that the line
    /// can be continued with `append_raw`.
    pub fn emit_inline(&mut self, field: &str, operator: Operator, values: impl Into<Values>) {
        self.push_line(field, operator, values.into());
    }

    /// Appends `line` followed by a line break.
    pub fn text(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Appends `text` as is.
    pub fn append_raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn render(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Writes the buffer to `path` with `extension` appended to the
    /// file name and returns the written path.
    pub fn save(&self, path: impl AsRef<Path>, extension: &str) -> Result<PathBuf> {
        save_string(path, &self.buffer, extension)
    }
}
