//! Release history of the application.

use davinci_scripts_common::errors::Result;
use davinci_scripts_common::utils::convert_date;
use std::ops::Index;
use std::slice;

/// Format of release dates passed to `Changelog::add`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of release dates stored in `ChangelogEntry`.
pub const DATE_FORMAT: &str = "%d %b %Y";

/// One release: version, date (in `DATE_FORMAT`) and release notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    version: String,
    date: String,
    notes: Vec<String>,
}

impl ChangelogEntry {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

/// Releases ordered by insertion, most recently added first.
///
/// Entry 0 is always the last added one, regardless of the release
/// dates; entries are never sorted.
#[derive(Debug, Clone, Default)]
pub struct Changelog {
    entries: Vec<ChangelogEntry>,
}

impl Changelog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a release. `date` must be in `INPUT_DATE_FORMAT`.
    /// The new entry becomes the latest one.
    pub fn add<I, S>(&mut self, version: &str, date: &str, notes: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let date = convert_date(date, INPUT_DATE_FORMAT, DATE_FORMAT)?;
        self.entries.insert(
            0,
            ChangelogEntry {
                version: version.to_string(),
                date,
                notes: notes.into_iter().map(Into::into).collect(),
            },
        );
        Ok(())
    }

    pub fn latest(&self) -> Option<&ChangelogEntry> {
        self.entries.first()
    }

    /// Version of the latest entry, or an empty string if there are none.
    pub fn version(&self) -> &str {
        self.latest().map(|entry| entry.version()).unwrap_or("")
    }

    /// Date of the latest entry in `DATE_FORMAT`, or an empty string
    /// if there are none.
    pub fn date(&self) -> &str {
        self.latest().map(|entry| entry.date()).unwrap_or("")
    }

    /// Year of the latest release.
    pub fn release_year(&self) -> Result<String> {
        convert_date(self.date(), DATE_FORMAT, "%Y")
    }

    /// Date of the latest release as `YYYY-MM-DD`.
    pub fn release_date_iso(&self) -> Result<String> {
        convert_date(self.date(), DATE_FORMAT, "%Y-%m-%d")
    }

    pub fn get(&self, index: usize) -> Option<&ChangelogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries, latest first. Every call starts over.
    pub fn iter(&self) -> slice::Iter<'_, ChangelogEntry> {
        self.entries.iter()
    }

    /// Renders the history as `CHANGELOG.md` content.
    pub fn to_markdown(&self, title: &str) -> String {
        let mut text = format!("# {}\n", title);
        for entry in self {
            text.push_str(&format!("\n## Version {} ({})\n\n", entry.version, entry.date));
            for note in &entry.notes {
                text.push_str(&format!("* {}\n", note));
            }
        }
        text
    }

    /// Release history of Davinci.
    pub fn davinci() -> Result<Self> {
        let mut changelog = Changelog::new();
        changelog.add("1.0.0", "2017-12-09", ["First release"])?;
        changelog.add(
            "1.0.1",
            "2018-01-11",
            [
                "Adds support of the new input format: HEiDi at MLZ instrument log data",
                "Fixes an issue with automatic determination of the peak and background parameters",
                "Fixes a bug with cursor position change in the input data viewer when go through the scans",
                "Fixes a crash when open a new file",
                "Fixes a sidebar issue with the tabs width",
            ],
        )?;
        changelog.add(
            "1.0.2",
            "2018-01-27",
            ["Fixes a bug with the update function of the installer parogram"],
        )?;
        changelog.add(
            "1.0.3",
            "2018-03-13",
            ["Fixes issue #2, Not reading new files with Oxford magnet on POLI"],
        )?;
        changelog.add(
            "1.0.4",
            "2018-03-28",
            [
                "Adds support of the new input format for POLI: polarized NICOS data with adet",
                "Adds user manual and report issue links to the Help menu",
                "Adds a program icon and desktop file for the Linux version",
            ],
        )?;
        changelog.add(
            "1.0.5",
            "2018-05-30",
            [
                "Adds calculation of the direction cosines (Issue #3)",
                "Adds reading of Psi angle from the HEiDi instrument data collection files",
                "Adds natural sort order and sort by date and time to the table widgets",
                "Adds ShelX output with real (non-integer) Miller indices hkl",
                "Fixes calculation of the Phi angle in the 4-circle geometry",
                "Fixes an issue with Tbar/D9 output (theta + temperature, psi, fwhm)",
                "Fixes some minor issues",
            ],
        )?;
        changelog.add(
            "1.0.6",
            "2018-07-07",
            [
                "Adds reading of Psi angle from the NICOS instrument data collection files (Issue #5)",
                "Adds UMWEG output for the calculation of multiple-diffraction patterns",
            ],
        )?;
        Ok(changelog)
    }
}

impl Index<usize> for Changelog {
    type Output = ChangelogEntry;

    fn index(&self, index: usize) -> &ChangelogEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Changelog {
    type Item = &'a ChangelogEntry;
    type IntoIter = slice::Iter<'a, ChangelogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
