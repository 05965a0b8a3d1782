//! Cross-reference table mapping record numbers to hosted identifiers.
//!
//! The table is a CSV file with header `BibID,identifier,volume` (volume may
//! be empty). One record number can repeat across rows when a multivolume
//! set maps to several hosted identifiers, so the table is kept as an
//! ordered sequence of entries, never deduplicated. It is loaded fully
//! before the transduction pass and read-only thereafter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One row of the cross-reference table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrossRefEntry {
    /// Internal record number the row applies to (e.g. `b1480649`).
    #[serde(rename = "BibID")]
    pub bib_id: String,
    /// Identifier of the externally hosted digitized copy.
    pub identifier: String,
    /// Volume label for multivolume sets; `None` when the column is empty.
    #[serde(deserialize_with = "empty_as_none")]
    pub volume: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Ordered, read-only cross-reference table.
///
/// # Examples
///
/// ```
/// use mrklink::crossref::CrossRefTable;
///
/// let csv = "\
/// BibID,identifier,volume
/// b1480649,aaasprofessi_chal_1980_000_6647977,
/// b4088633,collectedess_fox_2003_001_7609521,1
/// b4088633,collectedess_fox_2003_002_7526030,2
/// ";
/// let table = CrossRefTable::from_reader(csv.as_bytes())?;
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.matches("b4088633").count(), 2);
/// assert_eq!(table.entries()[0].bib_id, "b1480649");
/// # Ok::<(), mrklink::MrkError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrossRefTable {
    entries: Vec<CrossRefEntry>,
}

impl CrossRefTable {
    /// Load the table from any CSV source with a `BibID,identifier,volume` header.
    ///
    /// Row order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`MrkError::Csv`](crate::MrkError::Csv) on malformed CSV or
    /// missing columns.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut entries = Vec::new();
        for row in csv_reader.deserialize() {
            entries.push(row?);
        }
        tracing::debug!(rows = entries.len(), "loaded cross-reference table");
        Ok(CrossRefTable { entries })
    }

    /// Load the table from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`MrkError::Io`](crate::MrkError::Io) if the file cannot be
    /// opened, or [`MrkError::Csv`](crate::MrkError::Csv) on malformed rows.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Build a table directly from entries, preserving their order.
    #[must_use]
    pub fn from_entries(entries: Vec<CrossRefEntry>) -> Self {
        CrossRefTable { entries }
    }

    /// Entries whose record number matches `bib_id` exactly, in table order.
    ///
    /// Matching is case-sensitive string equality; a record number with no
    /// matches yields an empty iterator.
    pub fn matches<'a>(&'a self, bib_id: &'a str) -> impl Iterator<Item = &'a CrossRefEntry> {
        self.entries.iter().filter(move |e| e.bib_id == bib_id)
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[CrossRefEntry] {
        &self.entries
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
