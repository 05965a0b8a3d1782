//! Administrative (907) field extraction and 949 overlay construction.
//!
//! The 907 field of a Sierra export embeds the internal record number
//! (after a `.b` marker) and the catalog date (in the `$c` subfield). Both
//! are pulled out once per record and reused for the 856 link lookup and
//! for the synthesized 949 overlay field that replaces the 907 at the
//! record boundary. The marker substrings here are the only place the
//! field's positional format lives.

use crate::error::{MrkError, Result};

/// Record number and catalog date extracted from one administrative field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministrativeData {
    /// Internal record number, including the leading `b` (e.g. `b1480649`).
    pub record_number: String,
    /// Catalog date exactly as exported; no date-format validation.
    pub catalog_date: String,
}

/// Extract the record number and catalog date from an administrative line.
///
/// The record number is the substring after the first `.b` up to the next
/// subfield delimiter `$`, with the `b` prepended back; the catalog date is
/// the substring after `$c` up to the next `$`.
///
/// # Examples
///
/// ```
/// use mrklink::administrative::extract_administrative;
///
/// let data = extract_administrative("=907  $a.b1480649$b07-06-17$c2016-12-06", 1)?;
/// assert_eq!(data.record_number, "b1480649");
/// assert_eq!(data.catalog_date, "2016-12-06");
/// # Ok::<(), mrklink::MrkError>(())
/// ```
///
/// # Errors
///
/// Returns [`MrkError::MissingAdministrativeMarkers`] when the `.b` or `$c`
/// marker is absent.
pub fn extract_administrative(line: &str, line_no: usize) -> Result<AdministrativeData> {
    let missing = |marker: &'static str| MrkError::MissingAdministrativeMarkers {
        line_no,
        marker,
        line: line.to_string(),
    };

    let after_marker = line.split_once(".b").ok_or_else(|| missing(".b"))?.1;
    let number = after_marker.split('$').next().unwrap_or(after_marker);
    let after_date = line.split_once("$c").ok_or_else(|| missing("$c"))?.1;
    let date = after_date.split('$').next().unwrap_or(after_date);

    Ok(AdministrativeData {
        record_number: format!("b{number}"),
        catalog_date: date.to_string(),
    })
}

/// Build the 949 overlay field that replaces the removed administrative field.
///
/// Pure formatting; the same inputs always yield the same line.
///
/// # Examples
///
/// ```
/// use mrklink::administrative::build_overlay_field;
///
/// assert_eq!(
///     build_overlay_field("b1480649", "2016-12-06"),
///     r"=949  \\$a*recs=b;ov=.b1480649;ct=2016-12-06;"
/// );
/// ```
#[must_use]
pub fn build_overlay_field(record_number: &str, catalog_date: &str) -> String {
    format!(r"=949  \\$a*recs=b;ov=.{record_number};ct={catalog_date};")
}
