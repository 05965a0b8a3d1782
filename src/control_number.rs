//! OCLC control-number (001) normalization.
//!
//! Catalog exports carry the bare OCLC number in the 001 field, but records
//! loaded back for overlay need the OCLC prefix that matches the number's
//! digit count (see the OCLC batchload control-number rules). This module
//! rebuilds the 001 line with the correct prefix.

use crate::error::{MrkError, Result};

/// Byte offset where the numeric payload of an 001 line begins (`=001  `).
const PAYLOAD_OFFSET: usize = 6;

/// Normalize a control-number (001) line by prefixing its numeric payload.
///
/// The payload starts 6 characters in and runs to the end of the line.
/// Prefix rules, first match wins:
///
/// - fewer than 9 digits: `ocm`, payload zero-padded to 8 digits
/// - exactly 9 digits: `ocn`, unpadded
/// - more than 9 digits: `on`, unpadded
///
/// # Examples
///
/// ```
/// use mrklink::control_number::normalize_control_number;
///
/// assert_eq!(normalize_control_number("=001  1234567", 1)?, "=001  ocm01234567");
/// assert_eq!(normalize_control_number("=001  123456789", 1)?, "=001  ocn123456789");
/// assert_eq!(normalize_control_number("=001  1234567890", 1)?, "=001  on1234567890");
/// # Ok::<(), mrklink::MrkError>(())
/// ```
///
/// # Errors
///
/// Returns [`MrkError::MalformedControlNumber`] when the line is too short
/// to carry a payload.
pub fn normalize_control_number(line: &str, line_no: usize) -> Result<String> {
    let payload = line
        .get(PAYLOAD_OFFSET..)
        .ok_or_else(|| MrkError::MalformedControlNumber {
            line_no,
            line: line.to_string(),
        })?;

    let number = if payload.len() < 9 {
        format!("ocm{payload:0>8}")
    } else if payload.len() == 9 {
        format!("ocn{payload}")
    } else {
        format!("on{payload}")
    };
    Ok(format!("=001  {number}"))
}
