//! Rendering and persistence of the transduction audit collections.
//!
//! Two text artifacts are written after a successful pass: the deleted-field
//! lines and the pre-existing 856 lines with their owning record numbers.
//! Both are newline-joined, in input order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::transducer::{PreExistingLink, Transduction};

/// File name of the deleted-fields log.
pub const DELETED_FIELDS_LOG: &str = "deleted_fields.log";

/// File name of the pre-existing-links log.
pub const EXISTING_LINKS_LOG: &str = "existing_links.log";

/// Render the deleted-field lines, newline-joined, input order.
#[must_use]
pub fn render_deleted_fields(deleted_fields: &[String]) -> String {
    deleted_fields.join("\n")
}

/// Render the pre-existing-link pairs as `record_number<TAB>line`, one per line.
#[must_use]
pub fn render_pre_existing_links(links: &[PreExistingLink]) -> String {
    links
        .iter()
        .map(|l| format!("{}\t{}", l.record_number, l.line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write both audit logs into `dir`, returning their paths.
///
/// # Errors
///
/// Returns [`MrkError::Io`](crate::MrkError::Io) when either file cannot be
/// written.
pub fn write_audit_logs(dir: &Path, result: &Transduction) -> Result<(PathBuf, PathBuf)> {
    let deleted_path = dir.join(DELETED_FIELDS_LOG);
    let links_path = dir.join(EXISTING_LINKS_LOG);
    fs::write(&deleted_path, render_deleted_fields(&result.deleted_fields))?;
    fs::write(
        &links_path,
        render_pre_existing_links(&result.pre_existing_links),
    )?;
    Ok((deleted_path, links_path))
}
