//! File-level orchestration of a full rewriting pass.
//!
//! Loads the cross-reference table, reads the mnemonic input, runs the
//! transducer, and persists the outputs. The rewritten stream is written to
//! a scratch file in the destination directory and renamed into place only
//! after the whole pass succeeds, so a failed pass never leaves partial
//! output at the final path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::audit::write_audit_logs;
use crate::crossref::CrossRefTable;
use crate::error::Result;
use crate::transducer::transduce;

/// Paths for one rewriting pass.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Mnemonic (mrk) input produced by the external break step.
    pub input: PathBuf,
    /// Final path for the rewritten mnemonic stream.
    pub output: PathBuf,
    /// Cross-reference CSV table (`BibID,identifier,volume`).
    pub crossref: PathBuf,
    /// Directory for the two audit logs.
    pub audit_dir: PathBuf,
}

/// Counters reported after a successful pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Records that received at least one new link.
    pub records_modified: usize,
    /// Link lines added across all records.
    pub links_added: usize,
    /// Field lines removed from the stream.
    pub fields_deleted: usize,
}

/// Run a full pass: load table, transduce, finalize output, write audit logs.
///
/// # Errors
///
/// Propagates table-loading, IO, and transducer errors. On error the final
/// output path is never created or overwritten.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let table = CrossRefTable::from_path(&config.crossref)?;
    let content = fs::read_to_string(&config.input)?;

    let result = transduce(content.lines(), &table)?;

    let out_dir = config.output.parent().unwrap_or_else(|| Path::new("."));
    let mut scratch = NamedTempFile::new_in(out_dir)?;
    scratch.write_all(result.lines.join("\n").as_bytes())?;
    scratch
        .persist(&config.output)
        .map_err(|e| crate::MrkError::Io(e.error))?;

    write_audit_logs(&config.audit_dir, &result)?;

    tracing::info!(
        records_modified = result.records_modified,
        links_added = result.links_added,
        fields_deleted = result.deleted_fields.len(),
        output = %config.output.display(),
        "rewriting pass complete"
    );
    Ok(PipelineSummary {
        records_modified: result.records_modified,
        links_added: result.links_added,
        fields_deleted: result.deleted_fields.len(),
    })
}
