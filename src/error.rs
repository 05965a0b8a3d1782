//! Error types for mnemonic MARC rewriting operations.
//!
//! This module provides the [`MrkError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all mnemonic MARC rewriting operations.
///
/// The transducer errors ([`MalformedControlNumber`], [`MissingAdministrativeMarkers`],
/// [`OrphanRecordBoundary`], [`DuplicateAdministrativeField`]) are unrecoverable for
/// the affected record and abort the whole pass: a corrupted overlay field or a
/// mismatched record number would corrupt the downstream catalog load.
///
/// [`MalformedControlNumber`]: MrkError::MalformedControlNumber
/// [`MissingAdministrativeMarkers`]: MrkError::MissingAdministrativeMarkers
/// [`OrphanRecordBoundary`]: MrkError::OrphanRecordBoundary
/// [`DuplicateAdministrativeField`]: MrkError::DuplicateAdministrativeField
#[derive(Error, Debug)]
pub enum MrkError {
    /// A control-number (001) field line is too short to carry a numeric payload.
    #[error("malformed control number field at line {line_no}: {line:?}")]
    MalformedControlNumber {
        /// 1-based line number in the input stream.
        line_no: usize,
        /// The offending line.
        line: String,
    },

    /// An administrative (907) field lacks the record-number or date marker.
    #[error("administrative field at line {line_no} is missing the {marker:?} marker: {line:?}")]
    MissingAdministrativeMarkers {
        /// 1-based line number in the input stream.
        line_no: usize,
        /// The marker that could not be located (`.b` or `$c`).
        marker: &'static str,
        /// The offending line.
        line: String,
    },

    /// A record boundary was reached with no administrative field seen in the
    /// current record, so there is no record number or catalog date to build
    /// the overlay field from.
    #[error("record boundary at line {line_no} with no administrative field in the current record")]
    OrphanRecordBoundary {
        /// 1-based line number of the boundary (one past the end for EOF).
        line_no: usize,
    },

    /// A second administrative field appeared within a single record.
    #[error("duplicate administrative field at line {line_no}: {line:?}")]
    DuplicateAdministrativeField {
        /// 1-based line number in the input stream.
        line_no: usize,
        /// The offending line.
        line: String,
    },

    /// Error while reading the cross-reference table.
    #[error("cross-reference table error: {0}")]
    Csv(#[from] csv::Error),

    /// The external format-conversion utility exited with a failure status.
    #[error("converter {program} exited with {status}")]
    ConverterFailed {
        /// The converter program that was invoked.
        program: String,
        /// The process exit status.
        status: std::process::ExitStatus,
    },

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`MrkError`].
pub type Result<T> = std::result::Result<T, MrkError>;
