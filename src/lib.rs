#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # mrklink: mnemonic MARC link rewriting
//!
//! A single-pass rewriting engine for mnemonic MARC (`.mrk`) catalog
//! exports. Each record is rewritten in place in the line stream: the OCLC
//! control number gets its batchload prefix, deep-link 856 fields are built
//! from a cross-reference CSV table, obsolete local 9xx fields are removed,
//! and a 949 overlay field is synthesized at the record boundary.
//!
//! ## Quick Start
//!
//! ```
//! use mrklink::{transduce, CrossRefTable};
//!
//! let table = CrossRefTable::from_reader(
//!     "BibID,identifier,volume\nb1480649,aaasprofessi_chal_1980_000_6647977,\n".as_bytes(),
//! )?;
//! let input = [
//!     "=001  1234567",
//!     "=245  10$aA title",
//!     "=907  $a.b1480649$c2016-12-06",
//!     "",
//! ];
//!
//! let result = transduce(input, &table)?;
//! assert_eq!(result.lines[0], "=001  ocm01234567");
//! assert_eq!(result.links_added, 1);
//! # Ok::<(), mrklink::MrkError>(())
//! ```
//!
//! ## Modules
//!
//! - [`transducer`] — the single-pass record rewriting state machine
//! - [`line`] — field-tag classification of mrk lines
//! - [`control_number`] — OCLC 001 prefix normalization
//! - [`administrative`] — 907 extraction and 949 overlay construction
//! - [`crossref`] — cross-reference table model and CSV loading
//! - [`links`] — 856 deep-link field construction
//! - [`audit`] — audit log rendering and persistence
//! - [`pipeline`] — file-level pass with atomic output finalization
//! - [`converter`] — external break/make utility invocation
//! - [`error`] — error types and result type

pub mod administrative;
pub mod audit;
pub mod control_number;
pub mod converter;
pub mod crossref;
pub mod error;
pub mod line;
pub mod links;
pub mod pipeline;
pub mod transducer;

pub use administrative::{build_overlay_field, extract_administrative, AdministrativeData};
pub use control_number::normalize_control_number;
pub use converter::MarcConverter;
pub use crossref::{CrossRefEntry, CrossRefTable};
pub use error::{MrkError, Result};
pub use line::{classify, LineClass};
pub use links::build_link_fields;
pub use pipeline::{run, PipelineConfig, PipelineSummary};
pub use transducer::{transduce, PreExistingLink, Transduction};
