//! Single-pass record transducer over a mnemonic MARC line stream.
//!
//! Consumes the full line stream of an mrk export in input order, dispatches
//! each line on its [`LineClass`](crate::line::LineClass), and produces the
//! rewritten stream plus the audit collections the surrounding system
//! persists. The pass is strictly sequential: the record number and catalog
//! date extracted from an administrative field are needed again when the
//! record's boundary is reached, so lines cannot be processed out of order.
//!
//! Per-record state is invalidated at every boundary. A boundary reached
//! with fields but no administrative field in the current record is a fatal
//! [`OrphanRecordBoundary`](crate::MrkError::OrphanRecordBoundary) rather
//! than a silent reuse of the previous record's values.

use crate::administrative::{build_overlay_field, extract_administrative, AdministrativeData};
use crate::control_number::normalize_control_number;
use crate::crossref::CrossRefTable;
use crate::error::{MrkError, Result};
use crate::line::{classify, LineClass};
use crate::links::build_link_fields;

/// A pre-existing 856 line removed from the stream, tied to its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreExistingLink {
    /// The 856 line exactly as it appeared in the input.
    pub line: String,
    /// Record number of the record that carried it.
    pub record_number: String,
}

/// Result of one full transduction pass.
#[derive(Debug, Default)]
pub struct Transduction {
    /// The rewritten line stream.
    pub lines: Vec<String>,
    /// Removed field lines (administrative and blocklisted 9xx), input order.
    pub deleted_fields: Vec<String>,
    /// Pre-existing 856 lines that were replaced, input order.
    pub pre_existing_links: Vec<PreExistingLink>,
    /// Number of records that received at least one new link.
    pub records_modified: usize,
    /// Total number of link lines added across all records.
    pub links_added: usize,
}

/// Transient state for the record currently being scanned.
#[derive(Debug, Default)]
struct RecordState {
    /// Extracted once per record; `Some` after the administrative field.
    admin: Option<AdministrativeData>,
    /// Links built for this record, counted at the boundary.
    link_count: usize,
    /// Pre-existing 856 lines awaiting their record number.
    pending_links: Vec<String>,
    /// Whether any field line has been seen since the last boundary.
    saw_field: bool,
}

/// Run the transduction pass over `lines` against a loaded table.
///
/// Returns the rewritten stream and the audit collections; the caller owns
/// persistence. End of input with a record still in progress finalizes that
/// record exactly like a blank-line boundary (without appending a trailing
/// blank line); redundant blank separators are dropped.
///
/// # Examples
///
/// ```
/// use mrklink::crossref::{CrossRefEntry, CrossRefTable};
/// use mrklink::transducer::transduce;
///
/// let table = CrossRefTable::from_entries(vec![CrossRefEntry {
///     bib_id: "b1480649".to_string(),
///     identifier: "aaasprofessi_chal_1980_000_6647977".to_string(),
///     volume: None,
/// }]);
/// let input = [
///     "=001  1234567",
///     "=245  10$aA title",
///     "=907  $a.b1480649$c2016-12-06",
///     "",
/// ];
/// let result = transduce(input, &table)?;
/// assert_eq!(result.links_added, 1);
/// assert_eq!(result.lines[0], "=001  ocm01234567");
/// # Ok::<(), mrklink::MrkError>(())
/// ```
///
/// # Errors
///
/// Any of the transducer errors aborts the whole pass:
/// [`MalformedControlNumber`](MrkError::MalformedControlNumber),
/// [`MissingAdministrativeMarkers`](MrkError::MissingAdministrativeMarkers),
/// [`OrphanRecordBoundary`](MrkError::OrphanRecordBoundary), and
/// [`DuplicateAdministrativeField`](MrkError::DuplicateAdministrativeField).
pub fn transduce<I, S>(lines: I, table: &CrossRefTable) -> Result<Transduction>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Transduction::default();
    let mut state = RecordState::default();
    let mut line_no = 0;

    for line in lines {
        let line = line.as_ref();
        line_no += 1;

        match classify(line) {
            LineClass::ControlNumber => {
                state.saw_field = true;
                out.lines.push(normalize_control_number(line, line_no)?);
            },
            LineClass::ExistingLink => {
                state.saw_field = true;
                state.pending_links.push(line.to_string());
            },
            LineClass::Administrative => {
                state.saw_field = true;
                if state.admin.is_some() {
                    return Err(MrkError::DuplicateAdministrativeField {
                        line_no,
                        line: line.to_string(),
                    });
                }
                let admin = extract_administrative(line, line_no)?;

                let links = build_link_fields(&admin.record_number, table);
                state.link_count = links.len();
                out.lines.extend(links);

                out.deleted_fields.push(line.to_string());
                for pending in state.pending_links.drain(..) {
                    out.pre_existing_links.push(PreExistingLink {
                        line: pending,
                        record_number: admin.record_number.clone(),
                    });
                }
                state.admin = Some(admin);
            },
            LineClass::Deletable => {
                state.saw_field = true;
                out.deleted_fields.push(line.to_string());
            },
            LineClass::Boundary => {
                if state.saw_field {
                    finish_record(&mut out, &mut state, line_no, true)?;
                }
                // Redundant separator between records: drop it.
            },
            LineClass::PassThrough => {
                state.saw_field = true;
                out.lines.push(line.to_string());
            },
        }
    }

    if state.saw_field {
        finish_record(&mut out, &mut state, line_no + 1, false)?;
    }

    tracing::info!(
        records_modified = out.records_modified,
        links_added = out.links_added,
        "transduction pass complete"
    );
    Ok(out)
}

/// Emit the overlay field and close out the current record at a boundary.
fn finish_record(
    out: &mut Transduction,
    state: &mut RecordState,
    line_no: usize,
    emit_separator: bool,
) -> Result<()> {
    let admin = state
        .admin
        .take()
        .ok_or(MrkError::OrphanRecordBoundary { line_no })?;

    // 856 lines seen after the administrative field still belong to this
    // record; bind them before the state is reset.
    for pending in state.pending_links.drain(..) {
        out.pre_existing_links.push(PreExistingLink {
            line: pending,
            record_number: admin.record_number.clone(),
        });
    }

    out.lines
        .push(build_overlay_field(&admin.record_number, &admin.catalog_date));
    if emit_separator {
        out.lines.push(String::new());
    }

    if state.link_count > 0 {
        tracing::info!(
            record = %admin.record_number,
            links = state.link_count,
            "processed record, links added"
        );
        out.records_modified += 1;
        out.links_added += state.link_count;
    }

    *state = RecordState::default();
    Ok(())
}
