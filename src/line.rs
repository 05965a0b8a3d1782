//! Field-tag classification for mnemonic MARC lines.
//!
//! Every line of an mrk export carries a 3-character field tag at byte
//! positions 1..4 (the leading byte is the `=` marker); an empty line
//! separates records. [`classify`] maps each line to the single
//! [`LineClass`] the transducer dispatches on, keeping the cascade of tag
//! comparisons in one exhaustive place.

/// Field tags that are dropped from the rewritten stream and logged.
///
/// These are Sierra-local 9xx fields that do not load back into the catalog.
/// The administrative 907 tag is listed here as well: its line is always
/// removed, but it is classified as [`LineClass::Administrative`] first so
/// its record number and catalog date are extracted before deletion.
pub const DELETABLE_TAGS: [&str; 5] = ["999", "907", "949", "998", "971"];

/// Classification of a single mrk line, consumed by the transducer dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Control-number (001) field requiring OCLC prefix normalization.
    ControlNumber,
    /// Pre-existing link (856) field, replaced by freshly built links.
    ExistingLink,
    /// Administrative (907) field carrying record number and catalog date.
    Administrative,
    /// Obsolete field in [`DELETABLE_TAGS`], removed from the output.
    Deletable,
    /// Empty line marking a record boundary.
    Boundary,
    /// Any other field, emitted unchanged.
    PassThrough,
}

/// Extract the 3-character field tag from an mrk line, if present.
///
/// # Examples
///
/// ```
/// use mrklink::line::tag_of;
///
/// assert_eq!(tag_of("=245  10$aTitle"), Some("245"));
/// assert_eq!(tag_of(""), None);
/// ```
#[must_use]
pub fn tag_of(line: &str) -> Option<&str> {
    line.get(1..4)
}

/// Classify a single mrk line.
///
/// Checks the control-number, link, and administrative tags as distinct
/// cases, then the deletion blocklist, then falls through to pass-through.
///
/// # Examples
///
/// ```
/// use mrklink::line::{classify, LineClass};
///
/// assert_eq!(classify("=001  12345678"), LineClass::ControlNumber);
/// assert_eq!(classify("=907  .b1480649$c2016-12-06$..."), LineClass::Administrative);
/// assert_eq!(classify("=998  local data"), LineClass::Deletable);
/// assert_eq!(classify(""), LineClass::Boundary);
/// assert_eq!(classify("=245  10$aTitle"), LineClass::PassThrough);
/// ```
#[must_use]
pub fn classify(line: &str) -> LineClass {
    if line.is_empty() {
        return LineClass::Boundary;
    }
    match tag_of(line) {
        Some("001") => LineClass::ControlNumber,
        Some("856") => LineClass::ExistingLink,
        Some("907") => LineClass::Administrative,
        Some(tag) if DELETABLE_TAGS.contains(&tag) => LineClass::Deletable,
        _ => LineClass::PassThrough,
    }
}
