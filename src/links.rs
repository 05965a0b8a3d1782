//! Building 856 deep-link fields from cross-reference matches.

use crate::crossref::CrossRefTable;

/// Build one 856 link line per cross-reference entry matching `bib_id`.
///
/// Pure function of its inputs: lines come out in table order, repeated
/// matches are kept, and a record number with zero matches yields an empty
/// `Vec` rather than an error. The volume clause appears only when the
/// entry carries a volume label.
///
/// # Examples
///
/// ```
/// use mrklink::crossref::{CrossRefEntry, CrossRefTable};
/// use mrklink::links::build_link_fields;
///
/// let table = CrossRefTable::from_entries(vec![CrossRefEntry {
///     bib_id: "b1480649".to_string(),
///     identifier: "aaasprofessi_chal_1980_000_6647977".to_string(),
///     volume: None,
/// }]);
/// let links = build_link_fields("b1480649", &table);
/// assert_eq!(
///     links,
///     vec![
///         "=856  40$xInternet Archive$zDigitized copy available for \
///          e-checkout$uhttp://archive.org/details/aaasprofessi_chal_1980_000_6647977"
///             .to_string()
///     ]
/// );
/// ```
#[must_use]
pub fn build_link_fields(bib_id: &str, table: &CrossRefTable) -> Vec<String> {
    table
        .matches(bib_id)
        .map(|entry| {
            let mut field = String::from("=856  40$xInternet Archive$zDigitized copy");
            if let Some(volume) = entry.volume.as_deref() {
                field.push_str(" of v. ");
                field.push_str(volume);
            }
            field.push_str(" available for e-checkout$uhttp://archive.org/details/");
            field.push_str(&entry.identifier);
            field
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossref::CrossRefEntry;

    fn entry(bib_id: &str, identifier: &str, volume: Option<&str>) -> CrossRefEntry {
        CrossRefEntry {
            bib_id: bib_id.to_string(),
            identifier: identifier.to_string(),
            volume: volume.map(str::to_string),
        }
    }

    #[test]
    fn one_line_per_match_in_table_order() {
        let table = CrossRefTable::from_entries(vec![
            entry("b1", "x", None),
            entry("b2", "other", None),
            entry("b1", "y", Some("2")),
        ]);
        let links = build_link_fields("b1", &table);
        assert_eq!(links.len(), 2);
        assert!(links[0].ends_with("$uhttp://archive.org/details/x"));
        assert!(links[1].contains(" of v. 2 "));
        assert!(links[1].ends_with("$uhttp://archive.org/details/y"));
    }

    #[test]
    fn volume_clause_only_when_volume_present() {
        let table = CrossRefTable::from_entries(vec![entry("b1", "x", None)]);
        let links = build_link_fields("b1", &table);
        assert_eq!(
            links[0],
            "=856  40$xInternet Archive$zDigitized copy available for \
             e-checkout$uhttp://archive.org/details/x"
        );
    }

    #[test]
    fn zero_matches_is_an_empty_vec() {
        let table = CrossRefTable::from_entries(vec![entry("b1", "x", None)]);
        assert!(build_link_fields("b9", &table).is_empty());
    }

    #[test]
    fn reordering_the_table_reorders_but_never_changes_matches() {
        let forward = CrossRefTable::from_entries(vec![
            entry("b1", "x", None),
            entry("b1", "y", Some("2")),
        ]);
        let reversed = CrossRefTable::from_entries(vec![
            entry("b1", "y", Some("2")),
            entry("b1", "x", None),
        ]);

        let mut a = build_link_fields("b1", &forward);
        let mut b = build_link_fields("b1", &reversed);
        assert_eq!(b[0], a[1]);
        assert_eq!(b[1], a[0]);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
