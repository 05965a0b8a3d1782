//! Integration tests for the mrklink library

use std::fs;

use mrklink::{
    run, transduce, CrossRefEntry, CrossRefTable, MrkError, PipelineConfig,
};

fn entry(bib_id: &str, identifier: &str, volume: Option<&str>) -> CrossRefEntry {
    CrossRefEntry {
        bib_id: bib_id.to_string(),
        identifier: identifier.to_string(),
        volume: volume.map(str::to_string),
    }
}

#[test]
fn two_record_stream_end_to_end() {
    let table = CrossRefTable::from_entries(vec![
        entry("b1480649", "aaasprofessi_chal_1980_000_6647977", None),
        entry("b7777777", "unmatched_elsewhere", None),
    ]);
    let input = [
        "=001  1234567",
        "=245  10$aFirst record",
        "=856  40$uhttp://old.example.org/replaced",
        "=907  $a.b1480649$b07-06-17$c2016-12-06",
        "",
        "=001  123456789",
        "=245  10$aSecond record",
        "=907  $a.b2355103$b07-06-17$c1991-05-01",
        "",
    ];

    let result = transduce(input, &table).unwrap();

    // The first record's old link is gone from the output but audited with
    // its record number.
    assert!(!result.lines.iter().any(|l| l.contains("old.example.org")));
    assert_eq!(result.pre_existing_links.len(), 1);
    assert_eq!(result.pre_existing_links[0].record_number, "b1480649");
    assert_eq!(
        result.pre_existing_links[0].line,
        "=856  40$uhttp://old.example.org/replaced"
    );

    // Exactly one new link plus one overlay for the first record.
    let first: Vec<&String> = result.lines.iter().take_while(|l| !l.is_empty()).collect();
    assert_eq!(first.iter().filter(|l| l.starts_with("=856")).count(), 1);
    assert_eq!(first.iter().filter(|l| l.starts_with("=949")).count(), 1);
    assert_eq!(first[0], "=001  ocm01234567");

    // The second record gets an overlay but no link lines.
    let second: Vec<&String> = result
        .lines
        .iter()
        .skip_while(|l| !l.is_empty())
        .skip(1)
        .collect();
    assert!(!second.iter().any(|l| l.starts_with("=856")));
    assert_eq!(second.iter().filter(|l| l.starts_with("=949")).count(), 1);
    assert!(second[0].starts_with("=001  ocn123456789"));

    assert_eq!(result.links_added, 1);
    assert_eq!(result.records_modified, 1);
    assert_eq!(result.deleted_fields.len(), 2);
}

#[test]
fn table_row_order_controls_link_order_but_not_matching() {
    let forward = CrossRefTable::from_entries(vec![
        entry("b4088633", "vol_one", Some("1")),
        entry("b4088633", "vol_two", Some("2")),
        entry("b0000001", "noise", None),
    ]);
    let reversed = CrossRefTable::from_entries(vec![
        entry("b0000001", "noise", None),
        entry("b4088633", "vol_two", Some("2")),
        entry("b4088633", "vol_one", Some("1")),
    ]);
    let input = ["=907  $a.b4088633$c2003-01-15", ""];

    let links_of = |table: &CrossRefTable| -> Vec<String> {
        transduce(input, table)
            .unwrap()
            .lines
            .into_iter()
            .filter(|l| l.starts_with("=856"))
            .collect()
    };

    let a = links_of(&forward);
    let b = links_of(&reversed);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
    assert!(a[0].contains("vol_one") && a[1].contains("vol_two"));
    assert!(b[0].contains("vol_two") && b[1].contains("vol_one"));

    let mut a_sorted = a;
    let mut b_sorted = b;
    a_sorted.sort();
    b_sorted.sort();
    assert_eq!(a_sorted, b_sorted);
}

#[test]
fn full_file_pass_writes_output_and_audit_logs() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        input: dir.path().join("export.mrk"),
        output: dir.path().join("export_rewritten.mrk"),
        crossref: dir.path().join("match.csv"),
        audit_dir: dir.path().to_path_buf(),
    };
    fs::write(
        &config.crossref,
        "BibID,identifier,volume\nb1480649,aaasprofessi_chal_1980_000_6647977,\n",
    )
    .unwrap();
    fs::write(
        &config.input,
        "=001  1234567\n\
         =856  40$uhttp://old.example.org/replaced\n\
         =998  local only\n\
         =907  $a.b1480649$b07-06-17$c2016-12-06\n\
         \n",
    )
    .unwrap();

    let summary = run(&config).unwrap();
    assert_eq!(summary.records_modified, 1);
    assert_eq!(summary.links_added, 1);
    assert_eq!(summary.fields_deleted, 2);

    let output = fs::read_to_string(&config.output).unwrap();
    assert!(output.contains("=001  ocm01234567"));
    assert!(output.contains("archive.org/details/aaasprofessi_chal_1980_000_6647977"));
    assert!(output.contains(r"=949  \\$a*recs=b;ov=.b1480649;ct=2016-12-06;"));
    assert!(!output.contains("old.example.org"));
    assert!(!output.contains("=998"));

    let deleted = fs::read_to_string(dir.path().join("deleted_fields.log")).unwrap();
    assert_eq!(
        deleted,
        "=998  local only\n=907  $a.b1480649$b07-06-17$c2016-12-06"
    );
    let existing = fs::read_to_string(dir.path().join("existing_links.log")).unwrap();
    assert_eq!(
        existing,
        "b1480649\t=856  40$uhttp://old.example.org/replaced"
    );
}

#[test]
fn orphan_record_boundary_aborts_without_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        input: dir.path().join("export.mrk"),
        output: dir.path().join("export_rewritten.mrk"),
        crossref: dir.path().join("match.csv"),
        audit_dir: dir.path().to_path_buf(),
    };
    fs::write(&config.crossref, "BibID,identifier,volume\n").unwrap();
    // First record is fine; second reaches its boundary with no 907.
    fs::write(
        &config.input,
        "=907  $a.b1480649$c2016-12-06\n\n=245  10$aOrphan\n\n",
    )
    .unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, MrkError::OrphanRecordBoundary { line_no: 4 }));
    assert!(!config.output.exists());
    assert!(!dir.path().join("deleted_fields.log").exists());
}

#[test]
fn csv_loading_feeds_the_pass_with_repeated_bib_ids() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("match.csv");
    fs::write(
        &csv_path,
        "BibID,identifier,volume\n\
         b4088633,collectedess_fox_2003_001_7609521,1\n\
         b4088633,collectedess_fox_2003_002_7526030,2\n",
    )
    .unwrap();

    let table = CrossRefTable::from_path(&csv_path).unwrap();
    let result = transduce(["=907  $a.b4088633$c2003-01-15", ""], &table).unwrap();

    let links: Vec<&String> = result
        .lines
        .iter()
        .filter(|l| l.starts_with("=856"))
        .collect();
    assert_eq!(links.len(), 2);
    assert!(links[0].contains("of v. 1"));
    assert!(links[1].contains("of v. 2"));
}
