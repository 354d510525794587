use json2sql::{
    parse_records, transcode_file, transcode_to_string, InputError, PipelineError,
    TranscodeOptions,
};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn tuple_lines(sql: &str) -> Vec<&str> {
    sql.lines().filter(|l| l.starts_with('(')).collect()
}

#[test]
fn single_record_matches_reference_tuple() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.json");
    let output = dir.path().join("out.sql");
    fs::write(
        &input,
        r#"[{"phase":"P1","task":"T1","milestone":null,"start":"07/01/2026","end":null,"completion":50,"dependencies":"none","assignee":"Alice","time":3.5}]"#,
    )
    .unwrap();

    let stats = transcode_file(&input, &output, &TranscodeOptions::default()).unwrap();
    let sql = fs::read_to_string(&output).unwrap();

    assert_eq!(stats.records, 1);
    assert_eq!(
        tuple_lines(&sql),
        vec!["('P1', 'T1', NULL, TRY_CONVERT(DATE, '07/01/2026', 103), NULL, 50, 'none', 'Alice', 3.5);"]
    );
    assert!(sql.starts_with("-- ============================================\n"));
    assert!(sql.contains("\nUSE bbddcontrolhoras;\nGO\n"));
    assert!(sql.ends_with("PRINT 'Total de registros insertados: 1';\nGO"));
}

#[test]
fn corrupted_day_is_repaired() {
    let records = parse_records(r#"[{"start":"107/01/2026"}]"#).unwrap();
    let sql = json2sql::generate_sql(&records, &TranscodeOptions::default());

    assert!(sql.contains("TRY_CONVERT(DATE, '07/01/2026', 103)"));
}

#[test]
fn fifty_one_records_make_two_batches() {
    let items: Vec<_> = (1..=51)
        .map(|i| json!({"task": format!("T{i}"), "assignee": "O'Neil"}))
        .collect();
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, serde_json::to_string(&items).unwrap()).unwrap();

    let document = transcode_to_string(&input, &TranscodeOptions::default()).unwrap();
    let tuples = tuple_lines(&document.text);

    assert_eq!(tuples.len(), 51);
    assert_eq!(
        document.text.lines().filter(|l| l.ends_with("VALUES")).count(),
        2
    );
    assert!(tuples[49].ends_with("'O''Neil', NULL),"));
    assert!(tuples[50].ends_with("'O''Neil', NULL);"));
    assert!(document.text.contains("PRINT 'Total de registros insertados: 51';"));
}

#[test]
fn same_input_same_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, r#"[{"phase":"A"},{"phase":"B","end":"x/y"}]"#).unwrap();

    let first = transcode_to_string(&input, &TranscodeOptions::default()).unwrap();
    let second = transcode_to_string(&input, &TranscodeOptions::default()).unwrap();

    assert_eq!(first.text, second.text);
    assert_eq!(first.stats.dates_malformed, 1);
}

#[test]
fn malformed_dates_are_null_not_errors() {
    let records =
        parse_records(r#"[{"start":"2026-01-07","end":"07/01"},{"start":12}]"#).unwrap();
    let doc = json2sql::generate_document(&records, &TranscodeOptions::default());

    assert_eq!(
        tuple_lines(&doc.text),
        vec![
            "(NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL),",
            "(NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL);",
        ]
    );
    assert_eq!(doc.stats.dates_malformed, 3);
}

#[test]
fn structural_errors_abort() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.sql");

    let input = dir.path().join("object.json");
    fs::write(&input, r#"{"phase":"P1"}"#).unwrap();
    let err = transcode_file(&input, &output, &TranscodeOptions::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Input(InputError::NotAnArray { .. })));

    let missing = dir.path().join("missing.json");
    let err = transcode_file(&missing, &output, &TranscodeOptions::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Input(InputError::Io(_))));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, "[]").unwrap();
    let output = dir.path().join("no-such-dir").join("out.sql");

    let err = transcode_file(&input, &output, &TranscodeOptions::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Output(_)));
}
