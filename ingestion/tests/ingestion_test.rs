use ingestion::{edge_table_from_json, summarize_table, IngestError};
use signet_core::error::{ErrorCode, SignetError};

#[test]
fn test_load_happy_path() {
    let table = edge_table_from_json(
        r#"[
            {"source": "a", "target": "b", "source_parent": "g1", "keeper": "alice"},
            {"source": "b", "target": "c", "target_parent": "g2"},
            {"source": "a", "target": "b", "keeper": "bob"}
        ]"#,
    )
    .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.dropped_rows(), 0);
    assert_eq!(table.rows()[0].source_parent.as_deref(), Some("g1"));
    assert_eq!(table.rows()[2].keeper.as_deref(), Some("bob"));
}

#[test]
fn test_missing_required_column_is_fatal() {
    let err = edge_table_from_json(r#"[{"source": "a", "dest": "b"}]"#).unwrap_err();
    match err {
        IngestError::MissingColumn(column) => assert_eq!(column, "target"),
        other => panic!("unexpected error: {other}"),
    }
    let err = edge_table_from_json(r#"[{"dest": "b"}]"#).unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::InvalidArgument);
}

#[test]
fn test_malformed_rows_drop_with_count() {
    let table = edge_table_from_json(
        r#"[
            {"source": "a", "target": "b"},
            {"source": "", "target": "c"},
            {"source": "c", "target": null},
            {"source": "  ", "target": "d"}
        ]"#,
    )
    .unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.dropped_rows(), 3);
}

#[test]
fn test_empty_input_yields_empty_table() {
    let table = edge_table_from_json("[]").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.dropped_rows(), 0);

    let summary = summarize_table(&table);
    assert_eq!(summary.total_edges, 0);
}

#[test]
fn test_invalid_json_is_rejected() {
    assert!(edge_table_from_json("{\"source\": \"a\"}").is_err());
    assert!(edge_table_from_json("not json").is_err());
}

#[test]
fn test_summary_over_loaded_table() {
    let table = edge_table_from_json(
        r#"[
            {"source": "a", "target": "b", "keeper": "k1", "status": "live"},
            {"source": "c", "target": "b"}
        ]"#,
    )
    .unwrap();
    let summary = summarize_table(&table);

    assert_eq!(summary.total_edges, 2);
    assert_eq!(summary.unique_sources, 2);
    assert_eq!(summary.unique_targets, 1);
    assert_eq!(
        summary.columns,
        vec!["keeper", "source", "status", "target"]
    );
}
