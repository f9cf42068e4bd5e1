use crate::loader::{
    COLUMN_KEEPER, COLUMN_SOURCE, COLUMN_SOURCE_PARENT, COLUMN_TARGET, COLUMN_TARGET_PARENT,
};
use serde::Serialize;
use signet_core::model::EdgeTable;
use std::collections::BTreeSet;

/// Shape report over a loaded edge table, for quick sanity checks before a
/// derivation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub total_edges: usize,
    pub unique_sources: usize,
    pub unique_targets: usize,
    pub dropped_rows: usize,
    pub columns: Vec<String>,
}

pub fn summarize_table(table: &EdgeTable) -> TableSummary {
    let mut sources = BTreeSet::new();
    let mut targets = BTreeSet::new();
    let mut columns: BTreeSet<String> = BTreeSet::new();

    for record in table.rows() {
        sources.insert(record.source.as_str());
        targets.insert(record.target.as_str());

        columns.insert(COLUMN_SOURCE.to_string());
        columns.insert(COLUMN_TARGET.to_string());
        if record.source_parent.is_some() {
            columns.insert(COLUMN_SOURCE_PARENT.to_string());
        }
        if record.target_parent.is_some() {
            columns.insert(COLUMN_TARGET_PARENT.to_string());
        }
        if record.keeper.is_some() {
            columns.insert(COLUMN_KEEPER.to_string());
        }
        for key in record.extra.keys() {
            columns.insert(key.clone());
        }
    }

    TableSummary {
        total_edges: table.len(),
        unique_sources: sources.len(),
        unique_targets: targets.len(),
        dropped_rows: table.dropped_rows(),
        columns: columns.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_core::model::EdgeRecord;

    #[test]
    fn test_summary_counts() {
        let table = EdgeTable::from_records(vec![
            EdgeRecord::new("a", "b").with_keeper("k"),
            EdgeRecord::new("a", "c").with_extra("status", serde_json::json!("ok")),
            EdgeRecord::new("", "d"),
        ]);
        let summary = summarize_table(&table);

        assert_eq!(summary.total_edges, 2);
        assert_eq!(summary.unique_sources, 1);
        assert_eq!(summary.unique_targets, 2);
        assert_eq!(summary.dropped_rows, 1);
        assert_eq!(
            summary.columns,
            vec!["keeper", "source", "status", "target"]
        );
    }

    #[test]
    fn test_empty_table_summary() {
        let summary = summarize_table(&EdgeTable::default());
        assert_eq!(summary.total_edges, 0);
        assert!(summary.columns.is_empty());
    }
}
