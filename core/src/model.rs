use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One relational row: a source→target relationship plus its descriptive
/// attributes. The recognized optional fields are typed; anything else the
/// upstream table carried rides along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keeper: Option<String>,
    #[serde(default)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_parent: None,
            target_parent: None,
            keeper: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_source_parent(mut self, parent: impl Into<String>) -> Self {
        self.source_parent = Some(parent.into());
        self
    }

    pub fn with_target_parent(mut self, parent: impl Into<String>) -> Self {
        self.target_parent = Some(parent.into());
        self
    }

    pub fn with_keeper(mut self, keeper: impl Into<String>) -> Self {
        self.keeper = Some(keeper.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Validated relational input for one derivation run. Row order is frozen at
/// construction and every consumer iterates it in that order; rows missing a
/// source or target are dropped up front and only counted. Always built
/// through [`EdgeTable::from_records`] so the trimming invariant holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeTable {
    rows: Vec<EdgeRecord>,
    dropped_rows: usize,
}

impl EdgeTable {
    /// Trim source/target labels and drop rows where either is empty after
    /// trimming. Dropping is recoverable filtering, not an error; the count
    /// stays observable through [`EdgeTable::dropped_rows`].
    pub fn from_records(records: Vec<EdgeRecord>) -> Self {
        let mut rows = Vec::with_capacity(records.len());
        let mut dropped = 0usize;

        for mut record in records {
            record.source = record.source.trim().to_string();
            record.target = record.target.trim().to_string();
            if record.source.is_empty() || record.target.is_empty() {
                dropped += 1;
                continue;
            }
            rows.push(record);
        }

        if dropped > 0 {
            tracing::warn!(dropped, "dropped rows missing source or target");
        }

        Self {
            rows,
            dropped_rows: dropped,
        }
    }

    pub fn rows(&self) -> &[EdgeRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Node labels in first-appearance order (source before target within a
    /// row). The node set is never declared upstream; this projection is the
    /// single place it gets materialized, so the graph builder and every
    /// deriver enumerate the same set in the same order.
    pub fn node_labels(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut labels = Vec::new();
        for record in &self.rows {
            for label in [&record.source, &record.target] {
                if seen.insert(label.clone()) {
                    labels.push(label.clone());
                }
            }
        }
        labels
    }
}
