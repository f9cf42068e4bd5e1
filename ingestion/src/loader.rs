use serde_json::Value;
use signet_core::error::{ErrorCode, SignetError};
use signet_core::model::{EdgeRecord, EdgeTable};
use std::collections::BTreeMap;
use thiserror::Error;

pub const COLUMN_SOURCE: &str = "source";
pub const COLUMN_TARGET: &str = "target";
pub const COLUMN_SOURCE_PARENT: &str = "source_parent";
pub const COLUMN_TARGET_PARENT: &str = "target_parent";
pub const COLUMN_KEEPER: &str = "keeper";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid row data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

impl SignetError for IngestError {
    fn error_code(&self) -> ErrorCode {
        match self {
            IngestError::Json(_) | IngestError::MissingColumn(_) => ErrorCode::InvalidArgument,
        }
    }
}

/// Parse already-fetched tabular data (a JSON array of row objects) into a
/// validated edge table. Fetching the raw data from its sheet or file is the
/// caller's job; this is a pure in-memory hand-off.
pub fn edge_table_from_json(raw: &str) -> Result<EdgeTable, IngestError> {
    let rows: Vec<BTreeMap<String, Value>> = serde_json::from_str(raw)?;
    edge_table_from_rows(rows)
}

/// Convert loose row maps into a validated edge table.
///
/// A `source`/`target` column missing from the whole table is fatal and
/// produces no partial result. Individual rows with a missing or empty value
/// in either column are recoverable: they get dropped and counted by the
/// table itself.
pub fn edge_table_from_rows(
    rows: Vec<BTreeMap<String, Value>>,
) -> Result<EdgeTable, IngestError> {
    if !rows.is_empty() {
        let has_column =
            |name: &str| rows.iter().any(|row| row.contains_key(name));
        if !has_column(COLUMN_SOURCE) {
            return Err(IngestError::MissingColumn(COLUMN_SOURCE));
        }
        if !has_column(COLUMN_TARGET) {
            return Err(IngestError::MissingColumn(COLUMN_TARGET));
        }
    }

    let total = rows.len();
    let records = rows.into_iter().map(record_from_row).collect();
    let table = EdgeTable::from_records(records);
    tracing::debug!(
        rows = table.len(),
        dropped = table.dropped_rows(),
        total,
        "edge table loaded"
    );
    Ok(table)
}

fn record_from_row(mut row: BTreeMap<String, Value>) -> EdgeRecord {
    let source = scalar_string(row.remove(COLUMN_SOURCE)).unwrap_or_default();
    let target = scalar_string(row.remove(COLUMN_TARGET)).unwrap_or_default();

    let mut record = EdgeRecord::new(source, target);
    record.source_parent = scalar_string(row.remove(COLUMN_SOURCE_PARENT));
    record.target_parent = scalar_string(row.remove(COLUMN_TARGET_PARENT));
    record.keeper = scalar_string(row.remove(COLUMN_KEEPER));

    // Remaining columns pass through untouched; nulls mean "no value".
    for (key, value) in row {
        if !value.is_null() {
            record.extra.insert(key, value);
        }
    }

    record
}

/// Scalar cell → string, mirroring how a dataframe loader reads cells.
/// Blank and null cells count as absent; numbers and booleans render as
/// text. Composite values don't belong in the recognized columns.
fn scalar_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
