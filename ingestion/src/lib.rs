pub mod loader;
pub mod summary;

pub use loader::{edge_table_from_json, edge_table_from_rows, IngestError};
pub use summary::{summarize_table, TableSummary};
