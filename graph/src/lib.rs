pub mod build;
pub mod stats;

pub use build::{EdgeAttrs, Graph, GraphEdge};
pub use stats::NetworkStats;
