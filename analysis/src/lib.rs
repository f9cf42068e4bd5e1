pub mod cluster;
pub mod node_attrs;
pub mod role;
pub mod run;
pub mod tags;

use signet_core::error::{ErrorCode, SignetError};
use thiserror::Error;

pub use cluster::{assign_clusters, ClusterPolicy, UNASSIGNED_CLUSTER};
pub use node_attrs::{derive_node_attributes, NodeAttributes};
pub use role::{classify_roles, Role};
pub use run::{derive_model, DerivedModel};
pub use tags::map_edge_tags;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("unknown cluster policy: {0}")]
    UnknownPolicy(String),
    #[error("pivot node not present in edge table: {0}")]
    PivotNotFound(String),
}

impl SignetError for AnalysisError {
    fn error_code(&self) -> ErrorCode {
        match self {
            AnalysisError::UnknownPolicy(_) | AnalysisError::PivotNotFound(_) => {
                ErrorCode::InvalidArgument
            }
        }
    }
}
