use crate::AnalysisError;
use graph::Graph;
use serde::{Deserialize, Serialize};
use signet_core::model::EdgeTable;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Cluster label for nodes no qualifying row ever assigned.
pub const UNASSIGNED_CLUSTER: &str = "unassigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterPolicy {
    ByTargetParent,
    BySourceParent,
    ByKeeper,
}

impl FromStr for ClusterPolicy {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "by_target_parent" => Ok(ClusterPolicy::ByTargetParent),
            "by_source_parent" => Ok(ClusterPolicy::BySourceParent),
            "by_keeper" => Ok(ClusterPolicy::ByKeeper),
            other => Err(AnalysisError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Assign every graph node a cluster label under the given policy.
///
/// Later rows overwrite earlier assignments for the same node. Existing
/// reports depend on that last-write-wins ordering, so it is part of the
/// contract. The result is total over the graph's node set: nodes untouched
/// by any qualifying row map to [`UNASSIGNED_CLUSTER`].
pub fn assign_clusters(
    table: &EdgeTable,
    graph: &Graph,
    policy: ClusterPolicy,
) -> BTreeMap<String, String> {
    let mut clusters: BTreeMap<String, String> = BTreeMap::new();

    for record in table.rows() {
        match policy {
            ClusterPolicy::ByTargetParent => {
                if let Some(parent) = &record.target_parent {
                    clusters.insert(record.target.clone(), parent.clone());
                }
            }
            ClusterPolicy::BySourceParent => {
                if let Some(parent) = &record.source_parent {
                    clusters.insert(record.source.clone(), parent.clone());
                }
            }
            ClusterPolicy::ByKeeper => {
                if let Some(keeper) = &record.keeper {
                    clusters.insert(record.source.clone(), keeper.clone());
                    clusters.insert(record.target.clone(), keeper.clone());
                }
            }
        }
    }

    for node in graph.nodes() {
        clusters
            .entry(node.clone())
            .or_insert_with(|| UNASSIGNED_CLUSTER.to_string());
    }

    clusters
}
