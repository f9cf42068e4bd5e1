use crate::cluster::{assign_clusters, ClusterPolicy};
use crate::node_attrs::{derive_node_attributes, NodeAttributes};
use crate::role::{classify_roles, Role};
use crate::tags::map_edge_tags;
use crate::AnalysisError;
use graph::Graph;
use signet_core::model::EdgeTable;
use std::collections::BTreeMap;

/// The fully annotated model one derivation run produces: the folded graph
/// plus the four maps reporting and rendering consume independently.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedModel {
    pub graph: Graph,
    pub node_attributes: BTreeMap<String, NodeAttributes>,
    pub clusters: BTreeMap<String, String>,
    pub roles: BTreeMap<String, Role>,
    pub edge_tags: BTreeMap<(String, String), String>,
}

/// Run every derivation over one edge table. Each component is a pure
/// function of the table and/or graph; the whole model is rebuilt wholesale
/// on every call and rerunning over the same input yields an equal model.
pub fn derive_model(
    table: &EdgeTable,
    pivot: &str,
    policy: ClusterPolicy,
) -> Result<DerivedModel, AnalysisError> {
    let graph = Graph::build(table);
    let roles = classify_roles(table, pivot)?;
    tracing::debug!(
        nodes = graph.node_count(),
        pivot,
        policy = ?policy,
        "derivation run complete"
    );

    Ok(DerivedModel {
        node_attributes: derive_node_attributes(table),
        clusters: assign_clusters(table, &graph, policy),
        edge_tags: map_edge_tags(table),
        roles,
        graph,
    })
}
