use crate::AnalysisError;
use serde::{Deserialize, Serialize};
use signet_core::model::EdgeTable;
use std::collections::{BTreeMap, HashSet};

/// A node's classification by its directed connection pattern to the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    RolesNode,
    ConnectsTo,
    ConnectsFrom,
    Both,
    None,
}

/// Classify every node relative to the pivot. Total over the table's node
/// set; an empty table yields an empty map, and otherwise a pivot absent
/// from the node set is rejected outright.
pub fn classify_roles(
    table: &EdgeTable,
    pivot: &str,
) -> Result<BTreeMap<String, Role>, AnalysisError> {
    if table.is_empty() {
        return Ok(BTreeMap::new());
    }

    let nodes = table.node_labels();
    if !nodes.iter().any(|node| node == pivot) {
        return Err(AnalysisError::PivotNotFound(pivot.to_string()));
    }

    let mut connects_to: HashSet<&str> = HashSet::new();
    let mut connects_from: HashSet<&str> = HashSet::new();
    for record in table.rows() {
        if record.target == pivot && record.source != pivot {
            connects_to.insert(record.source.as_str());
        }
        if record.source == pivot && record.target != pivot {
            connects_from.insert(record.target.as_str());
        }
    }

    let mut roles = BTreeMap::new();
    for node in nodes {
        let role = if node == pivot {
            Role::RolesNode
        } else {
            match (
                connects_to.contains(node.as_str()),
                connects_from.contains(node.as_str()),
            ) {
                (true, true) => Role::Both,
                (true, false) => Role::ConnectsTo,
                (false, true) => Role::ConnectsFrom,
                (false, false) => Role::None,
            }
        };
        roles.insert(node, role);
    }

    Ok(roles)
}
