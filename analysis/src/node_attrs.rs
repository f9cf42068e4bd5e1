use serde::Serialize;
use signet_core::model::EdgeTable;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub in_degree: usize,
    pub out_degree: usize,
    pub total_degree: usize,
}

/// Degree counts and parent group labels per node, aggregated over table
/// rows. Degrees count every row individually, so parallel (source, target)
/// pairs each contribute even though they fold into one graph edge.
///
/// Parent resolution is asymmetric on purpose: the first non-null
/// `source_parent` in row order wins outright, and a `target_parent` only
/// applies to nodes that never carried a source-side label.
pub fn derive_node_attributes(table: &EdgeTable) -> BTreeMap<String, NodeAttributes> {
    let mut attrs: BTreeMap<String, NodeAttributes> = BTreeMap::new();

    for record in table.rows() {
        attrs.entry(record.source.clone()).or_default().out_degree += 1;
        attrs.entry(record.target.clone()).or_default().in_degree += 1;
    }

    for record in table.rows() {
        if let Some(parent) = &record.source_parent {
            if let Some(entry) = attrs.get_mut(&record.source) {
                if entry.parent.is_none() {
                    entry.parent = Some(parent.clone());
                }
            }
        }
    }
    for record in table.rows() {
        if let Some(parent) = &record.target_parent {
            if let Some(entry) = attrs.get_mut(&record.target) {
                if entry.parent.is_none() {
                    entry.parent = Some(parent.clone());
                }
            }
        }
    }

    for entry in attrs.values_mut() {
        entry.total_degree = entry.in_degree + entry.out_degree;
    }

    attrs
}
