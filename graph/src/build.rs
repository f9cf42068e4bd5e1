use serde::Serialize;
use signet_core::model::{EdgeRecord, EdgeTable};
use std::collections::{BTreeMap, HashMap};

/// Attributes carried by a folded edge: the merge of every table row sharing
/// the endpoint pair, later rows overwriting earlier ones per key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keeper: Option<String>,
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl EdgeAttrs {
    fn merge_row(&mut self, record: &EdgeRecord) {
        if let Some(parent) = &record.source_parent {
            self.source_parent = Some(parent.clone());
        }
        if let Some(parent) = &record.target_parent {
            self.target_parent = Some(parent.clone());
        }
        if let Some(keeper) = &record.keeper {
            self.keeper = Some(keeper.clone());
        }
        for (key, value) in &record.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

/// An undirected edge; `a`/`b` keep the orientation of the first table row
/// that introduced the pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub a: String,
    pub b: String,
    pub attrs: EdgeAttrs,
}

/// Undirected graph over the edge table's node set. Parallel (source, target)
/// rows fold into a single edge with merged attributes; node and edge order
/// follow first appearance in table row order, so one build call is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    nodes: Vec<String>,
    edges: Vec<GraphEdge>,
    #[serde(skip)]
    node_index: HashMap<String, usize>,
    #[serde(skip)]
    edge_index: HashMap<(usize, usize), usize>,
    #[serde(skip)]
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build the graph from a validated edge table. An empty table yields an
    /// empty graph; downstream consumers handle that case explicitly.
    pub fn build(table: &EdgeTable) -> Self {
        let mut graph = Graph::default();

        for record in table.rows() {
            let a = graph.intern_node(&record.source);
            let b = graph.intern_node(&record.target);
            let key = if a <= b { (a, b) } else { (b, a) };

            let edge_idx = match graph.edge_index.get(&key).copied() {
                Some(idx) => idx,
                None => {
                    let idx = graph.edges.len();
                    graph.edges.push(GraphEdge {
                        a: record.source.clone(),
                        b: record.target.clone(),
                        attrs: EdgeAttrs::default(),
                    });
                    graph.edge_index.insert(key, idx);
                    graph.adjacency[a].push(b);
                    if a != b {
                        graph.adjacency[b].push(a);
                    }
                    idx
                }
            };

            graph.edges[edge_idx].attrs.merge_row(record);
        }

        if table.dropped_rows() > 0 {
            tracing::warn!(
                dropped = table.dropped_rows(),
                "edge table rows were dropped before graph construction"
            );
        }
        tracing::info!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "graph built"
        );

        graph
    }

    fn intern_node(&mut self, label: &str) -> usize {
        if let Some(idx) = self.node_index.get(label) {
            return *idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(label.to_string());
        self.node_index.insert(label.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    /// 1-hop neighbors in edge insertion order.
    pub fn neighbors(&self, label: &str) -> Vec<&str> {
        self.node_index
            .get(label)
            .map(|idx| {
                self.adjacency[*idx]
                    .iter()
                    .map(|n| self.nodes[*n].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The folded edge between two labels, regardless of orientation.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&GraphEdge> {
        let ia = *self.node_index.get(a)?;
        let ib = *self.node_index.get(b)?;
        let key = if ia <= ib { (ia, ib) } else { (ib, ia) };
        self.edge_index.get(&key).map(|idx| &self.edges[*idx])
    }

    pub(crate) fn neighbor_indices(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }
}
