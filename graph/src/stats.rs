use crate::Graph;
use serde::Serialize;
use signet_core::model::EdgeTable;
use std::collections::{BTreeSet, VecDeque};

/// Whole-network figures reported alongside the derived maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub is_connected: bool,
    pub unique_keepers: usize,
}

impl NetworkStats {
    pub fn compute(table: &EdgeTable, graph: &Graph) -> Self {
        let keepers: BTreeSet<&str> = table
            .rows()
            .iter()
            .filter_map(|record| record.keeper.as_deref())
            .collect();

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            density: density(graph),
            is_connected: is_connected(graph),
            unique_keepers: keepers.len(),
        }
    }
}

fn density(graph: &Graph) -> f64 {
    let n = graph.node_count();
    if n < 2 {
        return 0.0;
    }
    let m = graph.edge_count() as f64;
    (2.0 * m) / ((n * (n - 1)) as f64)
}

/// BFS over the undirected adjacency. The empty graph counts as disconnected.
fn is_connected(graph: &Graph) -> bool {
    let n = graph.node_count();
    if n == 0 {
        return false;
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(0usize);
    let mut reached = 1usize;

    while let Some(idx) = queue.pop_front() {
        for neighbor in graph.neighbor_indices(idx) {
            if !visited[*neighbor] {
                visited[*neighbor] = true;
                reached += 1;
                queue.push_back(*neighbor);
            }
        }
    }

    reached == n
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_core::model::EdgeRecord;

    #[test]
    fn test_triangle_density_and_connectivity() {
        let table = EdgeTable::from_records(vec![
            EdgeRecord::new("a", "b"),
            EdgeRecord::new("b", "c"),
            EdgeRecord::new("c", "a"),
        ]);
        let graph = Graph::build(&table);
        let stats = NetworkStats::compute(&table, &graph);

        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 3);
        assert!((stats.density - 1.0).abs() < f64::EPSILON);
        assert!(stats.is_connected);
    }

    #[test]
    fn test_disconnected_components() {
        let table = EdgeTable::from_records(vec![
            EdgeRecord::new("a", "b"),
            EdgeRecord::new("x", "y"),
        ]);
        let graph = Graph::build(&table);
        let stats = NetworkStats::compute(&table, &graph);

        assert!(!stats.is_connected);
    }

    #[test]
    fn test_unique_keepers_counts_distinct_values() {
        let table = EdgeTable::from_records(vec![
            EdgeRecord::new("a", "b").with_keeper("alice"),
            EdgeRecord::new("b", "c").with_keeper("bob"),
            EdgeRecord::new("c", "a").with_keeper("alice"),
            EdgeRecord::new("a", "c"),
        ]);
        let graph = Graph::build(&table);
        let stats = NetworkStats::compute(&table, &graph);

        assert_eq!(stats.unique_keepers, 2);
    }

    #[test]
    fn test_empty_graph_stats() {
        let table = EdgeTable::default();
        let graph = Graph::build(&table);
        let stats = NetworkStats::compute(&table, &graph);

        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.density, 0.0);
        assert!(!stats.is_connected);
    }
}
