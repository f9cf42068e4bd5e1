use signet_core::model::EdgeTable;
use std::collections::BTreeMap;

/// Lookup from directed (source, target) endpoint pairs to the keeper tag.
///
/// The last tagged row wins when a pair repeats. Rows without a tag are
/// skipped rather than filled with a sentinel: absence here means "no tag
/// recorded", unlike the cluster map's total-function contract.
pub fn map_edge_tags(table: &EdgeTable) -> BTreeMap<(String, String), String> {
    let mut tags = BTreeMap::new();

    for record in table.rows() {
        if let Some(keeper) = &record.keeper {
            tags.insert(
                (record.source.clone(), record.target.clone()),
                keeper.clone(),
            );
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_core::model::{EdgeRecord, EdgeTable};

    #[test]
    fn test_last_tagged_row_wins() {
        let table = EdgeTable::from_records(vec![
            EdgeRecord::new("a", "b").with_keeper("first"),
            EdgeRecord::new("a", "b").with_keeper("second"),
            EdgeRecord::new("a", "b"),
        ]);
        let tags = map_edge_tags(&table);

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[&("a".to_string(), "b".to_string())], "second");
    }

    #[test]
    fn test_untagged_pairs_are_absent() {
        let table = EdgeTable::from_records(vec![
            EdgeRecord::new("a", "b").with_keeper("k"),
            EdgeRecord::new("b", "c"),
        ]);
        let tags = map_edge_tags(&table);

        assert_eq!(tags.len(), 1);
        assert!(!tags.contains_key(&("b".to_string(), "c".to_string())));
    }

    #[test]
    fn test_pairs_are_directed() {
        let table = EdgeTable::from_records(vec![
            EdgeRecord::new("a", "b").with_keeper("forward"),
            EdgeRecord::new("b", "a").with_keeper("reverse"),
        ]);
        let tags = map_edge_tags(&table);

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[&("a".to_string(), "b".to_string())], "forward");
        assert_eq!(tags[&("b".to_string(), "a".to_string())], "reverse");
    }
}
