//! Summary numbers for one extraction result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::ExtractionResult;

/// Counts and graph metrics shown alongside the rendered graph.
///
/// Maps are keyed by category tag / relation label and only carry keys that
/// actually occur; `BTreeMap` keeps the display order stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of extracted entities (graph nodes)
    pub entity_count: usize,

    /// Number of extracted relations (graph edges)
    pub relation_count: usize,

    /// Entities per category tag
    pub entity_type_counts: BTreeMap<String, usize>,

    /// Relations per label
    pub relation_counts: BTreeMap<String, usize>,

    /// Directed graph density, m / (n · (n − 1)); zero below two nodes
    pub density: f64,
}

impl GraphStats {
    /// Compute stats for a result.
    pub fn from_result(result: &ExtractionResult) -> Self {
        let mut entity_type_counts = BTreeMap::new();
        for entity in &result.entities {
            *entity_type_counts
                .entry(entity.entity_type.as_tag().to_string())
                .or_insert(0) += 1;
        }

        let mut relation_counts = BTreeMap::new();
        for relation in &result.relations {
            *relation_counts.entry(relation.relation.clone()).or_insert(0) += 1;
        }

        Self {
            entity_count: result.entities.len(),
            relation_count: result.relations.len(),
            entity_type_counts,
            relation_counts,
            density: directed_density(result.entities.len(), result.relations.len()),
        }
    }
}

fn directed_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    edge_count as f64 / (node_count * (node_count - 1)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Entity, EntityType, Relation};

    #[test]
    fn test_counts_and_density() {
        let result = ExtractionResult {
            entities: vec![
                Entity::new("E1", "김민수", EntityType::Person),
                Entity::new("E2", "서울대학교", EntityType::Organization),
                Entity::new("E3", "이기획", EntityType::Person),
            ],
            relations: vec![
                Relation::new("E1", "E2", "소속"),
                Relation::new("E3", "E2", "소속"),
            ],
        };

        let stats = GraphStats::from_result(&result);
        assert_eq!(stats.entity_count, 3);
        assert_eq!(stats.relation_count, 2);
        assert_eq!(stats.entity_type_counts["PERSON"], 2);
        assert_eq!(stats.entity_type_counts["ORGANIZATION"], 1);
        assert_eq!(stats.relation_counts["소속"], 2);
        // 2 edges over 3 * 2 ordered pairs
        assert!((stats.density - 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_zero_below_two_nodes() {
        let empty = GraphStats::from_result(&ExtractionResult::new());
        assert_eq!(empty.density, 0.0);

        let single = GraphStats::from_result(&ExtractionResult {
            entities: vec![Entity::new("E1", "서울", EntityType::Location)],
            relations: vec![],
        });
        assert_eq!(single.entity_count, 1);
        assert_eq!(single.density, 0.0);
    }

    #[test]
    fn test_maps_only_carry_present_keys() {
        let stats = GraphStats::from_result(&ExtractionResult {
            entities: vec![Entity::new("E1", "서울", EntityType::Location)],
            relations: vec![],
        });
        assert_eq!(stats.entity_type_counts.len(), 1);
        assert!(!stats.entity_type_counts.contains_key("PERSON"));
        assert!(stats.relation_counts.is_empty());
    }
}
