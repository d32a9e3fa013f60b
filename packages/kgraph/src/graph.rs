//! View-model for the interactive graph.
//!
//! Nodes and edges here are shaped for vis-network: the front end feeds
//! them to `new vis.Network(...)` unchanged, so field names follow the
//! widget's wire format (`from`/`to`), not ours.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::types::{Entity, ExtractionResult, Relation};

/// Display size of every node.
pub const NODE_SIZE: u32 = 25;

/// One renderable node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Entity id
    pub id: String,

    /// Label shown inside the node
    pub label: String,

    /// Fill color keyed on entity category
    pub color: String,

    /// Node size
    pub size: u32,

    /// Hover tooltip, HTML
    pub title: String,
}

impl GraphNode {
    fn from_entity(entity: &Entity) -> Self {
        Self {
            id: entity.id.clone(),
            label: entity.name.clone(),
            color: entity.entity_type.color().to_string(),
            size: NODE_SIZE,
            title: format!(
                "유형: {}<br>설명: {}",
                entity.entity_type, entity.description
            ),
        }
    }
}

/// One renderable directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source entity id (vis-network calls this `from`)
    #[serde(rename = "from")]
    pub source: String,

    /// Target entity id (vis-network calls this `to`)
    #[serde(rename = "to")]
    pub target: String,

    /// Relation label drawn on the edge
    pub label: String,

    /// Hover tooltip, the supporting sentence
    pub title: String,
}

impl GraphEdge {
    fn from_relation(relation: &Relation) -> Self {
        Self {
            source: relation.source.clone(),
            target: relation.target.clone(),
            label: relation.relation.clone(),
            title: relation.sentence.clone(),
        }
    }
}

/// Everything the widget needs to draw one extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphView {
    /// Nodes, one per entity
    pub nodes: Vec<GraphNode>,

    /// Edges, one per relation
    pub edges: Vec<GraphEdge>,
}

impl GraphView {
    /// Build the view for a result. Purely a projection; no filtering or
    /// repair happens here.
    pub fn from_result(result: &ExtractionResult) -> Self {
        Self {
            nodes: result.entities.iter().map(GraphNode::from_entity).collect(),
            edges: result
                .relations
                .iter()
                .map(GraphEdge::from_relation)
                .collect(),
        }
    }
}

/// vis-network options for the in-app graph.
///
/// Physics on, circle nodes with Korean-capable fonts, directed arrows at
/// half scale, hover tooltips after 300ms.
pub fn vis_options() -> Value {
    json!({
        "nodes": {
            "shape": "circle",
            "font": { "size": 14, "face": "Nanum Gothic" },
            "scaling": { "min": 20, "max": 40 },
            "shadow": true
        },
        "edges": {
            "font": { "size": 12, "face": "Nanum Gothic" },
            "smooth": { "type": "dynamic" },
            "arrows": { "to": { "enabled": true, "scaleFactor": 0.5 } }
        },
        "physics": { "enabled": true },
        "layout": { "hierarchical": false },
        "interaction": {
            "hover": true,
            "navigationButtons": true,
            "keyboard": true,
            "tooltipDelay": 300
        }
    })
}
