//! Record types for one extraction result.
//!
//! Both record kinds are transient: created fresh per extraction call,
//! replaced on the next, never persisted.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ExtractionError;

/// Category of an extracted entity.
///
/// The fixed set the model is instructed to use. Unknown category strings
/// from the model degrade to [`EntityType::Other`] rather than failing the
/// whole submission; structural malformation is still a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// 사람, 인물
    Person,
    /// 회사, 정부, 기관, 단체 등
    Organization,
    /// 국가, 도시, 지역 등
    Location,
    /// 행사, 사건, 회의 등
    Event,
    /// 제품, 서비스, 기술 등
    Product,
    /// 기타 중요 개체
    Other,
}

impl EntityType {
    /// All categories, in legend order.
    pub const ALL: [EntityType; 6] = [
        EntityType::Person,
        EntityType::Organization,
        EntityType::Location,
        EntityType::Event,
        EntityType::Product,
        EntityType::Other,
    ];

    /// Wire/CSV tag for this category.
    pub fn as_tag(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Location => "LOCATION",
            EntityType::Event => "EVENT",
            EntityType::Product => "PRODUCT",
            EntityType::Other => "OTHER",
        }
    }

    /// Parse a model-supplied tag, degrading unknown values to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "PERSON" => EntityType::Person,
            "ORGANIZATION" => EntityType::Organization,
            "LOCATION" => EntityType::Location,
            "EVENT" => EntityType::Event,
            "PRODUCT" => EntityType::Product,
            _ => EntityType::Other,
        }
    }

    /// Display color for graph nodes and highlighted text.
    pub fn color(&self) -> &'static str {
        match self {
            EntityType::Person => "#3498db",
            EntityType::Organization => "#2ecc71",
            EntityType::Location => "#e74c3c",
            EntityType::Event => "#f39c12",
            EntityType::Product => "#9b59b6",
            EntityType::Other => "#7f8c8d",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for EntityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for EntityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(EntityType::from_tag(&tag))
    }
}

/// A named thing extracted from text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Identifier unique within one extraction result (e.g., "E1")
    pub id: String,

    /// Display label
    pub name: String,

    /// Category (wire field `type`)
    #[serde(rename = "type")]
    pub entity_type: EntityType,

    /// Short free-text description, may be empty
    #[serde(default)]
    pub description: String,
}

impl Entity {
    /// Create an entity with an empty description.
    pub fn new(id: impl Into<String>, name: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entity_type,
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A directed, labeled association between two entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Source entity id
    pub source: String,

    /// Target entity id
    pub target: String,

    /// Relation label (free text, e.g., "소속")
    pub relation: String,

    /// Supporting sentence, may be empty
    #[serde(default)]
    pub sentence: String,
}

impl Relation {
    /// Create a relation with no supporting sentence.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
            sentence: String::new(),
        }
    }

    /// Set the supporting sentence.
    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = sentence.into();
        self
    }
}

/// Everything one extraction call produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted entities
    #[serde(default)]
    pub entities: Vec<Entity>,

    /// Extracted relations between those entities
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl ExtractionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no entities were extracted.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an entity by id.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Check the endpoint invariant: every relation's source and target id
    /// must appear in the entity list.
    ///
    /// Rendering and export assume this and perform no repair; this check
    /// exists so callers (and tests) can assert it.
    pub fn validate(&self) -> Result<(), ExtractionError> {
        for relation in &self.relations {
            if self.entity(&relation.source).is_none() {
                return Err(ExtractionError::UnknownEntity(relation.source.clone()));
            }
            if self.entity(&relation.target).is_none() {
                return Err(ExtractionError::UnknownEntity(relation.target.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_tags_round_trip() {
        for entity_type in EntityType::ALL {
            assert_eq!(EntityType::from_tag(entity_type.as_tag()), entity_type);
        }
    }

    #[test]
    fn test_unknown_tag_degrades_to_other() {
        assert_eq!(EntityType::from_tag("ANIMAL"), EntityType::Other);
        assert_eq!(EntityType::from_tag(" person "), EntityType::Person);
        assert_eq!(EntityType::from_tag(""), EntityType::Other);
    }

    #[test]
    fn test_entity_wire_format_uses_type_field() {
        let entity = Entity::new("E1", "김민수", EntityType::Person)
            .with_description("서울대학교 컴퓨터공학과 교수");
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["type"], "PERSON");
        assert_eq!(json["name"], "김민수");

        let back: Entity = serde_json::from_value(json).unwrap();
        assert_eq!(back, entity);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let entity: Entity =
            serde_json::from_str(r#"{"id": "E1", "name": "네이버", "type": "ORGANIZATION"}"#)
                .unwrap();
        assert_eq!(entity.description, "");

        let relation: Relation =
            serde_json::from_str(r#"{"source": "E1", "target": "E2", "relation": "소속"}"#)
                .unwrap();
        assert_eq!(relation.sentence, "");
    }

    #[test]
    fn test_validate_accepts_well_formed_result() {
        let result = ExtractionResult {
            entities: vec![
                Entity::new("E1", "김민수", EntityType::Person),
                Entity::new("E2", "서울대학교", EntityType::Organization),
            ],
            relations: vec![Relation::new("E1", "E2", "소속")],
        };
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dangling_endpoint() {
        let result = ExtractionResult {
            entities: vec![Entity::new("E1", "김민수", EntityType::Person)],
            relations: vec![Relation::new("E1", "E9", "소속")],
        };
        match result.validate() {
            Err(ExtractionError::UnknownEntity(id)) => assert_eq!(id, "E9"),
            other => panic!("expected UnknownEntity, got {other:?}"),
        }
    }
}
