//! Export payload encoders.
//!
//! Every encoder produces a complete in-memory payload; nothing here touches
//! the filesystem. File naming and download headers are the caller's job,
//! via [`ExportFormat::filename`] and [`ExportFormat::content_type`].

use csv::Writer;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ExportError;
use crate::graph::GraphView;
use crate::types::{Entity, ExtractionResult, Relation};

/// UTF-8 byte-order mark. Excel misreads unmarked UTF-8 CSVs and renders
/// Korean text as mojibake, so every CSV payload starts with this.
const UTF8_BOM: &str = "\u{FEFF}";

/// Font stack for the standalone HTML page. Falls through common Korean
/// system fonts before giving up to sans-serif.
const KOREAN_FONT_STACK: &str =
    "Nanum Gothic, Malgun Gothic, Apple Gothic, 맑은 고딕, 돋움, sans-serif";

/// The downloadable renditions of one extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Entity table: `id,name,type,description`
    EntitiesCsv,
    /// Relation table: `source,target,relation,sentence`
    RelationsCsv,
    /// Relation table joined with both endpoints' name and type
    RelationsWithInfoCsv,
    /// One pretty-printed JSON object with both record lists
    Json,
    /// One record per line, entities before relations
    Jsonl,
    /// Self-contained interactive graph page
    Html,
}

impl ExportFormat {
    /// All formats, in download-menu order.
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::EntitiesCsv,
        ExportFormat::RelationsCsv,
        ExportFormat::RelationsWithInfoCsv,
        ExportFormat::Json,
        ExportFormat::Jsonl,
        ExportFormat::Html,
    ];

    /// Parse a format tag as it appears in the export URL.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "entities.csv" => Some(ExportFormat::EntitiesCsv),
            "relations.csv" => Some(ExportFormat::RelationsCsv),
            "relations_with_info.csv" => Some(ExportFormat::RelationsWithInfoCsv),
            "json" => Some(ExportFormat::Json),
            "jsonl" => Some(ExportFormat::Jsonl),
            "html" => Some(ExportFormat::Html),
            _ => None,
        }
    }

    /// Tag used in the export URL.
    pub fn tag(&self) -> &'static str {
        match self {
            ExportFormat::EntitiesCsv => "entities.csv",
            ExportFormat::RelationsCsv => "relations.csv",
            ExportFormat::RelationsWithInfoCsv => "relations_with_info.csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
            ExportFormat::Html => "html",
        }
    }

    /// MIME type for the download response.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::EntitiesCsv
            | ExportFormat::RelationsCsv
            | ExportFormat::RelationsWithInfoCsv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
            ExportFormat::Jsonl => "application/jsonl",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Suggested download filename.
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::EntitiesCsv => "entities.csv",
            ExportFormat::RelationsCsv => "relations.csv",
            ExportFormat::RelationsWithInfoCsv => "relations_with_info.csv",
            ExportFormat::Json => "knowledge_graph.json",
            ExportFormat::Jsonl => "extracted_data.jsonl",
            ExportFormat::Html => "knowledge_graph.html",
        }
    }
}

/// Encode `result` in the requested format.
pub fn export(result: &ExtractionResult, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::EntitiesCsv => entities_csv(result),
        ExportFormat::RelationsCsv => relations_csv(result),
        ExportFormat::RelationsWithInfoCsv => relations_with_info_csv(result),
        ExportFormat::Json => json_payload(result),
        ExportFormat::Jsonl => jsonl_payload(result),
        ExportFormat::Html => html_payload(result),
    }
}

/// Entity table. An empty result still yields the header row.
pub fn entities_csv(result: &ExtractionResult) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(["id", "name", "type", "description"])?;
    for entity in &result.entities {
        writer.write_record([
            entity.id.as_str(),
            entity.name.as_str(),
            entity.entity_type.as_tag(),
            entity.description.as_str(),
        ])?;
    }
    finish_csv(writer)
}

/// Relation table.
pub fn relations_csv(result: &ExtractionResult) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(["source", "target", "relation", "sentence"])?;
    for relation in &result.relations {
        writer.write_record([
            relation.source.as_str(),
            relation.target.as_str(),
            relation.relation.as_str(),
            relation.sentence.as_str(),
        ])?;
    }
    finish_csv(writer)
}

/// Relation table with both endpoints' name and type joined in.
///
/// Left-join semantics: a relation whose endpoint id is missing from the
/// entity list keeps its row with blank name/type columns.
pub fn relations_with_info_csv(result: &ExtractionResult) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record([
        "source_id",
        "source_name",
        "source_type",
        "target_id",
        "target_name",
        "target_type",
        "relation",
        "sentence",
    ])?;
    for relation in &result.relations {
        let (source_name, source_type) = endpoint_columns(result.entity(&relation.source));
        let (target_name, target_type) = endpoint_columns(result.entity(&relation.target));
        writer.write_record([
            relation.source.as_str(),
            source_name,
            source_type,
            relation.target.as_str(),
            target_name,
            target_type,
            relation.relation.as_str(),
            relation.sentence.as_str(),
        ])?;
    }
    finish_csv(writer)
}

fn endpoint_columns(entity: Option<&Entity>) -> (&str, &str) {
    match entity {
        Some(entity) => (entity.name.as_str(), entity.entity_type.as_tag()),
        None => ("", ""),
    }
}

fn finish_csv(writer: Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(format!("{UTF8_BOM}{}", String::from_utf8(bytes)?))
}

/// Pretty-printed JSON object with both record lists. Korean text stays
/// unescaped.
pub fn json_payload(result: &ExtractionResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
enum JsonlRecord<'a> {
    Entity(&'a Entity),
    Relation(&'a Relation),
}

/// One JSON record per line, every entity before the first relation.
pub fn jsonl_payload(result: &ExtractionResult) -> Result<String, ExportError> {
    let mut lines = String::new();
    for entity in &result.entities {
        lines.push_str(&serde_json::to_string(&JsonlRecord::Entity(entity))?);
        lines.push('\n');
    }
    for relation in &result.relations {
        lines.push_str(&serde_json::to_string(&JsonlRecord::Relation(relation))?);
        lines.push('\n');
    }
    Ok(lines)
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<title>지식 그래프</title>
<script src="https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"></script>
<style>
  html, body { margin: 0; padding: 0; background: #ffffff; }
  #graph { width: 100%; height: 800px; }
</style>
</head>
<body>
<div id="graph"></div>
<script>
  const nodes = new vis.DataSet({nodes_json});
  const edges = new vis.DataSet({edges_json});
  const options = {options_json};
  new vis.Network(document.getElementById("graph"), { nodes: nodes, edges: edges }, options);
</script>
</body>
</html>
"#;

fn standalone_options() -> Value {
    json!({
        "nodes": {
            "font": { "size": 24, "face": KOREAN_FONT_STACK, "bold": true }
        },
        "edges": {
            "font": { "size": 20, "face": KOREAN_FONT_STACK, "bold": true },
            "arrows": "to"
        },
        "physics": { "enabled": true }
    })
}

/// Self-contained page: graph data inlined, widget from CDN, nothing else
/// to fetch except the script. Larger fonts than the in-app view since the
/// page has the full 800px to itself.
pub fn html_payload(result: &ExtractionResult) -> Result<String, ExportError> {
    let view = GraphView::from_result(result);
    Ok(HTML_TEMPLATE
        .replace("{nodes_json}", &serde_json::to_string(&view.nodes)?)
        .replace("{edges_json}", &serde_json::to_string(&view.edges)?)
        .replace("{options_json}", &serde_json::to_string(&standalone_options())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityType;

    fn sample_result() -> ExtractionResult {
        ExtractionResult {
            entities: vec![
                Entity::new("E1", "김민수", EntityType::Person)
                    .with_description("서울대학교 컴퓨터공학과 교수"),
                Entity::new("E2", "서울대학교", EntityType::Organization),
            ],
            relations: vec![Relation::new("E1", "E2", "소속")
                .with_sentence("김민수 교수는 서울대학교 소속이다.")],
        }
    }

    #[test]
    fn test_format_tags_round_trip() {
        for format in ExportFormat::ALL {
            assert_eq!(ExportFormat::parse(format.tag()), Some(format));
        }
        assert_eq!(ExportFormat::parse("xlsx"), None);
    }

    #[test]
    fn test_entities_csv_has_bom_and_rows() {
        let csv = entities_csv(&sample_result()).unwrap();
        assert!(csv.starts_with(UTF8_BOM));

        let mut lines = csv.trim_start_matches(UTF8_BOM).lines();
        assert_eq!(lines.next(), Some("id,name,type,description"));
        assert_eq!(lines.next(), Some("E1,김민수,PERSON,서울대학교 컴퓨터공학과 교수"));
        assert_eq!(lines.next(), Some("E2,서울대학교,ORGANIZATION,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_relations_csv() {
        let csv = relations_csv(&sample_result()).unwrap();
        assert!(csv.contains("source,target,relation,sentence"));
        assert!(csv.contains("E1,E2,소속,김민수 교수는 서울대학교 소속이다."));
    }

    #[test]
    fn test_relations_with_info_joins_endpoints() {
        let csv = relations_with_info_csv(&sample_result()).unwrap();
        let body = csv.trim_start_matches(UTF8_BOM);
        let mut lines = body.lines();
        assert_eq!(
            lines.next(),
            Some("source_id,source_name,source_type,target_id,target_name,target_type,relation,sentence")
        );
        assert_eq!(
            lines.next(),
            Some("E1,김민수,PERSON,E2,서울대학교,ORGANIZATION,소속,김민수 교수는 서울대학교 소속이다.")
        );
    }

    #[test]
    fn test_relations_with_info_blanks_dangling_endpoint() {
        let mut result = sample_result();
        result.relations.push(Relation::new("E1", "E9", "언급"));
        let csv = relations_with_info_csv(&result).unwrap();
        assert!(csv.contains("E1,김민수,PERSON,E9,,,언급,"));
    }

    #[test]
    fn test_empty_result_exports_headers_only() {
        let empty = ExtractionResult::new();
        let csv = entities_csv(&empty).unwrap();
        assert_eq!(csv.trim_start_matches(UTF8_BOM).trim(), "id,name,type,description");
        assert_eq!(jsonl_payload(&empty).unwrap(), "");
    }

    #[test]
    fn test_json_round_trips() {
        let result = sample_result();
        let payload = json_payload(&result).unwrap();
        assert!(payload.contains("김민수"));
        assert!(!payload.contains("\\uae40"));

        let back: ExtractionResult = serde_json::from_str(&payload).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_jsonl_orders_entities_before_relations() {
        let payload = jsonl_payload(&sample_result()).unwrap();
        let lines: Vec<&str> = payload.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "entity");
        assert_eq!(first["data"]["id"], "E1");

        let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last["type"], "relation");
        assert_eq!(last["data"]["relation"], "소속");
    }

    #[test]
    fn test_html_is_self_contained_page() {
        let html = html_payload(&sample_result()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("vis-network.min.js"));
        assert!(html.contains("김민수"));
        assert!(html.contains("height: 800px"));
        assert!(!html.contains("{nodes_json}"));
    }

    #[test]
    fn test_export_dispatch_matches_direct_calls() {
        let result = sample_result();
        assert_eq!(
            export(&result, ExportFormat::Json).unwrap(),
            json_payload(&result).unwrap()
        );
        assert_eq!(
            export(&result, ExportFormat::EntitiesCsv).unwrap(),
            entities_csv(&result).unwrap()
        );
    }
}
