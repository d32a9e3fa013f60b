//! Korean Knowledge-Graph Extraction Library
//!
//! Turns free-form Korean text into a small knowledge graph: named entities,
//! directed relations between them, a renderable graph view, and downloadable
//! renditions (CSV, JSON, JSONL, standalone HTML).
//!
//! # Design Philosophy
//!
//! - One submission is one model call; no retry, no chunking, no partial
//!   results
//! - The model does the linguistics, this library does the mechanics:
//!   prompting, parsing, projection, encoding
//! - Credentials are request-scoped and never cached
//! - Everything downstream of parsing is pure and synchronous
//!
//! # Usage
//!
//! ```rust,ignore
//! use kgraph::{Extractor, GeminiCredentials, GeminiExtractor, GraphView};
//!
//! let credentials = GeminiCredentials::new(api_key);
//! let extractor = GeminiExtractor::new(&credentials)?;
//! let result = extractor.extract("서울 강남구에서 열린 기술 컨퍼런스에서 ...").await?;
//! let view = GraphView::from_result(&result);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Entity and relation records
//! - [`extractor`] - The `Extractor` trait and the Gemini implementation
//! - [`prompt`] / [`parse`] - Prompt construction and completion parsing
//! - [`graph`] - vis-network view-model
//! - [`export`] - Download payload encoders
//! - [`stats`] / [`highlight`] - Result summaries and text highlighting
//! - [`testing`] - Mock implementations for testing

pub mod credentials;
pub mod error;
pub mod export;
pub mod extractor;
pub mod graph;
pub mod highlight;
pub mod parse;
pub mod prompt;
pub mod stats;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use credentials::{
    GeminiCredentials, SecretString, DEFAULT_MODEL, DEFAULT_TEMPERATURE, SUPPORTED_MODELS,
};
pub use error::{ExportError, ExtractionError};
pub use export::{export, ExportFormat};
pub use extractor::{Extractor, GeminiExtractor};
pub use graph::{vis_options, GraphEdge, GraphNode, GraphView};
pub use highlight::highlight_entities;
pub use parse::{extract_json_block, parse_extraction_response};
pub use prompt::{format_extraction_prompt, EXTRACTION_PROMPT};
pub use stats::GraphStats;
pub use types::{Entity, EntityType, ExtractionResult, Relation};

// Re-export testing utilities
pub use testing::{sample_result, MockExtractor, MockFailure};

/// Demo text for the sample button and the CLI's no-input default.
///
/// A synthetic Korean news paragraph dense with people, organizations,
/// places and their relations.
pub const SAMPLE_TEXT: &str = "\
서울 강남구에서 열린 기술 컨퍼런스에서 김민수 교수가 인공지능의 미래에 대한 강연을 했다.
이번 행사는 삼성전자와 네이버가 공동 주최했으며, 약 500명의 전문가들이 참석했다.
김민수 교수는 서울대학교 컴퓨터공학과 소속으로, 인공지능 발전의 윤리적 측면을 강조했다.
네이버의 이기획 부사장은 회사의 새로운 AI 서비스를 소개했으며, 삼성전자의 정기술 상무가 반도체 기술과 AI의 연관성에 대해 발표했다.
행사 후 김민수 교수와 이기획 부사장은 한국 AI 산업의 발전 방향에 대해 토론했다.
토론 중 서울대학교와 네이버의 산학협력 가능성도 언급되었다.
한편, 정부 측에서는 과학기술정보통신부 안장관이 참석하여 인공지능 산업 지원 정책을 발표했다.
안장관은 김민수 교수와 삼성전자의 연구 프로젝트에 정부 지원을 약속했다.
이 행사는 대한민국 AI 기술 발전에 중요한 이정표가 될 것으로 전문가들은 평가했다.";
