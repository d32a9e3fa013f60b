// Korean Knowledge Graph Extractor - API Core
//
// This crate provides the web front end for the extraction pipeline: it
// serves the single-page UI, takes one text submission per request, runs
// the Gemini extraction through the `kgraph` library, and hands back the
// graph view, stats, and export payloads.

pub mod config;
pub mod deps;
pub mod error;
pub mod server;

pub use config::*;
pub use deps::{AppState, ExtractorProvider, GeminiProvider};
pub use error::ApiError;
