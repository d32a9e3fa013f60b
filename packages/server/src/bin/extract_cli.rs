//! CLI for one-shot extraction runs
//!
//! Reads Korean text from a file (or the built-in sample article), runs a
//! single Gemini extraction, and writes every export format into an output
//! directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kgraph::{
    export, ExportFormat, Extractor, GeminiCredentials, GeminiExtractor, GraphStats,
    DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "extract_cli")]
#[command(about = "Extract a Korean knowledge graph from text and export it")]
struct Cli {
    /// Input text file (UTF-8). Uses the built-in sample article when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Gemini API key. Falls back to the GOOGLE_API_KEY environment variable.
    #[arg(long)]
    api_key: Option<String>,

    /// Gemini model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Directory for the export files
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => kgraph::SAMPLE_TEXT.to_string(),
    };

    let api_key = cli
        .api_key
        .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())
        .context("No API key: pass --api-key or set GOOGLE_API_KEY")?;

    let credentials = GeminiCredentials::new(api_key)
        .with_model(&cli.model)
        .with_temperature(cli.temperature);
    let extractor = GeminiExtractor::new(&credentials)?;

    println!("모델: {}", cli.model);
    println!("지식 그래프를 생성하는 중입니다...");
    let result = extractor.extract(&text).await?;

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create {}", cli.output_dir.display()))?;
    for format in ExportFormat::ALL {
        let payload = export(&result, format)?;
        let path = cli.output_dir.join(format.filename());
        fs::write(&path, payload)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("저장: {}", path.display());
    }

    let stats = GraphStats::from_result(&result);
    println!("개체 수: {}", stats.entity_count);
    println!("관계 수: {}", stats.relation_count);
    println!("그래프 밀도: {:.4}", stats.density);

    Ok(())
}
