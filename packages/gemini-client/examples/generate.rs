//! Basic Gemini client usage example

use gemini_client::{Content, GeminiClient, GenerateRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = GeminiClient::from_env()?;

    println!("=== Generate Content ===");
    let response = client
        .generate_content(
            GenerateRequest::new("models/gemini-1.5-pro")
                .content(Content::user("러스트(Rust)를 한 문장으로 설명해주세요."))
                .temperature(0.2)
                .max_output_tokens(256),
        )
        .await?;

    println!("Response: {}", response.text);

    if let Some(usage) = response.usage {
        println!(
            "Tokens: prompt={} candidates={} total={}",
            usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
        );
    }

    Ok(())
}
