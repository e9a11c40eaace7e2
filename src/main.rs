//! Example entry point: analyze a fixed local image with the Groq vision model
//! and print the result mapping.
//!
//! Requires `GROQ_API_KEY` in the environment or a `.env` file; aborts at
//! startup if it is missing. All request failures are returned as data in the
//! mapping, never as a crash.

use groq_vision::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = GroqConfig::from_env()?;
    let client = GroqClient::with_config(config);

    let result = client
        .process_image("test.png", "What are the elements in this picture?")
        .await;

    println!("{:?}", result);
    Ok(())
}
