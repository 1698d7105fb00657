//! Send one message to MistralBrain and print the reply.
//!
//! Run with: cargo run -p mistral-brain --example test_chat
//! Or with a custom message: cargo run -p mistral-brain --example test_chat -- "Route 500K?"
//!
//! Make sure to set environment variables in .env:
//!   MISTRAL_API_KEY - Mistral API key for authentication

use mistral_brain::{Brain, InboundMessage, MistralBrain};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "When is the next bus from Majestic to Hebbal?".to_string()
    };

    let brain = MistralBrain::from_env()?;

    println!("Brain initialized: {}", brain.name());
    println!("API URL: {}", brain.config().api_url);
    println!("Model: {}", brain.config().model);
    println!("Prompt fingerprint: {}", brain.system_prompt_hash());
    println!();

    let message = InboundMessage::from_sender("whatsapp:+910000000000", &message_text);

    println!("Sending: \"{}\"", message.text);
    println!("Waiting for response...\n");

    let response = brain.process(message).await?;

    println!("=== Response ===");
    println!("{}", response.text);
    println!("================");

    Ok(())
}
