//! Chat with the message router from the terminal.
//!
//! Run with: cargo run -p message-router --example console_bot
//!
//! Uses MistralBrain when MISTRAL_API_KEY is set (from the environment or
//! .env), otherwise an echo brain so the canned replies can be tried offline.

use std::sync::Arc;

use message_router::{Brain, MessageRouter};
use mistral_brain::MistralBrain;
use mock_brain::EchoBrain;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let brain: Arc<dyn Brain> = match MistralBrain::from_env() {
        Ok(brain) => Arc::new(brain),
        Err(err) => {
            println!("MistralBrain unavailable ({}), echoing instead", err);
            Arc::new(EchoBrain::with_prefix("[echo] "))
        }
    };

    let router = MessageRouter::new(brain);
    println!("Using {}. Type a message, Ctrl-D to quit.\n", router.brain_name());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let reply = router.route(&line, Some("console")).await;
        println!("{}\n", reply);
    }

    router.shutdown().await?;
    Ok(())
}
