//! Invoke the skill once on a JSON request and print the response envelope.
//!
//! Usage:
//!   cargo run --bin skill-invoke -- fixtures/launch_request.json
//!   echo '{"type":"LaunchRequest","locale":"en"}' | cargo run --bin skill-invoke
//!
//! Accepts a full platform envelope or a bare request.
//!
//! Optional environment variables:
//! - SKILL_INTENT_NAME (defaults to menbre)
//! - LOCALES_FILE

use anyhow::{Context, Result};
use menbre_skill::config::Config;
use menbre_skill::envelope::{InboundEnvelope, ResponseEnvelope};
use std::io::Read;
use tracing::info;

fn read_input(path: Option<String>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read request from stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("menbre_skill=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let skill = config.build_skill()?;

    let input = read_input(std::env::args().nth(1))?;
    let inbound: InboundEnvelope =
        serde_json::from_str(&input).context("Input is not a skill request")?;
    let request = inbound.into_request();

    info!("Invoking skill with {}", request.request_type);
    let response = skill.dispatch(&request);

    let envelope = ResponseEnvelope::from(&response);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
