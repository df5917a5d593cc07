//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never interleave with the dialogue.

use anyhow::Result;
use contact_assistant::{commands, Assistant, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        lookahead_days = config.lookahead_days,
        greeting_policy = %config.greeting_policy,
        "Starting contact assistant"
    );

    let mut assistant = Assistant::new(config);
    let stdin = io::stdin();
    commands::run(&mut assistant, stdin.lock(), io::stdout().lock())?;

    info!(contacts = assistant.book().len(), "Session closed");
    Ok(())
}
