//! Structured logging and token redaction utilities.
//!
//! This module configures the `tracing` ecosystem for binaries built on the
//! client, and keeps Contentful credentials out of log output.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{ContentfulError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line output.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| ContentfulError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Redacts credentials from a string before it is logged.
///
/// Handles two patterns:
/// - `Bearer <token>` authorization values
/// - Contentful personal access tokens (`CFPAT-...`)
pub fn sanitize(input: &str) -> String {
    let mut result = redact_after(input, "Bearer ", "Bearer [REDACTED_TOKEN]");
    result = redact_after(&result, "CFPAT-", "[REDACTED_PAT]");
    result
}

// Replace every token that follows `marker` (up to whitespace or a quote).
fn redact_after(input: &str, marker: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(marker) {
        let token_start = pos + marker.len();
        let token_len = rest[token_start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
            .unwrap_or(rest.len() - token_start);

        out.push_str(&rest[..pos]);
        out.push_str(replacement);
        rest = &rest[token_start + token_len..];
    }

    out.push_str(rest);
    out
}
