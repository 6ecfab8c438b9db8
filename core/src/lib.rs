//! # hotel-tools Core
//!
//! Core library for hotel-tools: Amadeus hotel search, listing and booking
//! exposed as self-describing tools for LLM function calling.
//!
//! Every tool fetches a fresh client-credentials token, performs one HTTP
//! request and reshapes the response. Failures come back as a structured
//! [`tools::ToolOutcome::Failure`] instead of an `Err`.

// Core modules
pub mod api;
pub mod config;
pub mod error;
pub mod tools;

// Re-export commonly used types
pub use api::{AccessToken, AmadeusClient, TokenProvider};
pub use config::{Credentials, ResolvedApiConfig};
pub use tools::{ToolCall, ToolExecutor, ToolRegistry, ToolResult};

/// Current version of the hotel-tools-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library. Logs go to stderr so tool output on
/// stdout stays machine-readable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
