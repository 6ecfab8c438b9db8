//! Single tool invocation command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use hotel_tools_core::{AmadeusClient, ToolCall, ToolRegistry, ToolResult};
use std::sync::Arc;
use tracing::debug;

/// Invoke one tool and print its envelope to stdout.
///
/// Returns the tool result so the caller can pick the exit code.
pub async fn call_command(
    config_loader: CliConfigLoader,
    tool: String,
    args: String,
) -> Result<ToolResult> {
    let parameters: serde_json::Value = serde_json::from_str(&args)
        .with_context(|| format!("--args is not valid JSON: {}", args))?;

    let config = config_loader.load().await?;
    debug!(base_url = %config.base_url, tool = %tool, "Calling tool");

    let api = Arc::new(AmadeusClient::new(&config)?);
    let executor = ToolRegistry::default().create_executor_with_all(api);

    let result = executor.execute(ToolCall::new(tool, parameters)).await;
    println!("{}", serde_json::to_string_pretty(&result.to_envelope())?);

    Ok(result)
}
