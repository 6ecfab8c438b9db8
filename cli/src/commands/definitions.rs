//! Function-calling definitions command

use anyhow::Result;
use hotel_tools_core::ToolRegistry;

/// Print the JSON function definitions of every tool
pub async fn definitions_command() -> Result<()> {
    let definitions = ToolRegistry::default().definitions();

    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(())
}
