//! Tools listing command

use anyhow::Result;
use hotel_tools_core::ToolRegistry;
use tracing::info;

/// Show available tools
pub async fn tools_command() -> Result<()> {
    info!("Listing available tools");

    let registry = ToolRegistry::default();

    for name in registry.list_tools() {
        if let Some((tool_name, description)) = registry.get_tool_info(name) {
            println!("{}", tool_name);
            println!("    {}\n", description);
        }
    }

    Ok(())
}
