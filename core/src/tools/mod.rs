//! Tool system and the Amadeus hotel tools

pub mod amadeus;
pub mod base;
pub mod registry;

pub use base::{
    invoke_tool, FailureKind, FunctionDefinition, Tool, ToolCall, ToolDefinition, ToolExample,
    ToolExecutor, ToolFailure, ToolOutcome, ToolResult,
};
pub use registry::{ToolFactory, ToolRegistry};
