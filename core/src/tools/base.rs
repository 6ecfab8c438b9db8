//! Base tool traits and structures

use crate::error::{ApiError, Error, Result, ToolError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// Trait for all tools
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of the tool
    fn name(&self) -> &str;

    /// Get the description of the tool
    fn description(&self) -> &str;

    /// Get the JSON schema for the tool's parameters
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with the given parameters
    async fn execute(&self, call: ToolCall) -> Result<ToolResult>;

    /// Get examples of how to use this tool
    fn examples(&self) -> Vec<ToolExample> {
        Vec::new()
    }

    /// Descriptor handed to LLM function calling
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.name(), self.description(), self.parameters_schema())
    }
}

/// Tool definition in the function-calling format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

impl ToolDefinition {
    pub fn function<N: Into<String>, D: Into<String>>(
        name: N,
        description: D,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A call to a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,

    /// Name of the tool to call
    pub name: String,

    /// Parameters to pass to the tool
    pub parameters: serde_json::Value,
}

/// Result of a tool execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// ID of the tool call this is a result for
    pub tool_call_id: String,

    /// What the tool produced
    pub outcome: ToolOutcome,

    /// Execution duration in milliseconds
    pub duration_ms: Option<u64>,
}

/// Success payload or structured failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ToolOutcome {
    Success(serde_json::Value),
    Failure(ToolFailure),
}

/// Failure categories surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request never completed
    Transport,
    /// The upstream answered with a non-success status
    UpstreamRejection,
    /// A success response did not have the expected shape
    Mapping,
    /// Arguments did not match the tool schema
    InvalidArguments,
    /// Local configuration is incomplete
    Configuration,
    /// No tool with the requested name
    ToolNotFound,
    /// Anything else
    Internal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFailure {
    pub kind: FailureKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Provider payload for upstream rejections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

/// Example usage of a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolExample {
    /// Description of what this example does
    pub description: String,

    /// Example parameters
    pub parameters: serde_json::Value,

    /// Expected result description
    pub expected_result: String,
}

/// Tool executor that manages tool execution
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new<S: Into<String>>(name: S, parameters: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            parameters,
        }
    }

    /// Decode the whole parameter object into a typed argument struct
    pub fn arguments<T: DeserializeOwned>(&self) -> Result<T> {
        let parameters = if self.parameters.is_null() {
            json!({})
        } else {
            self.parameters.clone()
        };

        serde_json::from_value(parameters).map_err(|e| {
            ToolError::InvalidParameters {
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl ToolResult {
    /// Create a successful result
    pub fn success<S: Into<String>>(tool_call_id: S, data: serde_json::Value) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            outcome: ToolOutcome::Success(data),
            duration_ms: None,
        }
    }

    /// Create a failed result
    pub fn failure<S: Into<String>>(tool_call_id: S, failure: ToolFailure) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            outcome: ToolOutcome::Failure(failure),
            duration_ms: None,
        }
    }

    /// Set execution duration
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ToolOutcome::Success(_))
    }

    /// The shape handed back to the agent: the payload itself on success,
    /// `{"error": {...}}` on failure.
    pub fn to_envelope(&self) -> serde_json::Value {
        match &self.outcome {
            ToolOutcome::Success(data) => data.clone(),
            ToolOutcome::Failure(failure) => json!({ "error": failure }),
        }
    }
}

impl ToolFailure {
    pub fn new<S: Into<String>>(kind: FailureKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            detail: None,
        }
    }
}

impl From<&Error> for ToolFailure {
    fn from(err: &Error) -> Self {
        match err {
            Error::Api(ApiError::Transport { message }) => {
                ToolFailure::new(FailureKind::Transport, message.clone())
            }
            Error::Api(ApiError::Rejection {
                status,
                message,
                payload,
            }) => ToolFailure {
                kind: FailureKind::UpstreamRejection,
                message: message.clone(),
                status: Some(*status),
                detail: Some(payload.clone()),
            },
            Error::Api(mapping @ ApiError::Mapping { .. }) => {
                ToolFailure::new(FailureKind::Mapping, mapping.to_string())
            }
            Error::Tool(ToolError::InvalidParameters { message }) => {
                ToolFailure::new(FailureKind::InvalidArguments, message.clone())
            }
            Error::Tool(not_found @ ToolError::NotFound { .. }) => {
                ToolFailure::new(FailureKind::ToolNotFound, not_found.to_string())
            }
            Error::Config(config) => {
                ToolFailure::new(FailureKind::Configuration, config.to_string())
            }
            Error::Serialization(err) => ToolFailure::new(FailureKind::Internal, err.to_string()),
        }
    }
}

/// Run a tool and fold any error into a failure result. Nothing escapes as
/// an `Err`.
pub async fn invoke_tool(tool: &dyn Tool, call: ToolCall) -> ToolResult {
    let start_time = Instant::now();
    let call_id = call.id.clone();
    let name = tool.name().to_string();

    info!(tool = %name, call_id = %call_id, "Invoking tool");
    let result = tool.execute(call).await;
    let duration = start_time.elapsed().as_millis() as u64;

    match result {
        Ok(result) => {
            info!(tool = %name, duration_ms = duration, success = result.is_success(), "Tool finished");
            result.with_duration(duration)
        }
        Err(e) => {
            error!(tool = %name, call_id = %call_id, error = %e, "Tool failed");
            ToolResult::failure(call_id, ToolFailure::from(&e)).with_duration(duration)
        }
    }
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// List all available tools, sorted by name
    pub fn list_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool call
    pub async fn execute(&self, call: ToolCall) -> ToolResult {
        match self.get_tool(&call.name) {
            Some(tool) => invoke_tool(tool, call).await,
            None => {
                let err: Error = ToolError::NotFound {
                    name: call.name.clone(),
                }
                .into();
                error!(tool = %call.name, "Unknown tool requested");
                ToolResult::failure(call.id, ToolFailure::from(&err))
            }
        }
    }

    /// Get tool definitions for LLM function calling
    pub fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        self.list_tools()
            .into_iter()
            .filter_map(|name| self.get_tool(name))
            .map(|tool| tool.definition())
            .collect()
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}
