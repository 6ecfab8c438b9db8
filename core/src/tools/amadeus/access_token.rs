//! Client-credentials exchange exposed as a tool

use crate::api::AmadeusClient;
use crate::config::Credentials;
use crate::error::Result;
use crate::impl_tool_factory;
use crate::tools::amadeus::require_non_empty;
use crate::tools::{Tool, ToolCall, ToolExample, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
struct AccessTokenArgs {
    client_id: String,
    client_secret: String,
}

/// Requests an access token with the credentials supplied in the call. The
/// configured credentials are not used here.
pub struct AccessTokenTool {
    api: Arc<AmadeusClient>,
}

impl AccessTokenTool {
    pub fn new(api: Arc<AmadeusClient>) -> Self {
        Self { api }
    }

    /// JSON schema of the arguments
    pub fn parameters() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "client_id": {
                    "type": "string",
                    "description": "The client ID for the Amadeus API."
                },
                "client_secret": {
                    "type": "string",
                    "description": "The client secret for the Amadeus API."
                }
            },
            "required": ["client_id", "client_secret"]
        })
    }
}

#[async_trait]
impl Tool for AccessTokenTool {
    fn name(&self) -> &str {
        "request_access_token"
    }

    fn description(&self) -> &str {
        "Request an access token from the Amadeus API using client credentials."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        Self::parameters()
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let args: AccessTokenArgs = call.arguments()?;
        require_non_empty("client_id", &args.client_id)?;
        require_non_empty("client_secret", &args.client_secret)?;

        let credentials = Credentials::new(args.client_id, args.client_secret);
        info!(client_id = %credentials.client_id, "Exchanging caller-supplied credentials");

        let response = self.api.tokens().exchange(&credentials).await?;
        Ok(ToolResult::success(&call.id, serde_json::to_value(response)?))
    }

    fn examples(&self) -> Vec<ToolExample> {
        vec![ToolExample {
            description: "Exchange an application's API key and secret for a bearer token".to_string(),
            parameters: json!({
                "client_id": "your-api-key",
                "client_secret": "your-api-secret"
            }),
            expected_result: "Token endpoint response including access_token and expires_in".to_string(),
        }]
    }
}

impl_tool_factory!(
    AccessTokenToolFactory,
    AccessTokenTool,
    "request_access_token",
    "Request an access token from the Amadeus API using client credentials."
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedApiConfig;
    use crate::tools::{FailureKind, ToolExecutor, ToolOutcome};

    fn executor() -> ToolExecutor {
        let config = ResolvedApiConfig::new(
            "http://127.0.0.1:9".to_string(),
            Credentials::new("id", "secret"),
        );
        let mut executor = ToolExecutor::new();
        executor.register_tool(Box::new(AccessTokenTool::new(Arc::new(
            AmadeusClient::new(&config).unwrap(),
        ))));
        executor
    }

    #[tokio::test]
    async fn test_blank_credentials_are_rejected_locally() {
        let result = executor()
            .execute(ToolCall::new(
                "request_access_token",
                json!({ "client_id": "  ", "client_secret": "s" }),
            ))
            .await;

        match result.outcome {
            ToolOutcome::Failure(failure) => {
                assert_eq!(failure.kind, FailureKind::InvalidArguments);
                assert!(failure.message.contains("client_id"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_secret_is_rejected() {
        let result = executor()
            .execute(ToolCall::new("request_access_token", json!({ "client_id": "id" })))
            .await;
        assert!(!result.is_success());
    }
}
