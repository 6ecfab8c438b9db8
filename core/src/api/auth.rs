//! OAuth2 client-credentials token exchange

use crate::api::client::{decode_body, rejection};
use crate::config::Credentials;
use crate::error::{ApiError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Path of the token endpoint relative to the API base URL
pub const TOKEN_PATH: &str = "/v1/security/oauth2/token";

/// Opaque bearer token, used for a single downstream request
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Decoded body of a successful token exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Fields the provider adds that we do not model
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
}

/// Exchanges client credentials for bearer tokens. Nothing is cached.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    http: Client,
    token_url: String,
    credentials: Credentials,
}

impl TokenProvider {
    pub fn new(http: Client, base_url: &str, credentials: Credentials) -> Self {
        Self {
            http,
            token_url: format!("{}{}", base_url.trim_end_matches('/'), TOKEN_PATH),
            credentials,
        }
    }

    /// Fetch a fresh access token using the configured credentials
    pub async fn fetch_access_token(&self) -> Result<AccessToken> {
        let response = self.exchange(&self.credentials).await?;
        if response.access_token.is_empty() {
            return Err(ApiError::mapping(TOKEN_PATH, "access_token is empty").into());
        }
        Ok(AccessToken(response.access_token))
    }

    /// Perform a client-credentials exchange with explicit credentials and
    /// return the full decoded response
    pub async fn exchange(&self, credentials: &Credentials) -> Result<TokenResponse> {
        debug!(client_id = %credentials.client_id, "Requesting access token");

        let form = TokenRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: "client_credentials",
        };

        let response = self
            .http
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(rejection(response).await.into());
        }

        decode_body(TOKEN_PATH, response).await
    }
}
