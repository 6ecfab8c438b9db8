//! HTTP client for the Amadeus self-service API

use crate::api::auth::TokenProvider;
use crate::config::ResolvedApiConfig;
use crate::error::{ApiError, ConfigError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Amadeus API client.
///
/// Every call fetches its own bearer token through the [`TokenProvider`] and
/// drops it once the request completes. The client itself only holds
/// immutable configuration and the reqwest connection pool, so a single
/// instance can be shared across concurrent tool invocations.
#[derive(Debug, Clone)]
pub struct AmadeusClient {
    http: Client,
    base_url: String,
    tokens: TokenProvider,
}

impl AmadeusClient {
    /// Create a new client from resolved API config
    pub fn new(config: &ResolvedApiConfig) -> Result<Self> {
        config.validate().map_err(|message| ConfigError::InvalidValue {
            field: "api".to_string(),
            value: message,
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let tokens = TokenProvider::new(http.clone(), &config.base_url, config.credentials.clone());

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            tokens,
        })
    }

    /// Token provider bound to the configured credentials
    pub fn tokens(&self) -> &TokenProvider {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticated GET decoding the JSON body into `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let token = self.tokens.fetch_access_token().await?;
        debug!(path, params = query.len(), "GET");

        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token.as_str())
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(rejection(response).await.into());
        }

        decode_body(path, response).await
    }

    /// Authenticated JSON POST decoding the JSON body into `T`
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.tokens.fetch_access_token().await?;
        debug!(path, "POST");

        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token.as_str())
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(rejection(response).await.into());
        }

        decode_body(path, response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-success response into an upstream rejection, keeping the
/// provider payload. Bodies that are not JSON are kept as a string.
pub(crate) async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return ApiError::from(e),
    };

    let payload = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
    let message = serde_json::to_string_pretty(&payload).unwrap_or_default();

    ApiError::Rejection {
        status,
        message,
        payload,
    }
}

/// Decode a success body, reporting shape mismatches as mapping failures
pub(crate) async fn decode_body<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(ApiError::from)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::mapping(endpoint, e.to_string()).into())
}
