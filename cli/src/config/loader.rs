//! Simple CLI configuration loader for hotel-tools
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./hotel-tools.json or ./.hotel-tools/config.json
//! 3. Git repository root: <repo_root>/.hotel-tools/config.json
//! 4. User config dir: <config_dir>/hotel-tools/config.json
//! 5. Environment variables only (no files)

use anyhow::{anyhow, Context, Result};
use hotel_tools_core::config::DEFAULT_BASE_URL;
use hotel_tools_core::{Credentials, ResolvedApiConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const CLIENT_ID_VARS: [&str; 2] = [
    "AMADEUS_CLIENT_ID",
    "AMADEUS_FOR_DEVELOPERS_S_PUBLIC_WORKSPACE_API_KEY",
];
const CLIENT_SECRET_VARS: [&str; 2] = ["AMADEUS_CLIENT_SECRET", "API_secret"];
const BASE_URL_VAR: &str = "AMADEUS_BASE_URL";

/// Raw configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Base URL (optional, defaults to the Amadeus test environment)
    pub base_url: Option<String>,
    /// Client id (can be "env:VAR_NAME" for environment variable)
    pub client_id: Option<String>,
    /// Client secret (can be "env:VAR_NAME" for environment variable)
    pub client_secret: Option<String>,
    /// Optional HTTP timeout in seconds
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// CLI configuration loader
#[derive(Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    client_id_override: Option<String>,
    client_secret_override: Option<String>,
    base_url_override: Option<String>,
    /// Directory searched instead of the current working directory
    search_root: Option<PathBuf>,
    /// Environment snapshot used instead of the process environment
    environment: Option<HashMap<String, String>>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set client id override
    pub fn with_client_id_override(mut self, client_id: String) -> Self {
        self.client_id_override = Some(client_id);
        self
    }

    /// Set client secret override
    pub fn with_client_secret_override(mut self, client_secret: String) -> Self {
        self.client_secret_override = Some(client_secret);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Search for config files starting from this directory
    pub fn with_search_root(mut self, root: PathBuf) -> Self {
        self.search_root = Some(root);
        self
    }

    /// Read variables from this map instead of the process environment
    pub fn with_environment(mut self, environment: HashMap<String, String>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ResolvedApiConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(client_id) = &self.client_id_override {
            config.client_id = Some(client_id.clone());
        }
        if let Some(client_secret) = &self.client_secret_override {
            config.client_secret = Some(client_secret.clone());
        }
        if let Some(base_url) = &self.base_url_override {
            config.base_url = Some(base_url.clone());
        }

        // Step 3: Resolve to final API config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        let root = match &self.search_root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        // 1. Search root (normally the working directory)
        for candidate in [
            root.join("hotel-tools.json"),
            root.join(".hotel-tools").join("config.json"),
        ] {
            if candidate.exists() {
                return self.load_file(&candidate).await;
            }
        }

        // 2. Git repository root
        if let Some(git_root) = find_git_root(&root) {
            let config_path = git_root.join(".hotel-tools").join("config.json");
            if config_path.exists() {
                return self.load_file(&config_path).await;
            }
        }

        // 3. User config directory, only when searching from the real cwd
        if self.search_root.is_none() {
            if let Some(config_dir) = dirs::config_dir() {
                let config_path = config_dir.join("hotel-tools").join("config.json");
                if config_path.exists() {
                    return self.load_file(&config_path).await;
                }
            }
        }

        // 4. Environment variables only
        debug!("No config file found, using environment variables");
        Ok(self.load_env_only())
    }

    fn load_env_only(&self) -> RawConfig {
        RawConfig {
            base_url: self.var(BASE_URL_VAR),
            client_id: CLIENT_ID_VARS.iter().find_map(|name| self.var(name)),
            client_secret: CLIENT_SECRET_VARS.iter().find_map(|name| self.var(name)),
            request_timeout_secs: None,
        }
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file. Values missing from the file fall back to
    /// the environment.
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!(path = %path.display(), "Loading config file");
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: RawConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let env = self.load_env_only();
        config.base_url = config.base_url.or(env.base_url);
        config.client_id = config.client_id.or(env.client_id);
        config.client_secret = config.client_secret.or(env.client_secret);
        Ok(config)
    }

    fn var(&self, name: &str) -> Option<String> {
        let value = match &self.environment {
            Some(environment) => environment.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Resolve "env:VAR" indirections
    fn resolve_value(&self, field: &str, value: String) -> Result<String> {
        match value.strip_prefix("env:") {
            Some(var_name) => self
                .var(var_name)
                .ok_or_else(|| anyhow!("Environment variable not found for {}: {}", field, var_name)),
            None => Ok(value),
        }
    }

    /// Resolve raw config to ResolvedApiConfig
    fn resolve_config(&self, config: RawConfig) -> Result<ResolvedApiConfig> {
        let client_id = config.client_id.ok_or_else(|| {
            anyhow!(
                "No client id configured. Create a hotel-tools.json file or set {}",
                CLIENT_ID_VARS[0]
            )
        })?;
        let client_secret = config.client_secret.ok_or_else(|| {
            anyhow!(
                "No client secret configured. Create a hotel-tools.json file or set {}",
                CLIENT_SECRET_VARS[0]
            )
        })?;

        let credentials = Credentials::new(
            self.resolve_value("client_id", client_id)?,
            self.resolve_value("client_secret", client_secret)?,
        );
        let base_url = match config.base_url {
            Some(base_url) => self.resolve_value("base_url", base_url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let mut resolved = ResolvedApiConfig::new(base_url, credentials);
        if let Some(secs) = config.request_timeout_secs {
            resolved = resolved.with_request_timeout(secs);
        }

        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

/// Walk up from `start` looking for a `.git` directory
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
