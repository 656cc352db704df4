//! # API Configuration
//!
//! Where the storefront API lives and whether to use it at all.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FRESHCART_BASE_URL=https://...                                     │
//! │     FRESHCART_USE_MOCK=true                                            │
//! │     FRESHCART_TIMEOUT_SECS=10                                          │
//! │     FRESHCART_MOCK_LATENCY=false                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/freshcart/api.toml (Linux)                               │
//! │     ~/Library/Application Support/com.freshcart.freshcart/api.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Shared sandbox endpoint, live API, 30 s timeout                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # api.toml
//! base_url = "https://mobile-coding-challenge-api-5.free.beeceptor.com"
//! use_mock = false
//! request_timeout_secs = 30
//! mock_latency = true
//! ```
//!
//! The sandbox endpoints are rate limited (HTTP 429 once the monthly quota is
//! spent). Set `use_mock = true` to run against the in-memory catalog instead.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Shared sandbox endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://mobile-coding-challenge-api-5.free.beeceptor.com";

/// Predefined endpoints a settings screen can offer.
const KNOWN_ROUTES: [ApiRoute; 2] = [
    ApiRoute {
        name: "Primary API endpoint",
        url: "https://mobile-coding-challenge-api.free.beeceptor.com",
        description: "Primary API endpoint",
    },
    ApiRoute {
        name: "Alternative API endpoint",
        url: "https://mobile-coding-challenge-api-8.free.beeceptor.com",
        description: "Alternative API endpoint",
    },
];

// =============================================================================
// API Route
// =============================================================================

/// A named, predefined API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiRoute {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

// =============================================================================
// API Config
// =============================================================================

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

/// Transport configuration for the remote gateway.
///
/// ## Invariants
/// - `base_url` never ends with `/` (stripped on construction, load, and set)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root; endpoints are appended as `{base_url}/storeInfo` etc.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Use the in-memory mock gateway instead of HTTP.
    #[serde(default)]
    pub use_mock: bool,

    /// Whole-request timeout for the HTTP gateway.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Whether the mock gateway simulates network latency.
    #[serde(default = "default_true")]
    pub mock_latency: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            use_mock: false,
            request_timeout_secs: default_request_timeout(),
            mock_latency: true,
        }
    }
}

impl ApiConfig {
    /// Creates a config for `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>, use_mock: bool) -> Self {
        let mut config = Self {
            use_mock,
            ..Self::default()
        };
        config.set_base_url(base_url);
        config
    }

    /// Mock gateway config. Latency stays on.
    pub fn mock() -> Self {
        Self {
            use_mock: true,
            ..Self::default()
        }
    }

    /// The API root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replaces the API root, stripping trailing slashes.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
    }

    /// The predefined sandbox endpoints.
    pub fn known_routes() -> &'static [ApiRoute] {
        &KNOWN_ROUTES
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (api.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading API config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();

        // Files may carry a trailing slash
        let base_url = std::mem::take(&mut config.base_url);
        config.set_base_url(base_url);

        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load API config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::SaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        info!(?path, "API config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let parsed = url::Url::parse(&self.base_url)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "Base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("FRESHCART_BASE_URL") {
            debug!(url = %url, "Overriding base URL from environment");
            self.set_base_url(url);
        }

        if let Some(flag) = lookup("FRESHCART_USE_MOCK") {
            match parse_flag(&flag) {
                Some(use_mock) => self.use_mock = use_mock,
                None => warn!(value = %flag, "Ignoring FRESHCART_USE_MOCK"),
            }
        }

        if let Some(secs) = lookup("FRESHCART_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => warn!(value = %secs, "Ignoring FRESHCART_TIMEOUT_SECS"),
            }
        }

        if let Some(flag) = lookup("FRESHCART_MOCK_LATENCY") {
            match parse_flag(&flag) {
                Some(latency) => self.mock_latency = latency,
                None => warn!(value = %flag, "Ignoring FRESHCART_MOCK_LATENCY"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "freshcart", "freshcart")
            .map(|dirs| dirs.config_dir().join("api.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
