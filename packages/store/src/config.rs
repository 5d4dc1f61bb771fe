//! # Application configuration — `jobfair.toml`
//!
//! Everything the client needs to know that is not code: where the backend
//! lives, which storage key holds the session credential, and the fixed
//! public/protected route table the session guard enforces.
//!
//! ## Structure
//!
//! ```toml
//! [session]
//! token_key = "token"
//!
//! [routes]
//! public = ["/", "/login", "/register", "/enroll"]
//! authenticated_home = "/company"
//! login = "/login"
//!
//! [api]
//! backend_url = "http://localhost:5000/api/v1"
//! ```
//!
//! Every section and field has a default, so a missing or empty file is the
//! default configuration. The backend URL default can be overridden at build
//! time with the `JOBFAIR_BACKEND_URL` environment variable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const FALLBACK_BACKEND_URL: &str = "http://localhost:5000/api/v1";

/// Top-level configuration stored in `jobfair.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobfairConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Where the session credential is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

/// Route classification table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Paths reachable without a credential. Everything else is protected.
    #[serde(default = "default_public_routes")]
    pub public: Vec<String>,
    /// Landing path for authenticated users who hit a public page.
    #[serde(default = "default_authenticated_home")]
    pub authenticated_home: String,
    /// Landing path for unauthenticated users who hit a protected page.
    #[serde(default = "default_login")]
    pub login: String,
}

/// Backend REST API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_token_key() -> String {
    "token".to_string()
}

fn default_public_routes() -> Vec<String> {
    ["/", "/login", "/register", "/enroll"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_authenticated_home() -> String {
    "/company".to_string()
}

fn default_login() -> String {
    "/login".to_string()
}

fn default_backend_url() -> String {
    option_env!("JOBFAIR_BACKEND_URL")
        .unwrap_or(FALLBACK_BACKEND_URL)
        .to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            public: default_public_routes(),
            authenticated_home: default_authenticated_home(),
            login: default_login(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
        }
    }
}

impl JobfairConfig {
    /// Builder method to point the client at another backend.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.api.backend_url = url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "jobfair.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
