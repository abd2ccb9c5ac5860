//! Client configuration.
//!
//! The SDK takes an explicit, immutable [`ClientConfig`] at client
//! construction time. There is no process-wide configuration singleton: every
//! [`ApiClient`](crate::client::ApiClient) owns the configuration it was
//! built with, and concurrent clients with different configurations do not
//! interfere.
//!
//! Configuration is plain data and can be deserialized from TOML:
//!
//! ```
//! use storefront_sdk::config::ClientConfig;
//!
//! let config = ClientConfig::from_toml(
//!     r#"
//!     project_key = "my-shop"
//!     api_url = "https://api.storefront.example"
//!
//!     [auth]
//!     auth_url = "https://auth.storefront.example"
//!     client_id = "client-id"
//!     client_secret = "client-secret"
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;
use url::Url;

use crate::error::{Result, SdkError};

/// Immutable configuration for one API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Project identifier, the first path segment of every request.
    pub project_key: String,
    /// Base URL of the REST API, e.g. `https://api.storefront.example`.
    pub api_url: String,
    /// Credentials for the authorization server. Optional: clients using an
    /// externally managed token source do not need it.
    #[serde(default)]
    pub auth: Option<AuthConfig>,
}

/// Authorization-server settings for client-credentials token acquisition.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the authorization server.
    pub auth_url: String,
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Optional scope requested with the token.
    #[serde(default)]
    pub scope: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration without auth credentials.
    pub fn new(project_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self { project_key: project_key.into(), api_url: api_url.into(), auth: None }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::ConfigurationInvalid`] if the TOML is malformed or
    /// missing required fields.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| SdkError::ConfigurationInvalid(err.to_string()))
    }

    /// Checks that the configuration can back API requests.
    ///
    /// The dispatcher calls this before touching the network; a client built
    /// with an invalid configuration fails every operation with
    /// [`SdkError::ConfigurationInvalid`] instead of issuing requests.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::ConfigurationInvalid`] if the project key is
    /// empty, a URL does not parse as http(s), or the auth section is
    /// present but incomplete.
    pub fn validate(&self) -> Result<()> {
        if self.project_key.is_empty() {
            return Err(SdkError::ConfigurationInvalid(
                "project_key must not be empty".to_owned(),
            ));
        }
        validate_http_url("api_url", &self.api_url)?;
        if let Some(auth) = &self.auth {
            validate_http_url("auth_url", &auth.auth_url)?;
            if auth.client_id.is_empty() {
                return Err(SdkError::ConfigurationInvalid(
                    "auth.client_id must not be empty".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|err| SdkError::ConfigurationInvalid(format!("{field} is not a URL: {err}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(SdkError::ConfigurationInvalid(format!(
            "{field} must use http or https, got {}",
            url.scheme()
        )));
    }
    Ok(())
}
