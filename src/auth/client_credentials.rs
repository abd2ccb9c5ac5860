//! Client-credentials token acquisition.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    auth::TokenProvider,
    client::query,
    config::AuthConfig,
    error::{ErrorCode, ErrorDetail, Result, SdkError},
};

/// Token provider performing a client-credentials exchange per request.
///
/// Issues one POST to `<auth_url>/oauth/token` with HTTP basic credentials
/// and parses the `access_token` from the JSON body. Deliberately does not
/// cache or refresh tokens; applications that want a token lifecycle wrap
/// this provider or supply their own [`TokenProvider`].
#[derive(Debug, Clone)]
pub struct ClientCredentialsProvider {
    auth: AuthConfig,
    http: Client,
}

/// Success body of the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Error body of the token endpoint (RFC 6749 shape).
#[derive(Debug, Default, Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

impl ClientCredentialsProvider {
    /// Creates a provider with default transport settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(auth: AuthConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { auth, http })
    }

    /// Creates a provider around an existing `reqwest::Client`.
    pub fn with_http_client(auth: AuthConfig, http: Client) -> Self {
        Self { auth, http }
    }

    fn token_url(&self) -> String {
        let mut url = format!(
            "{}/oauth/token?grant_type=client_credentials",
            self.auth.auth_url.trim_end_matches('/')
        );
        if let Some(scope) = &self.auth.scope {
            url.push_str("&scope=");
            url.push_str(&query::escape(scope));
        }
        url
    }
}

impl TokenProvider for ClientCredentialsProvider {
    #[instrument(skip(self), fields(auth_url = %self.auth.auth_url))]
    async fn access_token(&self) -> Result<String> {
        let response = self
            .http
            .post(self.token_url())
            .basic_auth(&self.auth.client_id, Some(&self.auth.client_secret))
            .send()
            .await
            .map_err(|err| {
                SdkError::AuthenticationFailed(ErrorDetail::general(format!(
                    "token endpoint unreachable: {err}"
                )))
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            SdkError::AuthenticationFailed(ErrorDetail::general(format!(
                "token response interrupted: {err}"
            )))
        })?;

        if !status.is_success() {
            let parsed: TokenErrorResponse = serde_json::from_slice(&body).unwrap_or_default();
            let message = match parsed.error_description {
                Some(description) if !description.is_empty() => description,
                _ if !parsed.error.is_empty() => parsed.error,
                _ => format!("token endpoint returned status {}", status.as_u16()),
            };
            return Err(SdkError::AuthenticationFailed(ErrorDetail::new(
                ErrorCode::InvalidToken,
                message,
            )));
        }

        let parsed: TokenResponse = serde_json::from_slice(&body).map_err(|err| {
            SdkError::AuthenticationFailed(ErrorDetail::general(format!(
                "malformed token response: {err}"
            )))
        })?;
        Ok(parsed.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_config(scope: Option<&str>) -> AuthConfig {
        AuthConfig {
            auth_url: "https://auth.storefront.example".to_owned(),
            client_id: "id".to_owned(),
            client_secret: "secret".to_owned(),
            scope: scope.map(str::to_owned),
        }
    }

    #[test]
    fn test_token_url_without_scope() {
        let provider = ClientCredentialsProvider::new(auth_config(None)).unwrap();
        assert_eq!(
            provider.token_url(),
            "https://auth.storefront.example/oauth/token?grant_type=client_credentials"
        );
    }

    #[test]
    fn test_token_url_escapes_scope() {
        let provider =
            ClientCredentialsProvider::new(auth_config(Some("manage_project:my shop"))).unwrap();
        assert_eq!(
            provider.token_url(),
            "https://auth.storefront.example/oauth/token?grant_type=client_credentials\
             &scope=manage_project:my%20shop"
        );
    }

    #[test]
    fn test_token_url_strips_trailing_slash() {
        let mut config = auth_config(None);
        config.auth_url = "https://auth.storefront.example/".to_owned();
        let provider = ClientCredentialsProvider::new(config).unwrap();
        assert!(provider.token_url().starts_with("https://auth.storefront.example/oauth/token"));
    }
}
