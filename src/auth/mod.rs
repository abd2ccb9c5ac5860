//! Token acquisition.
//!
//! The dispatcher never owns credentials. It asks a [`TokenProvider`] for a
//! bearer token once per request, borrows the token for that single request,
//! and never persists it. Providers decide where tokens come from: a fixed
//! string ([`StaticTokenProvider`]), a one-shot client-credentials exchange
//! ([`ClientCredentialsProvider`]), or an application-supplied source.

use crate::error::Result;

mod client_credentials;

pub use client_credentials::ClientCredentialsProvider;

/// Asynchronous source of bearer tokens.
///
/// `access_token` is the single suspension point of the request pipeline
/// before the network round trip. A provider failure aborts the request
/// before any HTTP call is made; the provider's error resolves the caller's
/// `Result` directly.
pub trait TokenProvider: Send + Sync {
    /// Resolves a valid bearer token, or the error that prevented it.
    fn access_token(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Token provider backed by a fixed token string.
///
/// For tests and for applications that manage token lifecycles themselves.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Wraps an externally obtained token.
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_configured_token() {
        let provider = StaticTokenProvider::new("fixed-token");
        assert_eq!(provider.access_token().await.unwrap(), "fixed-token");
    }

    #[tokio::test]
    async fn test_static_provider_is_reusable() {
        let provider = StaticTokenProvider::new("fixed-token");
        let first = provider.access_token().await.unwrap();
        let second = provider.access_token().await.unwrap();
        assert_eq!(first, second);
    }
}
