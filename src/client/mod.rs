//! Request dispatch pipeline.
//!
//! [`ApiClient`] owns the immutable configuration, a pooled HTTP client, and
//! the token provider, and drives the per-request pipeline shared by every
//! resource endpoint: validate configuration, resolve a bearer token, build
//! the final path, issue exactly one HTTP exchange, decode the outcome.
//!
//! Each call resolves its `Result` exactly once; there are no retries, no
//! response caching, and no coordination between concurrent calls.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{error, instrument};

use crate::{
    auth::TokenProvider,
    config::ClientConfig,
    endpoints::{ByIdEndpoint, CreateEndpoint, QueryEndpoint},
    error::Result,
    models::PagedQueryResult,
};

mod decode;
pub mod query;

pub(crate) use decode::decode_response;
pub use query::QueryOptions;

/// Asynchronous client for one project on the platform.
///
/// Generic over its [`TokenProvider`]; the provider is asked for a token once
/// per request and the token is only borrowed for that request. Cloning the
/// underlying `reqwest::Client` is cheap, so one `ApiClient` can serve many
/// concurrent calls.
///
/// # Examples
///
/// ```no_run
/// use storefront_sdk::{
///     ApiClient, ClientConfig, QueryOptions,
///     auth::StaticTokenProvider,
///     endpoints::Carts,
/// };
///
/// # async fn example() -> storefront_sdk::Result<()> {
/// let config = ClientConfig::new("my-shop", "https://api.storefront.example");
/// let client = ApiClient::new(config, StaticTokenProvider::new("token"))?;
///
/// let options = QueryOptions::new()
///     .filter(r#"cartState="Active""#)
///     .sort_by("createdAt desc")
///     .limit(20);
///
/// let carts = client.query::<Carts>(&options).await?;
/// println!("matched {} carts", carts.count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient<P> {
    config: ClientConfig,
    http: Client,
    tokens: P,
}

impl<P: TokenProvider> ApiClient<P> {
    /// Creates a client with default transport settings: connection pooling,
    /// 30 second request timeout, 10 second connect timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig, tokens: P) -> Result<Self> {
        let http = Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { config, http, tokens })
    }

    /// Creates a client around an existing `reqwest::Client`.
    ///
    /// Useful when the application shares one connection pool across clients
    /// or needs non-default transport settings.
    pub fn with_http_client(config: ClientConfig, tokens: P, http: Client) -> Self {
        Self { config, http, tokens }
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Queries a resource collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the token provider
    /// fails, the transport fails, or the response cannot be decoded.
    pub async fn query<E: QueryEndpoint>(
        &self,
        options: &QueryOptions,
    ) -> Result<PagedQueryResult<E::Output>> {
        let path = options.apply_to(E::BASE_PATH);
        self.get_json(&path).await
    }

    /// Fetches a single resource by id, optionally expanding references.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`query`](Self::query); a missing id surfaces as
    /// a `ServerError` with a `ResourceNotFound` detail.
    pub async fn by_id<E: ByIdEndpoint>(&self, id: &str, expansion: &[String]) -> Result<E::Output> {
        let path = query::path_with_expansion(&format!("{}/{id}", E::BASE_PATH), expansion);
        self.get_json(&path).await
    }

    /// Creates a resource from a draft.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`query`](Self::query).
    pub async fn create<E: CreateEndpoint>(&self, draft: &E::Draft) -> Result<E::Output> {
        self.post_json(E::BASE_PATH, draft).await
    }

    #[instrument(skip(self), fields(project_key = %self.config.project_key))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.request_url(path)?;
        let token = self.tokens.access_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;
        decode_response(response).await
    }

    #[instrument(skip(self, body), fields(project_key = %self.config.project_key))]
    async fn post_json<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.request_url(path)?;
        let token = self.tokens.access_token().await?;
        let response = self.http.post(url).bearer_auth(token).json(body).send().await?;
        decode_response(response).await
    }

    /// Validates the configuration and builds the absolute request URL.
    ///
    /// Validation runs before the token provider is consulted, so an invalid
    /// configuration never costs a token fetch or an HTTP exchange.
    fn request_url(&self, path: &str) -> Result<String> {
        self.config.validate().map_err(|err| {
            error!(%err, "cannot execute request: configuration is invalid");
            err
        })?;
        Ok(format!(
            "{}/{}/{path}",
            self.config.api_url.trim_end_matches('/'),
            self.config.project_key
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;
    use crate::error::SdkError;

    fn client_with(config: ClientConfig) -> ApiClient<StaticTokenProvider> {
        ApiClient::new(config, StaticTokenProvider::new("test-token")).unwrap()
    }

    #[test]
    fn test_request_url_joins_api_url_project_key_and_path() {
        let client =
            client_with(ClientConfig::new("test-project", "https://api.storefront.example"));
        let url = client.request_url("carts?&limit=1").unwrap();
        assert_eq!(url, "https://api.storefront.example/test-project/carts?&limit=1");
    }

    #[test]
    fn test_request_url_strips_trailing_slash_from_api_url() {
        let client =
            client_with(ClientConfig::new("test-project", "https://api.storefront.example/"));
        let url = client.request_url("carts").unwrap();
        assert_eq!(url, "https://api.storefront.example/test-project/carts");
    }

    #[test]
    fn test_request_url_rejects_invalid_configuration() {
        let client = client_with(ClientConfig::new("", "https://api.storefront.example"));
        let result = client.request_url("carts");
        assert!(matches!(result.unwrap_err(), SdkError::ConfigurationInvalid(_)));
    }

    #[test]
    fn test_config_accessor() {
        let client =
            client_with(ClientConfig::new("test-project", "https://api.storefront.example"));
        assert_eq!(client.config().project_key, "test-project");
    }
}
