//! Storefront SDK: typed async client for a commerce platform REST API.
//!
//! This crate maps the platform's HTTP/JSON contract onto Rust types: model
//! objects ([`models::Cart`], [`models::LineItem`], [`models::Money`], …) and
//! endpoint helpers (query, fetch-by-id, create) that build request paths,
//! attach bearer tokens, and decode JSON responses.
//!
//! # Architecture
//!
//! ```text
//! caller ── query / by_id / create
//!    │
//! ┌──▼───────────────────────────────────────────┐
//! │  ApiClient                                   │
//! │                                              │
//! │  config check ─► token fetch ─► path build   │
//! │                  (TokenProvider)    │        │
//! │                                 GET/POST     │
//! │                                     │        │
//! │  Result ◄─ response decode ◄────────┘        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Every resource endpoint reuses the same pipeline: the configuration is
//! validated first, the [`auth::TokenProvider`] resolves a bearer token, the
//! query options are composed into the final path, exactly one HTTP exchange
//! runs, and the decoded outcome resolves the caller's `Result` exactly once.
//! There are no retries, no response caching, and no shared mutable state
//! between concurrent calls.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::{
//!     ApiClient, ClientConfig, QueryOptions,
//!     auth::StaticTokenProvider,
//!     endpoints::Carts,
//! };
//!
//! # async fn example() -> storefront_sdk::Result<()> {
//! let config = ClientConfig::from_toml(
//!     r#"
//!     project_key = "my-shop"
//!     api_url = "https://api.storefront.example"
//!     "#,
//! )?;
//!
//! let client = ApiClient::new(config, StaticTokenProvider::new("token"))?;
//!
//! let active = client
//!     .query::<Carts>(
//!         &QueryOptions::new()
//!             .filter(r#"cartState="Active""#)
//!             .sort_by("createdAt desc")
//!             .limit(20),
//!     )
//!     .await?;
//!
//! for cart in &active.results {
//!     println!("{}: {} {}", cart.id, cart.total_price.cent_amount, cart.total_price.currency_code);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::{ApiClient, QueryOptions};
pub use config::{AuthConfig, ClientConfig};
pub use error::{ErrorCode, ErrorDetail, Result, SdkError};
