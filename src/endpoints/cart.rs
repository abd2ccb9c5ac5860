//! Cart resource endpoint.

use crate::{
    endpoints::{ByIdEndpoint, CreateEndpoint, Endpoint, QueryEndpoint},
    models::{Cart, CartDraft},
};

/// The `carts` collection.
///
/// Supports query, fetch-by-id, and creation from a [`CartDraft`].
///
/// # Examples
///
/// ```no_run
/// use storefront_sdk::{ApiClient, ClientConfig, auth::StaticTokenProvider, endpoints::Carts};
/// use storefront_sdk::models::CartDraft;
///
/// # async fn example() -> storefront_sdk::Result<()> {
/// let config = ClientConfig::new("my-shop", "https://api.storefront.example");
/// let client = ApiClient::new(config, StaticTokenProvider::new("token"))?;
///
/// let cart = client.create::<Carts>(&CartDraft::new("EUR")).await?;
/// let fetched = client.by_id::<Carts>(&cart.id, &[]).await?;
/// assert_eq!(fetched.id, cart.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Carts;

impl Endpoint for Carts {
    const BASE_PATH: &'static str = "carts";
    type Output = Cart;
}

impl QueryEndpoint for Carts {}
impl ByIdEndpoint for Carts {}

impl CreateEndpoint for Carts {
    type Draft = CartDraft;
}
