//! Resource endpoint markers.
//!
//! Each REST collection is represented by a zero-sized marker type that names
//! its base path and decoded shape. The operation traits are capability
//! markers: implementing [`QueryEndpoint`] for a resource enables
//! [`ApiClient::query`](crate::client::ApiClient::query) for it, and likewise
//! for fetch-by-id and create. The generic pipeline in the client module does
//! all the work; resource modules stay declarative.

use serde::{Serialize, de::DeserializeOwned};

mod cart;
mod order;

pub use cart::Carts;
pub use order::Orders;

/// A REST collection on the platform.
pub trait Endpoint {
    /// Base path of the collection relative to the project, without a
    /// leading slash, e.g. `carts`.
    const BASE_PATH: &'static str;

    /// Decoded shape of one resource in the collection.
    type Output: DeserializeOwned + Send;
}

/// Marker: the collection supports querying with
/// [`QueryOptions`](crate::client::QueryOptions).
pub trait QueryEndpoint: Endpoint {}

/// Marker: the collection supports fetching a single resource by id.
pub trait ByIdEndpoint: Endpoint {}

/// Marker: the collection supports creating resources from a draft.
pub trait CreateEndpoint: Endpoint {
    /// Serialized request body for resource creation.
    type Draft: Serialize + Sync;
}
