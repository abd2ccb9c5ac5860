//! Order resource endpoint.

use crate::{
    endpoints::{ByIdEndpoint, Endpoint, QueryEndpoint},
    models::Order,
};

/// The `orders` collection.
///
/// Orders are created through checkout flows on the platform side, so this
/// endpoint is read-only here: query and fetch-by-id.
#[derive(Debug, Clone, Copy)]
pub struct Orders;

impl Endpoint for Orders {
    const BASE_PATH: &'static str = "orders";
    type Output = Order;
}

impl QueryEndpoint for Orders {}
impl ByIdEndpoint for Orders {}
