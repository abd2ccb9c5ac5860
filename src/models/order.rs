//! Order models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::cart::LineItem;
use crate::models::common::Money;

/// An order created from a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order id.
    pub id: String,
    /// Version, incremented by every update.
    pub version: u64,
    /// Lifecycle state.
    pub order_state: OrderState,
    /// Line items copied from the originating cart.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Order total.
    pub total_price: Money,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Order lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderState {
    /// Newly placed.
    Open,
    /// Confirmed by the merchant.
    Confirmed,
    /// Fulfilled.
    Complete,
    /// Cancelled before fulfilment.
    Cancelled,
}
