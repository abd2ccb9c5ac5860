//! Cart models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{LocalizedString, Money, Reference};
use crate::models::discount::CartDiscount;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Unique cart id.
    pub id: String,
    /// Version, incremented by every update.
    pub version: u64,
    /// Owning customer, absent for anonymous carts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Lifecycle state.
    pub cart_state: CartState,
    /// Line items, empty for a fresh cart.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Sum of line item prices after discounts.
    pub total_price: Money,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
}

/// Cart lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartState {
    /// The cart can be updated and ordered.
    Active,
    /// The cart was merged into another cart on customer login.
    Merged,
    /// An order was created from the cart.
    Ordered,
}

/// Request body for cart creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDraft {
    /// ISO 4217 currency code for all cart amounts.
    pub currency: String,
    /// Customer to own the cart; absent creates an anonymous cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl CartDraft {
    /// Creates an anonymous cart draft in the given currency.
    pub fn new(currency: impl Into<String>) -> Self {
        Self { currency: currency.into(), customer_id: None }
    }

    /// Assigns the cart to a customer.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }
}

/// One product line in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line item id, unique within the cart.
    pub id: String,
    /// Product this line was created from.
    pub product_id: String,
    /// Localized product name.
    #[serde(default)]
    pub name: LocalizedString,
    /// Quantity of the product in the cart.
    pub quantity: u32,
    /// Price for the whole line after discounts.
    pub total_price: Money,
    /// Discounted price, present when a cart discount applies to this line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<DiscountedLineItemPrice>,
}

/// Price of a line item after cart discounts, with a breakdown per discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedLineItemPrice {
    /// The discounted line price.
    pub value: Money,
    /// Per-discount portions that make up the reduction.
    #[serde(default)]
    pub included_discounts: Vec<DiscountedLineItemPortion>,
}

/// The share one cart discount contributes to a discounted line price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedLineItemPortion {
    /// The discount responsible for this portion.
    pub discount: Reference<CartDiscount>,
    /// Amount deducted by this discount.
    pub discounted_amount: Money,
}
