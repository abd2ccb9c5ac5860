//! Discount models.

use serde::{Deserialize, Serialize};

use crate::models::common::{LocalizedString, Money};

/// A cart discount definition, referenced from discounted line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDiscount {
    /// Unique discount id.
    pub id: String,
    /// Localized display name.
    #[serde(default)]
    pub name: LocalizedString,
}

/// The value of a product discount.
///
/// `relative` discounts carry a permyriad (1/100 of a percent), `absolute`
/// discounts carry a money amount; the other field is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDiscountValue {
    /// Discriminator: `relative` or `absolute`.
    #[serde(rename = "type")]
    pub value_type: String,
    /// Reduction in permyriad, for relative discounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permyriad: Option<i64>,
    /// Reduction amount, for absolute discounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<Money>,
}
