//! Shared model primitives.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Map from locale tag to translated text, e.g. `{"en": "Whisky box"}`.
pub type LocalizedString = HashMap<String, String>;

/// A monetary amount in the minor unit of its currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Amount in the currency's minor unit (cents for EUR/USD).
    pub cent_amount: i64,
}

impl Money {
    /// Creates an amount from a currency code and minor-unit value.
    pub fn new(currency_code: impl Into<String>, cent_amount: i64) -> Self {
        Self { currency_code: currency_code.into(), cent_amount }
    }
}

/// A typed reference to another resource.
///
/// References carry the target's type and id; when the request asked for
/// expansion of the reference path, `obj` holds the inlined target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Reference<T> {
    /// Type discriminator of the referenced resource, e.g. `cart-discount`.
    pub type_id: String,
    /// Id of the referenced resource.
    pub id: String,
    /// Expanded target, present only when expansion was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj: Option<Box<T>>,
}

/// One page of query results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedQueryResult<T> {
    /// Offset of the first returned result.
    pub offset: u32,
    /// Number of results in this page.
    pub count: u32,
    /// Total number of matching resources, when the server reports it.
    #[serde(default)]
    pub total: Option<u32>,
    /// The results, in query order.
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_wire_names_are_camel_case() {
        let money = Money::new("EUR", 1250);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, r#"{"currencyCode":"EUR","centAmount":1250}"#);
    }

    #[test]
    fn test_money_supports_negative_amounts() {
        let money: Money =
            serde_json::from_str(r#"{"currencyCode":"EUR","centAmount":-400}"#).unwrap();
        assert_eq!(money.cent_amount, -400);
    }

    #[test]
    fn test_unexpanded_reference_skips_obj_on_serialize() {
        let reference = Reference::<Money> {
            type_id: "cart-discount".to_owned(),
            id: "discount-1".to_owned(),
            obj: None,
        };
        let json = serde_json::to_string(&reference).unwrap();
        assert!(!json.contains("obj"));
    }
}
