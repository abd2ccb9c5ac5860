//! Typed model objects for platform resources.
//!
//! All models deserialize from the platform's camelCase JSON via serde.
//! Monetary amounts are integer cent amounts paired with an ISO 4217
//! currency code; timestamps are RFC 3339 UTC instants.

mod cart;
mod common;
mod discount;
mod order;

pub use cart::{
    Cart, CartDraft, CartState, DiscountedLineItemPortion, DiscountedLineItemPrice, LineItem,
};
pub use common::{LocalizedString, Money, PagedQueryResult, Reference};
pub use discount::{CartDiscount, ProductDiscountValue};
pub use order::{Order, OrderState};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_cart_deserializes_from_platform_json() {
        let body = json!({
            "id": "cart-1",
            "version": 3,
            "customerId": "customer-1",
            "cartState": "Active",
            "createdAt": "2016-09-29T10:24:58.184Z",
            "totalPrice": {"currencyCode": "EUR", "centAmount": 4200},
            "lineItems": [{
                "id": "line-1",
                "productId": "product-1",
                "name": {"en": "Whisky box"},
                "quantity": 2,
                "totalPrice": {"currencyCode": "EUR", "centAmount": 4200},
                "discountedPrice": {
                    "value": {"currencyCode": "EUR", "centAmount": 3800},
                    "includedDiscounts": [{
                        "discount": {"typeId": "cart-discount", "id": "discount-1"},
                        "discountedAmount": {"currencyCode": "EUR", "centAmount": 400}
                    }]
                }
            }]
        });

        let cart: Cart = serde_json::from_value(body).unwrap();
        assert_eq!(cart.id, "cart-1");
        assert_eq!(cart.cart_state, CartState::Active);
        assert_eq!(cart.total_price.cent_amount, 4200);

        let line = &cart.line_items[0];
        assert_eq!(line.name.get("en").map(String::as_str), Some("Whisky box"));
        let discounted = line.discounted_price.as_ref().unwrap();
        assert_eq!(discounted.value.cent_amount, 3800);
        assert_eq!(discounted.included_discounts[0].discount.id, "discount-1");
        assert_eq!(discounted.included_discounts[0].discounted_amount.cent_amount, 400);
    }

    #[test]
    fn test_cart_tolerates_absent_optional_fields() {
        let body = json!({
            "id": "cart-2",
            "version": 1,
            "cartState": "Ordered",
            "createdAt": "2016-09-29T10:24:58.184Z",
            "totalPrice": {"currencyCode": "USD", "centAmount": 0}
        });

        let cart: Cart = serde_json::from_value(body).unwrap();
        assert!(cart.customer_id.is_none());
        assert!(cart.line_items.is_empty());
    }

    #[test]
    fn test_paged_query_result_shape() {
        let body = json!({
            "offset": 10,
            "count": 1,
            "total": 11,
            "results": [{
                "id": "cart-1",
                "version": 1,
                "cartState": "Active",
                "createdAt": "2016-09-29T10:24:58.184Z",
                "totalPrice": {"currencyCode": "EUR", "centAmount": 100}
            }]
        });

        let page: PagedQueryResult<Cart> = serde_json::from_value(body).unwrap();
        assert_eq!(page.offset, 10);
        assert_eq!(page.count, 1);
        assert_eq!(page.total, Some(11));
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn test_reference_with_expanded_object() {
        let body = json!({
            "typeId": "cart-discount",
            "id": "discount-1",
            "obj": {"id": "discount-1", "name": {"en": "Summer sale"}}
        });

        let reference: Reference<CartDiscount> = serde_json::from_value(body).unwrap();
        let expanded = reference.obj.unwrap();
        assert_eq!(expanded.name.get("en").map(String::as_str), Some("Summer sale"));
    }

    #[test]
    fn test_product_discount_value_relative() {
        let body = json!({"type": "relative", "permyriad": 1000});
        let value: ProductDiscountValue = serde_json::from_value(body).unwrap();
        assert_eq!(value.value_type, "relative");
        assert_eq!(value.permyriad, Some(1000));
        assert!(value.money.is_none());
    }

    #[test]
    fn test_product_discount_value_absolute() {
        let body = json!({
            "type": "absolute",
            "money": {"currencyCode": "EUR", "centAmount": 500}
        });
        let value: ProductDiscountValue = serde_json::from_value(body).unwrap();
        assert_eq!(value.money.unwrap().cent_amount, 500);
    }

    #[test]
    fn test_cart_draft_serializes_camel_case_and_skips_absent_fields() {
        let draft = CartDraft::new("EUR");
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, json!({"currency": "EUR"}));

        let draft = CartDraft::new("EUR").with_customer_id("customer-1");
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, json!({"currency": "EUR", "customerId": "customer-1"}));
    }

    #[test]
    fn test_order_deserializes() {
        let body = json!({
            "id": "order-1",
            "version": 1,
            "orderState": "Open",
            "createdAt": "2016-09-29T10:24:58.184Z",
            "totalPrice": {"currencyCode": "EUR", "centAmount": 9900}
        });

        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.order_state, OrderState::Open);
        assert!(order.line_items.is_empty());
    }
}
