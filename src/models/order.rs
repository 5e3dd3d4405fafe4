use serde::{Deserialize, Serialize};

/// An order line. `order_id` is supplied by the caller, and `product_id` is a
/// plain reference that is not checked against the products table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_fields_hold_assigned_values() {
        let order = Order {
            order_id: 1,
            product_id: 2,
            quantity: 5,
            total_price: 100.0,
        };
        assert_eq!(order.order_id, 1);
        assert_eq!(order.product_id, 2);
        assert_eq!(order.quantity, 5);
        assert_eq!(order.total_price, 100.0);
    }

    #[test]
    fn order_uses_camel_case_on_the_wire() {
        let order: Order = serde_json::from_value(json!({
            "orderId": 1,
            "productId": 2,
            "quantity": -3,
            "totalPrice": 50.0,
        }))
        .unwrap();
        assert_eq!(order.quantity, -3, "no positivity constraint on quantity");
        assert_eq!(serde_json::to_value(&order).unwrap()["totalPrice"], 50.0);
    }
}
