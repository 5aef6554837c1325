// The webservice answers with a bare object where a one-element list would
// be expected, and wraps entries in resource-named objects or not depending
// on version. Normalization happens once at the client boundary; these
// fixtures pin both axes.

use rust_decimal_macros::dec;
use serde_json::json;

use prestalytics::modules::webservice::models::{
    OrderLinesEnvelope, OrdersEnvelope, ProductEnvelope, ProductName, ProductsEnvelope,
};

fn order_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "id_customer": 7,
        "date_add": "2024-01-15 10:30:00",
        "current_state": "2",
        "total_paid_tax_incl": "30.000000",
        "total_paid_tax_excl": "25.000000"
    })
}

#[test]
fn test_orders_array_of_wrapped_entries() {
    let payload = json!({ "orders": [ { "order": order_json(1) }, { "order": order_json(2) } ] });
    let orders = serde_json::from_value::<OrdersEnvelope>(payload)
        .unwrap()
        .into_orders();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, 1);
    assert_eq!(orders[1].id, 2);
    assert_eq!(orders[0].total_paid_tax_incl, dec!(30));
    assert_eq!(orders[0].current_state, 2);
}

#[test]
fn test_single_bare_order_normalizes_to_list() {
    let payload = json!({ "orders": order_json(9) });
    let orders = serde_json::from_value::<OrdersEnvelope>(payload)
        .unwrap()
        .into_orders();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, 9);
}

#[test]
fn test_absent_orders_key_is_empty() {
    let orders = serde_json::from_value::<OrdersEnvelope>(json!({}))
        .unwrap()
        .into_orders();
    assert!(orders.is_empty());
}

#[test]
fn test_malformed_order_total_fails_the_decode() {
    let mut broken = order_json(1);
    broken["total_paid_tax_incl"] = json!("free");
    let payload = json!({ "orders": [ { "order": broken } ] });

    assert!(serde_json::from_value::<OrdersEnvelope>(payload).is_err());
}

#[test]
fn test_order_lines_all_shapes() {
    let line = json!({
        "id": 11,
        "id_order": 3,
        "product_id": 42,
        "product_name": "Drone frame",
        "product_reference": "DF-01",
        "product_quantity": "2",
        "unit_price_tax_incl": "10.00",
        "unit_price_tax_excl": "8.33",
        "total_price_tax_incl": "20.00",
        "total_price_tax_excl": "16.66"
    });

    // wrapped list
    let wrapped = json!({ "order_details": [ { "order_detail": line } ] });
    let lines = serde_json::from_value::<OrderLinesEnvelope>(wrapped)
        .unwrap()
        .into_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_quantity, 2);
    assert_eq!(lines[0].total_price_tax_incl, dec!(20));

    // single bare object
    let bare = json!({ "order_details": line });
    let lines = serde_json::from_value::<OrderLinesEnvelope>(bare)
        .unwrap()
        .into_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id_order, 3);
}

#[test]
fn test_product_envelope_prefers_products_array() {
    let payload = json!({
        "products": [ { "id": 42, "name": "First", "reference": "A", "active": "1" } ],
        "product": { "id": 43, "name": "Second", "reference": "B", "active": "1" }
    });

    let product = serde_json::from_value::<ProductEnvelope>(payload)
        .unwrap()
        .into_product()
        .unwrap();
    assert_eq!(product.id, 42);
}

#[test]
fn test_product_envelope_singular_key() {
    let payload = json!({ "product": { "id": 5, "name": "Only", "reference": "C", "active": true } });
    let product = serde_json::from_value::<ProductEnvelope>(payload)
        .unwrap()
        .into_product()
        .unwrap();
    assert_eq!(product.id, 5);
}

#[test]
fn test_empty_product_envelope_is_none() {
    let product = serde_json::from_value::<ProductEnvelope>(json!({}))
        .unwrap()
        .into_product();
    assert!(product.is_none());
}

#[test]
fn test_localized_product_name() {
    let payload = json!({
        "products": [{
            "id": 42,
            "name": [ { "id": "1", "value": "Drone frame" }, { "id": 2, "value": "Châssis" } ],
            "reference": "DF-01",
            "active": "1"
        }]
    });

    let products = serde_json::from_value::<ProductsEnvelope>(payload)
        .unwrap()
        .into_products();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name.display(), "Drone frame");
    assert!(matches!(products[0].name, ProductName::Localized(_)));
    assert!(products[0].name.matches("châssis"));
}

#[test]
fn test_plain_product_name_and_missing_active() {
    let payload = json!({ "products": { "product": { "id": 1, "name": "Plain" } } });
    let products = serde_json::from_value::<ProductsEnvelope>(payload)
        .unwrap()
        .into_products();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name.display(), "Plain");
    assert!(products[0].active);
    assert_eq!(products[0].reference, "");
}
