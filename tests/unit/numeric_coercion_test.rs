// The coercion primitives are exercised through serde, the way wire models
// use them. Malformed values must fail the whole deserialization; a silent
// zero would corrupt revenue totals undetectably.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use serde_json::json;

use prestalytics::core::numeric;

#[derive(Debug, Deserialize)]
struct PriceField {
    #[serde(deserialize_with = "numeric::decimal_from_text")]
    value: Decimal,
}

#[derive(Debug, Deserialize)]
struct QuantityField {
    #[serde(deserialize_with = "numeric::u64_from_text")]
    value: u64,
}

#[derive(Debug, Deserialize)]
struct StateField {
    #[serde(deserialize_with = "numeric::u32_from_text")]
    value: u32,
}

#[derive(Debug, Deserialize)]
struct FlagField {
    #[serde(deserialize_with = "numeric::bool_from_text")]
    value: bool,
}

#[test]
fn test_decimal_from_string() {
    let parsed: PriceField = serde_json::from_value(json!({ "value": "30.000000" })).unwrap();
    assert_eq!(parsed.value, dec!(30));

    let parsed: PriceField = serde_json::from_value(json!({ "value": "19.99" })).unwrap();
    assert_eq!(parsed.value, dec!(19.99));
}

#[test]
fn test_decimal_from_number() {
    let parsed: PriceField = serde_json::from_value(json!({ "value": 42.5 })).unwrap();
    assert_eq!(parsed.value, dec!(42.5));

    let parsed: PriceField = serde_json::from_value(json!({ "value": 100 })).unwrap();
    assert_eq!(parsed.value, dec!(100));
}

#[test]
fn test_decimal_with_surrounding_whitespace() {
    let parsed: PriceField = serde_json::from_value(json!({ "value": " 7.50 " })).unwrap();
    assert_eq!(parsed.value, dec!(7.50));
}

#[test]
fn test_malformed_decimal_is_fatal() {
    assert!(serde_json::from_value::<PriceField>(json!({ "value": "N/A" })).is_err());
    assert!(serde_json::from_value::<PriceField>(json!({ "value": "" })).is_err());
    assert!(serde_json::from_value::<PriceField>(json!({ "value": null })).is_err());
    assert!(serde_json::from_value::<PriceField>(json!({ "value": ["12.00"] })).is_err());
}

#[test]
fn test_quantity_from_string_or_number() {
    let parsed: QuantityField = serde_json::from_value(json!({ "value": "3" })).unwrap();
    assert_eq!(parsed.value, 3);

    let parsed: QuantityField = serde_json::from_value(json!({ "value": 5 })).unwrap();
    assert_eq!(parsed.value, 5);
}

#[test]
fn test_negative_or_fractional_quantity_is_fatal() {
    assert!(serde_json::from_value::<QuantityField>(json!({ "value": -1 })).is_err());
    assert!(serde_json::from_value::<QuantityField>(json!({ "value": "2.5" })).is_err());
    assert!(serde_json::from_value::<QuantityField>(json!({ "value": 2.5 })).is_err());
}

#[test]
fn test_state_code_range() {
    let parsed: StateField = serde_json::from_value(json!({ "value": "4" })).unwrap();
    assert_eq!(parsed.value, 4);

    assert!(serde_json::from_value::<StateField>(json!({ "value": u64::MAX })).is_err());
}

#[test]
fn test_bool_shapes() {
    let truthy = [json!(true), json!(1), json!("1"), json!("true")];
    for value in truthy {
        let parsed: FlagField = serde_json::from_value(json!({ "value": value })).unwrap();
        assert!(parsed.value);
    }

    let falsy = [json!(false), json!(0), json!("0"), json!("false"), json!("")];
    for value in falsy {
        let parsed: FlagField = serde_json::from_value(json!({ "value": value })).unwrap();
        assert!(!parsed.value);
    }

    assert!(serde_json::from_value::<FlagField>(json!({ "value": "yes" })).is_err());
}
