use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::numeric;

/// One product-quantity entry within an order, from the `order_details`
/// resource. Product name and reference are denormalized copies and may be
/// stale relative to the live catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderLine {
    #[serde(deserialize_with = "numeric::u64_from_text")]
    pub id: u64,

    #[serde(deserialize_with = "numeric::u64_from_text")]
    pub id_order: u64,

    #[serde(deserialize_with = "numeric::u64_from_text")]
    pub product_id: u64,

    pub product_name: String,

    #[serde(default)]
    pub product_reference: String,

    #[serde(deserialize_with = "numeric::u64_from_text")]
    pub product_quantity: u64,

    #[serde(deserialize_with = "numeric::decimal_from_text")]
    pub unit_price_tax_incl: Decimal,

    #[serde(deserialize_with = "numeric::decimal_from_text")]
    pub unit_price_tax_excl: Decimal,

    #[serde(deserialize_with = "numeric::decimal_from_text")]
    pub total_price_tax_incl: Decimal,

    #[serde(deserialize_with = "numeric::decimal_from_text")]
    pub total_price_tax_excl: Decimal,
}
