use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::shop_datetime;
use crate::core::numeric;

/// An order as returned by the `orders` resource.
///
/// Immutable snapshot fetched per query; never cached beyond one request.
/// Monetary totals arrive as strings and parse through the central coercion
/// primitives, so a malformed amount fails the fetch instead of reading as 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "numeric::u64_from_text")]
    pub id: u64,

    #[serde(deserialize_with = "numeric::u64_from_text")]
    pub id_customer: u64,

    #[serde(with = "shop_datetime")]
    pub date_add: NaiveDateTime,

    /// Lifecycle state code (paid, shipped, canceled, ...)
    #[serde(deserialize_with = "numeric::u32_from_text")]
    pub current_state: u32,

    #[serde(deserialize_with = "numeric::decimal_from_text")]
    pub total_paid_tax_incl: Decimal,

    #[serde(deserialize_with = "numeric::decimal_from_text")]
    pub total_paid_tax_excl: Decimal,
}
