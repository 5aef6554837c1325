//! Parse-or-fail coercion for values the webservice serializes inconsistently.
//!
//! PrestaShop emits prices as strings ("30.000000"), quantities as strings or
//! numbers, and booleans as "0"/"1". Every such value crosses the wire through
//! one of the deserializers below. Malformed text is a hard deserialization
//! failure; a silently zero-filled price would corrupt revenue totals.

use rust_decimal::Decimal;
use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Deserialize a `Decimal` from a JSON string or number.
pub fn decimal_from_text<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => parse_decimal(s.trim())
            .ok_or_else(|| de::Error::custom(format!("invalid decimal value: {:?}", s))),
        Value::Number(n) => {
            let raw = n.to_string();
            parse_decimal(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid decimal value: {}", raw)))
        }
        other => Err(de::Error::custom(format!(
            "expected a decimal string or number, got {}",
            other
        ))),
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Deserialize a non-negative integer from a JSON string or number.
pub fn u64_from_text<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| de::Error::custom(format!("invalid integer value: {:?}", s))),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("invalid integer value: {}", n))),
        other => Err(de::Error::custom(format!(
            "expected an integer string or number, got {}",
            other
        ))),
    }
}

/// Deserialize an order-state code from a JSON string or number.
pub fn u32_from_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u64_from_text(deserializer)?;
    u32::try_from(value)
        .map_err(|_| de::Error::custom(format!("state code out of range: {}", value)))
}

/// Deserialize a boolean from a JSON bool, number or "0"/"1"/"true"/"false".
pub fn bool_from_text<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
        Value::String(s) => match s.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(de::Error::custom(format!(
                "invalid boolean value: {:?}",
                other
            ))),
        },
        other => Err(de::Error::custom(format!(
            "expected a boolean, got {}",
            other
        ))),
    }
}
