pub mod order;
pub mod order_line;
pub mod product;
pub mod response;

pub use order::Order;
pub use order_line::OrderLine;
pub use product::{LocalizedText, Product, ProductName};
pub use response::{
    OneOrMany, OrderLinesEnvelope, OrdersEnvelope, ProductEnvelope, ProductsEnvelope,
};

/// Timestamp codec for the platform's `YYYY-MM-DD HH:MM:SS` format.
///
/// Date-only values are accepted on input and read as midnight.
pub mod shop_datetime {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        NaiveDateTime::parse_from_str(trimmed, FORMAT)
            .or_else(|_| {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
            .map_err(|_| de::Error::custom(format!("invalid timestamp: {:?}", raw)))
    }
}
