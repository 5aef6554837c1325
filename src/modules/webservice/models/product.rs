use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::numeric;

/// A catalog product, minimal fields only (`display=[id,name,reference,active]`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "numeric::u64_from_text")]
    pub id: u64,

    pub name: ProductName,

    #[serde(default)]
    pub reference: String,

    #[serde(
        default = "default_active",
        deserialize_with = "numeric::bool_from_text"
    )]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Product names arrive either as a plain string or as a list of per-locale
/// variants. Downstream code never branches on the shape; `display()` is the
/// single accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductName {
    Localized(Vec<LocalizedText>),
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, deserialize_with = "locale_id")]
    pub id: Option<String>,
    pub value: String,
}

impl ProductName {
    /// The display text: the plain name, or the first locale variant.
    pub fn display(&self) -> &str {
        match self {
            ProductName::Plain(name) => name,
            ProductName::Localized(variants) => variants
                .first()
                .map(|variant| variant.value.as_str())
                .unwrap_or("Unknown"),
        }
    }

    /// Case-insensitive substring match against every variant.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        match self {
            ProductName::Plain(name) => name.to_lowercase().contains(needle),
            ProductName::Localized(variants) => variants
                .iter()
                .any(|variant| variant.value.to_lowercase().contains(needle)),
        }
    }
}

// Locale ids arrive as "1" or 1 depending on the shop version.
fn locale_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "invalid locale id: {}",
            other
        ))),
    }
}
