use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::DateRange;

/// Ranking criterion for top products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Quantity,
    Revenue,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::Quantity
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Quantity => write!(f, "quantity"),
            SortBy::Revenue => write!(f, "revenue"),
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "quantity" => Ok(SortBy::Quantity),
            "revenue" => Ok(SortBy::Revenue),
            _ => Err(format!("Invalid sort criterion: {}", s)),
        }
    }
}

/// One product's aggregate over the period, with its dense 1-based rank
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    pub rank: usize,
    pub product_id: u64,
    /// Denormalized from the first order line seen for this product
    pub product_name: String,
    pub product_reference: String,
    pub total_quantity_sold: u64,
    pub total_revenue_incl_tax: Decimal,
    pub number_of_orders: u64,
    pub average_unit_price: Decimal,
}

/// Ranked best-sellers for a period
#[derive(Debug, Clone, Serialize)]
pub struct TopProductsResult {
    pub period: DateRange,
    pub sort_by: SortBy,
    /// Distinct products found before truncating to `limit`
    pub total_products_found: usize,
    pub products: Vec<TopProduct>,
    pub has_more: bool,
    /// Suggested limit to see more results (doubled), when truncated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_limit: Option<usize>,
}
