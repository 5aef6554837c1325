use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::DateRange;
use crate::modules::webservice::models::{shop_datetime, Product};

/// One order's contribution to a product's sales over the period.
///
/// Several order lines sharing an order id collapse into a single summary;
/// quantity and total are sums across those lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_id: u64,
    #[serde(serialize_with = "shop_datetime::serialize")]
    pub date: NaiveDateTime,
    pub quantity: u64,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// Aggregate sales figures for one product over one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesTotals {
    pub total_quantity_sold: u64,
    pub total_revenue_excl_tax: Decimal,
    pub total_revenue_incl_tax: Decimal,
    /// Tax-inclusive revenue divided by quantity; 0 when nothing sold
    pub average_unit_price: Decimal,
    pub number_of_orders: u64,
}

impl SalesTotals {
    pub fn zero() -> Self {
        Self {
            total_quantity_sold: 0,
            total_revenue_excl_tax: Decimal::ZERO,
            total_revenue_incl_tax: Decimal::ZERO,
            average_unit_price: Decimal::ZERO,
            number_of_orders: 0,
        }
    }
}

/// Sales statistics for a single product over a period, orders newest first.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSalesStats {
    pub product_id: u64,
    pub product_name: String,
    pub product_reference: String,
    pub period: DateRange,
    pub sales: SalesTotals,
    pub orders: Vec<OrderSummary>,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_message: Option<String>,
}

impl ProductSalesStats {
    /// Zero-valued stats for a period with no matching orders.
    pub fn empty(product: &Product, period: DateRange) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.display().to_string(),
            product_reference: product.reference.clone(),
            period,
            sales: SalesTotals::zero(),
            orders: Vec::new(),
            truncated: false,
            truncation_message: None,
        }
    }
}
