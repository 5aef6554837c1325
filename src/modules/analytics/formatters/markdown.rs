//! Human-readable report rendering. Output is capped by the truncation guard
//! with the warning message appended after a rule.

use crate::core::truncation;
use crate::modules::analytics::models::{ProductSalesStats, SortBy, TopProductsResult};

/// Per-order sections are capped independently of the character ceiling
const MAX_ORDERS_DISPLAYED: usize = 50;

const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

pub fn product_sales_stats_markdown(
    stats: &ProductSalesStats,
    character_limit: usize,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Sales Report - {}", stats.product_name));
    lines.push(String::new());
    lines.push(format!("**Product ID:** {}", stats.product_id));
    lines.push(format!("**Reference:** {}", stats.product_reference));
    lines.push(format!(
        "**Period:** {} - {}",
        stats.period.from.format(DATE_DISPLAY_FORMAT),
        stats.period.to.format(DATE_DISPLAY_FORMAT)
    ));
    lines.push(String::new());

    lines.push("## Sales Summary".to_string());
    lines.push(String::new());
    lines.push(format!(
        "- **Total quantity sold:** {} units",
        stats.sales.total_quantity_sold
    ));
    lines.push(format!(
        "- **Total revenue (excl. tax):** {} €",
        stats.sales.total_revenue_excl_tax.round_dp(2)
    ));
    lines.push(format!(
        "- **Total revenue (incl. tax):** {} €",
        stats.sales.total_revenue_incl_tax.round_dp(2)
    ));
    lines.push(format!(
        "- **Average unit price:** {} €",
        stats.sales.average_unit_price.round_dp(2)
    ));
    lines.push(format!(
        "- **Number of orders:** {}",
        stats.sales.number_of_orders
    ));
    lines.push(String::new());

    if stats.orders.is_empty() {
        lines.push("## No Orders".to_string());
        lines.push(String::new());
        lines.push("No sales recorded for this product over the selected period.".to_string());
    } else {
        lines.push("## Order Details".to_string());
        lines.push(String::new());

        for order in stats.orders.iter().take(MAX_ORDERS_DISPLAYED) {
            lines.push(format!(
                "### Order #{} - {}",
                order.order_id,
                order.date.format(DATE_DISPLAY_FORMAT)
            ));
            lines.push(format!("- Quantity: {} units", order.quantity));
            lines.push(format!("- Unit price: {} €", order.unit_price.round_dp(2)));
            lines.push(format!("- Total: {} €", order.total_price.round_dp(2)));
            lines.push(String::new());
        }

        if stats.orders.len() > MAX_ORDERS_DISPLAYED {
            lines.push(format!(
                "*... and {} more orders (display limited to {})*",
                stats.orders.len() - MAX_ORDERS_DISPLAYED,
                MAX_ORDERS_DISPLAYED
            ));
            lines.push(String::new());
        }
    }

    finish(lines.join("\n"), character_limit)
}

pub fn top_products_markdown(result: &TopProductsResult, character_limit: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    let sort_label = match result.sort_by {
        SortBy::Quantity => "Quantity Sold",
        SortBy::Revenue => "Revenue",
    };

    lines.push(format!(
        "# Top {} Products - By {}",
        result.products.len(),
        sort_label
    ));
    lines.push(String::new());
    lines.push(format!(
        "**Period:** {} - {}",
        result.period.from.format(DATE_DISPLAY_FORMAT),
        result.period.to.format(DATE_DISPLAY_FORMAT)
    ));
    lines.push(format!("**Criterion:** {}", sort_label));
    lines.push(String::new());

    lines.push("## Ranking".to_string());
    lines.push(String::new());

    for product in &result.products {
        lines.push(format!(
            "### #{} - {} (ID: {})",
            product.rank, product.product_name, product.product_id
        ));
        lines.push(format!("- **Reference:** {}", product.product_reference));
        lines.push(format!(
            "- **Quantity sold:** {} units",
            product.total_quantity_sold
        ));
        lines.push(format!(
            "- **Revenue (incl. tax):** {} €",
            product.total_revenue_incl_tax.round_dp(2)
        ));
        lines.push(format!("- **Orders:** {}", product.number_of_orders));
        lines.push(format!(
            "- **Average price:** {} €",
            product.average_unit_price.round_dp(2)
        ));
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(format!(
        "**Total:** {} products found | Showing first {}",
        result.total_products_found,
        result.products.len()
    ));

    if result.has_more {
        if let Some(next_limit) = result.next_limit {
            lines.push(String::new());
            lines.push(format!(
                "Tip: use `limit={}` to see more results",
                next_limit
            ));
        }
    }

    finish(lines.join("\n"), character_limit)
}

fn finish(markdown: String, character_limit: usize) -> String {
    let outcome = truncation::apply(&markdown, character_limit);
    match (outcome.truncated, outcome.message) {
        (true, Some(message)) => format!("{}\n\n---\n\n{}", outcome.data, message),
        _ => markdown,
    }
}
