use crate::core::truncation;
use crate::core::AppResult;
use crate::modules::analytics::models::{ProductSalesStats, TopProductsResult};

/// Pretty-printed stats, capped at the character ceiling.
///
/// On truncation the flag and message are written back into the stats so
/// that structured consumers re-parsing an untruncated payload still see
/// them.
pub fn product_sales_stats_json(
    stats: &mut ProductSalesStats,
    character_limit: usize,
) -> AppResult<String> {
    let json = serde_json::to_string_pretty(stats)?;
    let outcome = truncation::apply(&json, character_limit);

    if outcome.truncated {
        stats.truncated = true;
        stats.truncation_message = outcome.message.clone();
        return Ok(outcome.data);
    }

    Ok(json)
}

/// Pretty-printed ranking, capped at the character ceiling.
pub fn top_products_json(
    result: &TopProductsResult,
    character_limit: usize,
) -> AppResult<String> {
    let json = serde_json::to_string_pretty(result)?;
    let outcome = truncation::apply(&json, character_limit);

    if outcome.truncated {
        return Ok(outcome.data);
    }

    Ok(json)
}
