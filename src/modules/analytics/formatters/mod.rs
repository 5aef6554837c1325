pub mod json;
pub mod markdown;

pub use json::{product_sales_stats_json, top_products_json};
pub use markdown::{product_sales_stats_markdown, top_products_markdown};
