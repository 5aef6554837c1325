pub mod sales_stats;
pub mod top_products;

pub use sales_stats::{OrderSummary, ProductSalesStats, SalesTotals};
pub use top_products::{SortBy, TopProduct, TopProductsResult};
