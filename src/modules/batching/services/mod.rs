pub mod batch_fetcher;

pub use batch_fetcher::{BatchFetcher, MAX_IDS_PER_BATCH};
