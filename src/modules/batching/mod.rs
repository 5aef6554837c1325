pub mod services;

pub use services::{BatchFetcher, MAX_IDS_PER_BATCH};
