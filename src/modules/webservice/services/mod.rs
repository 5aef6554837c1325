pub mod client;
pub mod commerce_api;
pub mod filters;

pub use client::{WebserviceClient, PAGE_SIZE};
pub use commerce_api::CommerceApi;
pub use filters::{OrderFilters, OrderLineFilters};
