pub mod models;
pub mod services;

pub use models::{Order, OrderLine, Product};
pub use services::{CommerceApi, WebserviceClient};
