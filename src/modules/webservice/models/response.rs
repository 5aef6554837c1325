//! Response-shape normalization for the webservice.
//!
//! The platform returns a bare object where a one-element list would be
//! expected, and wraps entries in a resource-named object or not depending on
//! version. Both axes are normalized here, once, so every upstream consumer
//! sees a plain `Vec`.

use serde::Deserialize;

use super::{Order, OrderLine, Product};

/// A value that is either a single `T` or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrderEntry {
    Wrapped { order: Order },
    Bare(Order),
}

impl OrderEntry {
    fn into_order(self) -> Order {
        match self {
            OrderEntry::Wrapped { order } => order,
            OrderEntry::Bare(order) => order,
        }
    }
}

/// `GET /api/orders` payload; an absent key means no matches.
#[derive(Debug, Deserialize)]
pub struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Option<OneOrMany<OrderEntry>>,
}

impl OrdersEnvelope {
    pub fn into_orders(self) -> Vec<Order> {
        match self.orders {
            Some(entries) => entries
                .into_vec()
                .into_iter()
                .map(OrderEntry::into_order)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrderLineEntry {
    Wrapped { order_detail: OrderLine },
    Bare(OrderLine),
}

impl OrderLineEntry {
    fn into_line(self) -> OrderLine {
        match self {
            OrderLineEntry::Wrapped { order_detail } => order_detail,
            OrderLineEntry::Bare(line) => line,
        }
    }
}

/// `GET /api/order_details` payload.
#[derive(Debug, Deserialize)]
pub struct OrderLinesEnvelope {
    #[serde(default)]
    pub order_details: Option<OneOrMany<OrderLineEntry>>,
}

impl OrderLinesEnvelope {
    pub fn into_lines(self) -> Vec<OrderLine> {
        match self.order_details {
            Some(entries) => entries
                .into_vec()
                .into_iter()
                .map(OrderLineEntry::into_line)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductEntry {
    Wrapped { product: Product },
    Bare(Product),
}

impl ProductEntry {
    fn into_product(self) -> Product {
        match self {
            ProductEntry::Wrapped { product } => product,
            ProductEntry::Bare(product) => product,
        }
    }
}

/// `GET /api/products/{id}` payload; some shop versions answer with
/// `{"product": {...}}`, others with `{"products": [{...}]}`.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub products: Option<OneOrMany<ProductEntry>>,
}

impl ProductEnvelope {
    pub fn into_product(self) -> Option<Product> {
        if let Some(products) = self.products {
            if let Some(first) = products.into_vec().into_iter().next() {
                return Some(first.into_product());
            }
        }
        self.product
    }
}

/// `GET /api/products` payload (catalog listing).
#[derive(Debug, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default)]
    pub products: Option<OneOrMany<ProductEntry>>,
}

impl ProductsEnvelope {
    pub fn into_products(self) -> Vec<Product> {
        match self.products {
            Some(entries) => entries
                .into_vec()
                .into_iter()
                .map(ProductEntry::into_product)
                .collect(),
            None => Vec::new(),
        }
    }
}
