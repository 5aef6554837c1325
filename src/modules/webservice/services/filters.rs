//! Query-parameter construction for the webservice's filter syntax:
//! `filter[field]=value`, bracketed date ranges `[from,to]`, pipe-delimited
//! OR lists `[a|b|c]`, pagination via `limit=offset,count`.

use std::fmt::Display;

use crate::core::DateRange;

pub const ORDER_DISPLAY_FIELDS: &str =
    "[id,id_customer,date_add,current_state,total_paid_tax_incl,total_paid_tax_excl]";

pub const ORDER_LINE_DISPLAY_FIELDS: &str = "[id,id_order,product_id,product_name,\
     product_reference,product_quantity,unit_price_tax_incl,unit_price_tax_excl,\
     total_price_tax_incl,total_price_tax_excl]";

pub const PRODUCT_DISPLAY_FIELDS: &str = "[id,name,reference,active]";

/// Render an OR filter: a single value stays plain, several become `[a|b|c]`.
pub fn pipe_or_list<T: Display>(values: &[T]) -> String {
    if values.len() == 1 {
        values[0].to_string()
    } else {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("|");
        format!("[{}]", joined)
    }
}

/// Filters for the `orders` resource.
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    pub date_range: Option<DateRange>,
    pub states: Option<Vec<u32>>,
    pub customer_id: Option<u64>,
}

impl OrderFilters {
    pub fn for_period(range: DateRange, states: Option<Vec<u32>>) -> Self {
        Self {
            date_range: Some(range),
            states,
            customer_id: None,
        }
    }

    /// A date filter bounds the result set, which raises the pagination
    /// safety ceiling.
    pub fn is_narrowed(&self) -> bool {
        self.date_range.is_some()
    }

    pub fn query_params(&self, limit: usize, offset: usize) -> Vec<(String, String)> {
        let mut params = vec![
            ("output_format".to_string(), "JSON".to_string()),
            ("display".to_string(), ORDER_DISPLAY_FIELDS.to_string()),
            (
                "limit".to_string(),
                if offset > 0 {
                    format!("{},{}", offset, limit)
                } else {
                    limit.to_string()
                },
            ),
        ];

        if let Some(range) = &self.date_range {
            params.push(("filter[date_add]".to_string(), range.to_date_filter()));
            params.push(("date".to_string(), "1".to_string()));
        }

        if let Some(states) = &self.states {
            if !states.is_empty() {
                params.push((
                    "filter[current_state]".to_string(),
                    pipe_or_list(states),
                ));
            }
        }

        if let Some(customer_id) = self.customer_id {
            params.push(("filter[id_customer]".to_string(), customer_id.to_string()));
        }

        params
    }
}

/// Filters for the `order_details` resource.
#[derive(Debug, Clone, Default)]
pub struct OrderLineFilters {
    /// Order ids queried together as one OR list
    pub order_ids: Vec<u64>,
    pub product_id: Option<u64>,
}

impl OrderLineFilters {
    pub fn is_narrowed(&self) -> bool {
        !self.order_ids.is_empty() || self.product_id.is_some()
    }

    pub fn query_params(&self, limit: usize, offset: usize) -> Vec<(String, String)> {
        let mut params = vec![
            ("output_format".to_string(), "JSON".to_string()),
            (
                "display".to_string(),
                ORDER_LINE_DISPLAY_FIELDS.to_string(),
            ),
            ("limit".to_string(), format!("{},{}", offset, limit)),
        ];

        if !self.order_ids.is_empty() {
            params.push((
                "filter[id_order]".to_string(),
                pipe_or_list(&self.order_ids),
            ));
        }

        if let Some(product_id) = self.product_id {
            params.push(("filter[product_id]".to_string(), product_id.to_string()));
        }

        params
    }
}
