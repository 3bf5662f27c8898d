// Core structs: source records, joined rows, error types
use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

/// One row of `orders_dataset.csv`. The purchase timestamp is the only
/// datetime the analyzers use, so it is parsed eagerly at decode time.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_status: String,
    #[serde(deserialize_with = "crate::utils::de_timestamp")]
    pub order_purchase_timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    pub seller_id: String,
    pub price: f64,
    pub freight_value: f64,
}

/// Some products carry no category at all; those rows never survive the
/// category-translation join.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_category_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub order_id: String,
    pub payment_sequential: u32,
    pub payment_type: String,
    pub payment_installments: u32,
    pub payment_value: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub review_id: String,
    pub order_id: String,
    pub review_score: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_unique_id: String,
    pub customer_city: String,
    pub customer_state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTranslation {
    pub product_category_name: String,
    pub product_category_name_english: String,
}

/// The seven source tables, decoded and held in memory for one run.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub products: Vec<Product>,
    pub payments: Vec<Payment>,
    pub reviews: Vec<Review>,
    pub customers: Vec<Customer>,
    pub category_translations: Vec<CategoryTranslation>,
}

/// One denormalized row of the joined table. Item, product, customer and
/// English category are always present (inner joins); payment and review
/// columns are `None` when the order has no matching rows (left joins).
#[derive(Debug, Clone)]
pub struct JoinedRow {
    pub order_id: String,
    pub customer_id: String,
    pub customer_unique_id: String,
    pub order_status: String,
    pub purchase_ts: NaiveDateTime,
    pub order_item_id: u32,
    pub product_id: String,
    pub item_price: f64,
    pub freight_value: f64,
    pub category_name: String,
    pub category_english: String,
    pub payment_type: Option<String>,
    pub payment_installments: Option<u32>,
    pub payment_value: Option<f64>,
    pub review_id: Option<String>,
    pub review_score: Option<u8>,
    pub customer_city: String,
    pub customer_state: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {table} failed: {source}")]
    Http {
        table: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status {status} fetching {table}")]
    BadStatus {
        table: &'static str,
        status: reqwest::StatusCode,
    },
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("csv decode failed for {table}: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] TableError),
}

#[cfg(test)]
impl JoinedRow {
    /// Minimal joined row for analyzer tests; callers override the fields
    /// their scenario cares about.
    pub(crate) fn stub(order_id: &str, customer_id: &str, purchase_ts: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            customer_id: customer_id.to_string(),
            customer_unique_id: format!("uniq-{customer_id}"),
            order_status: "delivered".to_string(),
            purchase_ts: crate::utils::parse_timestamp(purchase_ts).expect("valid test timestamp"),
            order_item_id: 1,
            product_id: "prod-1".to_string(),
            item_price: 50.0,
            freight_value: 10.0,
            category_name: "cama_mesa_banho".to_string(),
            category_english: "bed_bath_table".to_string(),
            payment_type: None,
            payment_installments: None,
            payment_value: None,
            review_id: None,
            review_score: None,
            customer_city: "sao paulo".to_string(),
            customer_state: "SP".to_string(),
        }
    }
}
