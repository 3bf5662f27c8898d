// Loader module: fetches the seven source CSVs and decodes them into a Dataset.

pub mod fetcher;
pub mod traits;

pub use fetcher::HttpFetcher;
pub use traits::TableSource;

use crate::model::{Dataset, LoadError};
use crate::parser::parse_table;
use futures::try_join;

/// The seven fixed source tables of the dataset snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTable {
    Orders,
    OrderItems,
    Products,
    Payments,
    Reviews,
    Customers,
    CategoryTranslations,
}

impl SourceTable {
    pub fn name(self) -> &'static str {
        match self {
            SourceTable::Orders => "orders",
            SourceTable::OrderItems => "order_items",
            SourceTable::Products => "products",
            SourceTable::Payments => "order_payments",
            SourceTable::Reviews => "order_reviews",
            SourceTable::Customers => "customers",
            SourceTable::CategoryTranslations => "product_category_translation",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            SourceTable::Orders => "orders_dataset.csv",
            SourceTable::OrderItems => "order_items_dataset.csv",
            SourceTable::Products => "products_dataset.csv",
            SourceTable::Payments => "order_payments_dataset.csv",
            SourceTable::Reviews => "order_reviews_dataset.csv",
            SourceTable::Customers => "customers_dataset.csv",
            SourceTable::CategoryTranslations => "product_category_name_translation.csv",
        }
    }
}

/// Fetches all seven table bodies concurrently and decodes them. Any fetch or
/// decode failure aborts the whole load.
pub async fn load_dataset(source: &dyn TableSource) -> Result<Dataset, LoadError> {
    let (orders, order_items, products, payments, reviews, customers, category_translations) =
        try_join!(
            source.fetch(SourceTable::Orders),
            source.fetch(SourceTable::OrderItems),
            source.fetch(SourceTable::Products),
            source.fetch(SourceTable::Payments),
            source.fetch(SourceTable::Reviews),
            source.fetch(SourceTable::Customers),
            source.fetch(SourceTable::CategoryTranslations),
        )?;

    Ok(Dataset {
        orders: parse_table(SourceTable::Orders, &orders)?,
        order_items: parse_table(SourceTable::OrderItems, &order_items)?,
        products: parse_table(SourceTable::Products, &products)?,
        payments: parse_table(SourceTable::Payments, &payments)?,
        reviews: parse_table(SourceTable::Reviews, &reviews)?,
        customers: parse_table(SourceTable::Customers, &customers)?,
        category_translations: parse_table(
            SourceTable::CategoryTranslations,
            &category_translations,
        )?,
    })
}
