//! Ranking views: top product categories and payment-method popularity.
//!
//! Both views count distinct identifiers per group and sort descending.
//! Equal counts keep first-seen group order (the sort is stable and groups
//! are registered in row order).

use crate::model::JoinedRow;
use std::collections::{HashMap, HashSet};

pub const TOP_CATEGORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrders {
    pub category: String,
    pub order_count: usize,
}

/// Top categories by distinct order count, at most [`TOP_CATEGORY_LIMIT`] rows.
pub fn top_categories(rows: &[JoinedRow]) -> Vec<CategoryOrders> {
    let mut orders_per_category: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for row in rows {
        let orders = orders_per_category
            .entry(row.category_english.as_str())
            .or_insert_with(|| {
                first_seen.push(row.category_english.as_str());
                HashSet::new()
            });
        orders.insert(row.order_id.as_str());
    }

    let mut table: Vec<CategoryOrders> = first_seen
        .into_iter()
        .map(|category| CategoryOrders {
            category: category.to_string(),
            order_count: orders_per_category[category].len(),
        })
        .collect();

    table.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    table.truncate(TOP_CATEGORY_LIMIT);
    table
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTypeUsage {
    pub payment_type: String,
    pub customer_count: usize,
}

/// Payment methods ranked by distinct customer count. A customer paying the
/// same way on several orders counts once; rows without a payment contribute
/// to no group.
pub fn payment_type_usage(rows: &[JoinedRow]) -> Vec<PaymentTypeUsage> {
    let mut customers_per_type: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for row in rows {
        let Some(payment_type) = row.payment_type.as_deref() else {
            continue;
        };
        let customers = customers_per_type.entry(payment_type).or_insert_with(|| {
            first_seen.push(payment_type);
            HashSet::new()
        });
        customers.insert(row.customer_id.as_str());
    }

    let mut table: Vec<PaymentTypeUsage> = first_seen
        .into_iter()
        .map(|payment_type| PaymentTypeUsage {
            payment_type: payment_type.to_string(),
            customer_count: customers_per_type[payment_type].len(),
        })
        .collect();

    table.sort_by(|a, b| b.customer_count.cmp(&a.customer_count));
    table
}
