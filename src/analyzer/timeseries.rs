//! Monthly trend views over the purchase timestamp.
//!
//! The two views deliberately differ: the order-count trend drops its final
//! month (the snapshot's most recent month is assumed incomplete), while the
//! revenue trend keeps every calendar month from first to last purchase,
//! including empty months as zero rows.

use crate::model::JoinedRow;
use crate::utils::{month_key, month_label, next_month};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyOrderCount {
    pub month: String,
    pub order_count: usize,
}

/// Orders per month, chronologically, trailing month dropped. Counts every
/// joined row, so an order with three items contributes three.
pub fn monthly_order_counts(rows: &[JoinedRow]) -> Vec<MonthlyOrderCount> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for row in rows {
        *buckets.entry(month_key(&row.purchase_ts)).or_insert(0) += 1;
    }

    let mut table: Vec<MonthlyOrderCount> = buckets
        .into_iter()
        .map(|((year, month), order_count)| MonthlyOrderCount {
            month: month_label(year, month),
            order_count,
        })
        .collect();

    // The latest month is a partial snapshot.
    table.pop();
    table
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub month: String,
    pub order_count: usize,
    pub revenue: f64,
}

/// Distinct orders and summed payment value per calendar month. Null payment
/// values are skipped; months without any purchase appear as zero rows.
pub fn monthly_revenue(rows: &[JoinedRow]) -> Vec<MonthlyRevenue> {
    let mut buckets: BTreeMap<(i32, u32), (HashSet<&str>, f64)> = BTreeMap::new();
    for row in rows {
        let (orders, revenue) = buckets.entry(month_key(&row.purchase_ts)).or_default();
        orders.insert(row.order_id.as_str());
        if let Some(value) = row.payment_value {
            *revenue += value;
        }
    }

    let (Some((&first, _)), Some((&last, _))) = (buckets.iter().next(), buckets.iter().next_back())
    else {
        return Vec::new();
    };

    let mut table = Vec::new();
    let mut key = first;
    loop {
        let (order_count, revenue) = match buckets.get(&key) {
            Some((orders, revenue)) => (orders.len(), *revenue),
            None => (0, 0.0),
        };
        table.push(MonthlyRevenue {
            month: month_label(key.0, key.1),
            order_count,
            revenue,
        });
        if key == last {
            break;
        }
        key = next_month(key);
    }

    table
}
