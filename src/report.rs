//! Plain-text rendering of the five reporting views, with the same scalar
//! highlights the dashboard charts carry (leading category, totals, averages).

use crate::analyzer::rankings::{CategoryOrders, PaymentTypeUsage};
use crate::analyzer::rfm::RfmRecord;
use crate::analyzer::timeseries::{MonthlyOrderCount, MonthlyRevenue};

fn print_section(title: &str) {
    println!("\n{title}");
    println!("{}", "─".repeat(64));
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn average(rfm: &[RfmRecord], metric: impl Fn(&RfmRecord) -> f64) -> f64 {
    if rfm.is_empty() {
        return 0.0;
    }
    rfm.iter().map(&metric).sum::<f64>() / rfm.len() as f64
}

fn print_top5(rfm: &[RfmRecord], label: &str, metric: impl Fn(&RfmRecord) -> f64) {
    let mut sorted: Vec<&RfmRecord> = rfm.iter().collect();
    sorted.sort_by(|a, b| {
        metric(b)
            .partial_cmp(&metric(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    println!("Top customers by {label}:");
    for record in sorted.into_iter().take(5) {
        println!("  {:<34} {:>12.2}", record.customer_id, metric(record));
    }
}

pub fn render(
    top_categories: &[CategoryOrders],
    monthly_orders: &[MonthlyOrderCount],
    monthly_revenue: &[MonthlyRevenue],
    payment_types: &[PaymentTypeUsage],
    rfm: &[RfmRecord],
) {
    print_section("Top product categories by orders");
    match top_categories.first() {
        Some(leader) => println!(
            "Leading category: {} ({} orders)",
            leader.category, leader.order_count
        ),
        None => println!("no data"),
    }
    for row in top_categories {
        println!("{:<40} {:>8}", row.category, row.order_count);
    }

    print_section("Orders per month");
    let total_orders: usize = monthly_orders.iter().map(|r| r.order_count).sum();
    println!("Total orders: {total_orders}");
    for row in monthly_orders {
        println!("{:<10} {:>8}", row.month, row.order_count);
    }

    print_section("Revenue per month");
    let total_revenue: f64 = monthly_revenue.iter().map(|r| r.revenue).sum();
    println!("Total revenue: {total_revenue:.2}");
    for row in monthly_revenue {
        println!("{:<10} {:>8} {:>14.2}", row.month, row.order_count, row.revenue);
    }

    print_section("Payment methods by customers");
    match payment_types.first() {
        Some(leader) => println!(
            "Most used: {} ({} customers)",
            leader.payment_type, leader.customer_count
        ),
        None => println!("no data"),
    }
    for row in payment_types {
        println!("{:<20} {:>8}", row.payment_type, row.customer_count);
    }

    print_section("RFM segmentation");
    if rfm.is_empty() {
        println!("no data");
        return;
    }
    println!("Customers: {}", rfm.len());
    println!(
        "Average recency (days): {:.2}",
        round2(average(rfm, |r| r.recency_days as f64))
    );
    println!(
        "Average frequency: {:.2}",
        round2(average(rfm, |r| r.frequency as f64))
    );
    println!(
        "Average monetary: {:.2}",
        round2(average(rfm, |r| r.monetary))
    );
    print_top5(rfm, "recency (days)", |r| r.recency_days as f64);
    print_top5(rfm, "frequency", |r| r.frequency as f64);
    print_top5(rfm, "monetary", |r| r.monetary);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer_id: &str, frequency: usize, monetary: f64, recency_days: i64) -> RfmRecord {
        RfmRecord {
            customer_id: customer_id.to_string(),
            frequency,
            monetary,
            recency_days,
        }
    }

    #[test]
    fn averages_match_the_dashboard_rounding() {
        let rfm = vec![
            record("c1", 2, 100.0, 26),
            record("c2", 1, 35.55, 0),
        ];
        assert_eq!(round2(average(&rfm, |r| r.recency_days as f64)), 13.0);
        assert_eq!(round2(average(&rfm, |r| r.frequency as f64)), 1.5);
        assert_eq!(round2(average(&rfm, |r| r.monetary)), 67.78);
    }

    #[test]
    fn average_of_empty_table_is_zero() {
        assert_eq!(average(&[], |r| r.monetary), 0.0);
    }

    #[test]
    fn render_handles_empty_views_without_panicking() {
        render(&[], &[], &[], &[], &[]);
    }
}
