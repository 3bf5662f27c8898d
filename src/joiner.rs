//! Builds the denormalized table the analyzers consume.
//!
//! Merge sequence (order matters for which rows survive):
//!   1. orders LEFT JOIN order_items ON order_id
//!   2. INNER JOIN products ON product_id (drops item-less orders and
//!      unknown products)
//!   3. LEFT JOIN order_payments ON order_id
//!   4. LEFT JOIN order_reviews ON order_id
//!   5. INNER JOIN customers ON customer_id
//!   6. INNER JOIN category translations ON product_category_name
//!
//! Joins multiply rows per matching key: an order with two items and two
//! payments produces four rows. Dimension tables are keyed lookups; the first
//! row wins on a duplicate key.

use crate::model::{Customer, Dataset, JoinedRow, OrderItem, Payment, Product, Review};
use std::collections::HashMap;

pub fn join_tables(data: &Dataset) -> Vec<JoinedRow> {
    let mut products: HashMap<&str, &Product> = HashMap::new();
    for product in &data.products {
        products.entry(product.product_id.as_str()).or_insert(product);
    }

    let mut customers: HashMap<&str, &Customer> = HashMap::new();
    for customer in &data.customers {
        customers.entry(customer.customer_id.as_str()).or_insert(customer);
    }

    let mut translations: HashMap<&str, &str> = HashMap::new();
    for translation in &data.category_translations {
        translations
            .entry(translation.product_category_name.as_str())
            .or_insert(translation.product_category_name_english.as_str());
    }

    let mut items_by_order: HashMap<&str, Vec<&OrderItem>> = HashMap::new();
    for item in &data.order_items {
        items_by_order.entry(item.order_id.as_str()).or_default().push(item);
    }

    let mut payments_by_order: HashMap<&str, Vec<&Payment>> = HashMap::new();
    for payment in &data.payments {
        payments_by_order.entry(payment.order_id.as_str()).or_default().push(payment);
    }

    let mut reviews_by_order: HashMap<&str, Vec<&Review>> = HashMap::new();
    for review in &data.reviews {
        reviews_by_order.entry(review.order_id.as_str()).or_default().push(review);
    }

    let mut rows = Vec::new();

    for order in &data.orders {
        let Some(customer) = customers.get(order.customer_id.as_str()) else {
            continue;
        };

        // An order without items survives step 1 with null item columns but
        // cannot match a product in step 2, so it yields no rows.
        let Some(items) = items_by_order.get(order.order_id.as_str()) else {
            continue;
        };

        let payment_slots: Vec<Option<&Payment>> = match payments_by_order.get(order.order_id.as_str()) {
            Some(payments) => payments.iter().map(|p| Some(*p)).collect(),
            None => vec![None],
        };
        let review_slots: Vec<Option<&Review>> = match reviews_by_order.get(order.order_id.as_str()) {
            Some(reviews) => reviews.iter().map(|r| Some(*r)).collect(),
            None => vec![None],
        };

        for item in items {
            let Some(product) = products.get(item.product_id.as_str()) else {
                continue;
            };
            let Some(category_name) = product.product_category_name.as_deref() else {
                continue;
            };
            let Some(category_english) = translations.get(category_name) else {
                continue;
            };

            for payment in &payment_slots {
                for review in &review_slots {
                    rows.push(JoinedRow {
                        order_id: order.order_id.clone(),
                        customer_id: order.customer_id.clone(),
                        customer_unique_id: customer.customer_unique_id.clone(),
                        order_status: order.order_status.clone(),
                        purchase_ts: order.order_purchase_timestamp,
                        order_item_id: item.order_item_id,
                        product_id: item.product_id.clone(),
                        item_price: item.price,
                        freight_value: item.freight_value,
                        category_name: category_name.to_string(),
                        category_english: category_english.to_string(),
                        payment_type: payment.map(|p| p.payment_type.clone()),
                        payment_installments: payment.map(|p| p.payment_installments),
                        payment_value: payment.and_then(|p| p.payment_value),
                        review_id: review.map(|r| r.review_id.clone()),
                        review_score: review.and_then(|r| r.review_score),
                        customer_city: customer.customer_city.clone(),
                        customer_state: customer.customer_state.clone(),
                    });
                }
            }
        }
    }

    rows
}
