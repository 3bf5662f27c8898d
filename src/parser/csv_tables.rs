// Header-driven CSV decoding; columns we do not model are ignored.
use crate::loader::SourceTable;
use crate::model::TableError;
use serde::de::DeserializeOwned;

pub fn parse_table<T: DeserializeOwned>(table: SourceTable, data: &str) -> Result<Vec<T>, TableError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut rows = Vec::new();

    for record in reader.deserialize() {
        let row: T = record.map_err(|e| TableError::Csv {
            table: table.name(),
            source: e,
        })?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderItem, Payment, Product};
    use chrono::{Datelike, Timelike};

    #[test]
    fn decodes_orders_by_header_name() {
        let data = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_approved_at
o1,c1,delivered,2017-10-02 10:56:33,2017-10-02 11:07:15
o2,c2,shipped,2018-07-24 20:41:37,2018-07-26 03:24:27
";
        let orders: Vec<Order> = parse_table(SourceTable::Orders, data).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, "o1");
        assert_eq!(orders[0].order_purchase_timestamp.year(), 2017);
        assert_eq!(orders[1].order_purchase_timestamp.hour(), 20);
    }

    #[test]
    fn empty_optional_columns_decode_to_none() {
        let data = "\
product_id,product_category_name,product_photos_qty
p1,cama_mesa_banho,2
p2,,1
";
        let products: Vec<Product> = parse_table(SourceTable::Products, data).unwrap();
        assert_eq!(products[0].product_category_name.as_deref(), Some("cama_mesa_banho"));
        assert!(products[1].product_category_name.is_none());
    }

    #[test]
    fn malformed_timestamp_is_a_decode_error() {
        let data = "\
order_id,customer_id,order_status,order_purchase_timestamp
o1,c1,delivered,not-a-date
";
        let result: Result<Vec<Order>, _> = parse_table(SourceTable::Orders, data);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("orders"));
    }

    #[test]
    fn decodes_payments_with_empty_value() {
        let data = "\
order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,credit_card,3,129.90
o2,1,boleto,1,
";
        let payments: Vec<Payment> = parse_table(SourceTable::Payments, data).unwrap();
        assert_eq!(payments[0].payment_sequential, 1);
        assert_eq!(payments[0].payment_value, Some(129.90));
        assert!(payments[1].payment_value.is_none());
    }

    #[test]
    fn decodes_order_items() {
        let data = "\
order_id,order_item_id,product_id,seller_id,shipping_limit_date,price,freight_value
o1,1,p1,s1,2017-10-06 11:07:15,58.90,13.29
";
        let items: Vec<OrderItem> = parse_table(SourceTable::OrderItems, data).unwrap();
        assert_eq!(items[0].seller_id, "s1");
        assert_eq!(items[0].price, 58.90);
        assert_eq!(items[0].freight_value, 13.29);
    }
}
