use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::ParseError;
use crate::models::Order;

/// Maximum number of orders a monthly report keeps.
const REPORT_LIMIT: usize = 5;

/// Comma-separated fields an order line must carry, in fixed positions:
/// `orderNumber,orderDate,status,customerNumber,orderTotal`.
const ORDER_FIELDS: usize = 5;

/// Parses raw order lines, one [`Order`] per line in input order.
///
/// Each line is split on literal commas into exactly [`ORDER_FIELDS`]
/// positional fields. No trimming and no quoting: a comma embedded in a
/// field changes the field count and fails the line.
///
/// # Errors
/// [`ParseError::FieldCount`] on any other field count (an empty or
/// whitespace-only line splits into a single field);
/// [`ParseError::Field`] when a field fails its positional conversion.
pub fn parse_order_lines<I, S>(lines: I) -> Result<Vec<Order>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut orders = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        orders.push(parse_order_line(line.as_ref(), idx + 1)?);
    }
    Ok(orders)
}

fn parse_order_line(line: &str, line_no: usize) -> Result<Order, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != ORDER_FIELDS {
        return Err(ParseError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let order_number = parse_field::<u32>(fields[0], line_no, "order number", "an integer")?;
    let order_date =
        parse_field::<NaiveDate>(fields[1], line_no, "order date", "a YYYY-MM-DD date")?;
    let customer_number =
        parse_field::<u32>(fields[3], line_no, "customer number", "an integer")?;
    let order_total =
        parse_field::<Decimal>(fields[4], line_no, "order total", "a decimal amount")?;

    Ok(Order::new(
        order_number,
        order_date,
        fields[2],
        customer_number,
        order_total,
    ))
}

fn parse_field<T: FromStr>(
    value: &str,
    line: usize,
    field: &'static str,
    expected: &'static str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::Field {
        line,
        field,
        value: value.to_string(),
        expected,
    })
}

/// Reduces one monthly batch to its report rows: shipped orders only,
/// sorted by total descending, at most [`REPORT_LIMIT`] of them.
///
/// The sort is stable, so orders with equal totals keep the relative
/// order they had after filtering. Fewer than five shipped orders come
/// back whole, no padding.
pub fn top_shipped(orders: Vec<Order>) -> Vec<Order> {
    let mut shipped: Vec<Order> = orders.into_iter().filter(Order::is_shipped).collect();
    shipped.sort_by(|a, b| b.order_total().cmp(a.order_total()));
    shipped.truncate(REPORT_LIMIT);
    shipped
}

/// Parses one monthly file's lines and reduces them to report rows.
pub fn process_monthly_orders<I, S>(lines: I) -> Result<Vec<Order>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(top_shipped(parse_order_lines(lines)?))
}
