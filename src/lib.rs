//! Flat-file sales data readers and the monthly top-orders report.
//!
//! Three external formats are consumed:
//!
//! - a customer file: one JSON object per file;
//! - a product file: one JSON object per line, each line carrying a fixed
//!   2-character marker to strip before parsing;
//! - monthly order files: comma-separated lines of exactly five positional
//!   fields, `orderNumber,orderDate,status,customerNumber,orderTotal`.
//!
//! Every operation is a synchronous read-transform-return with no state
//! kept between calls. The report pipeline is
//! [`report::generate_orders_report`]: enumerate files matching a glob
//! pattern, parse each one ([`orders::parse_order_lines`]), keep the top
//! five shipped orders by total ([`orders::top_shipped`]), and
//! concatenate. Currency fields are exact decimals throughout; callers
//! present the returned collections themselves (the bundled binary prints
//! them as CSV).

pub mod errors;
pub mod models;
pub mod orders;
pub mod readers;
pub mod report;
pub mod writer;

pub use errors::{FileSystemError, ParseError, ReportError};
pub use models::{Customer, Order, Product};
pub use orders::{parse_order_lines, process_monthly_orders, top_shipped};
pub use readers::{PROCESSING_CENTER, read_customer, read_products};
pub use report::generate_orders_report;
