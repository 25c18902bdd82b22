use chrono::NaiveDate;
use getset::Getters;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

const SHIPPED_STATUS: &str = "Shipped";

/// Customer master record, read from a single-object JSON document.
///
/// The source document's `processingCenter` (if any) never survives a
/// read: the customer reader replaces it with a fixed tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[getset(get = "pub")]
    customer_number: u32,
    #[getset(get = "pub")]
    customer_name: String,
    #[getset(get = "pub")]
    phone: String,
    #[getset(get = "pub")]
    city: String,
    #[getset(get = "pub")]
    state: String,
    #[getset(get = "pub")]
    #[serde(default)]
    processing_center: String,
}

impl Customer {
    /// Returns a copy of this customer with `processing_center` replaced.
    ///
    /// # Arguments
    /// * `center` - The processing center tag to assign.
    ///
    /// # Returns
    /// A new customer, identical except for the replaced field.
    pub fn with_processing_center(self, center: impl Into<String>) -> Self {
        Self {
            processing_center: center.into(),
            ..self
        }
    }
}

/// Catalog entry, one per line of the prefixed product file.
///
/// `MSRP` deserializes from the raw JSON number token, keeping digits an
/// `f64` round-trip would lose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[getset(get = "pub")]
    product_code: String,
    #[getset(get = "pub")]
    product_name: String,
    #[getset(get = "pub")]
    #[serde(rename = "MSRP", with = "rust_decimal::serde::arbitrary_precision")]
    msrp: Decimal,
}

/// One order line from a monthly file:
/// `orderNumber,orderDate,status,customerNumber,orderTotal`.
///
/// `customer_number` references a [`Customer`] by number; no referential
/// integrity is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[getset(get = "pub")]
    order_number: u32,
    #[getset(get = "pub")]
    order_date: NaiveDate,
    #[getset(get = "pub")]
    status: String,
    #[getset(get = "pub")]
    customer_number: u32,
    #[getset(get = "pub")]
    order_total: Decimal,
}

impl Order {
    pub fn new(
        order_number: u32,
        order_date: NaiveDate,
        status: impl Into<String>,
        customer_number: u32,
        order_total: Decimal,
    ) -> Self {
        Self {
            order_number,
            order_date,
            status: status.into(),
            customer_number,
            order_total,
        }
    }

    /// Whether the status equals exactly `"Shipped"` (case-sensitive).
    pub fn is_shipped(&self) -> bool {
        self.status == SHIPPED_STATUS
    }
}
