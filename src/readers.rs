use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{FileSystemError, ParseError, ReportError};
use crate::models::{Customer, Product};

/// Processing-center tag forced onto every customer this system reads.
pub const PROCESSING_CENTER: &str = "LODS";

/// Width in characters of the marker prefixing every product line.
const PRODUCT_LINE_MARKER: usize = 2;

/// Reads one customer from a single-object JSON file under `dir`.
///
/// Whatever the source document carries (or omits) for its processing
/// center, the returned customer is tagged with [`PROCESSING_CENTER`].
///
/// # Errors
/// [`ReportError::FileSystem`] when the file cannot be read,
/// [`ReportError::Parse`] when the contents are not a customer document.
pub fn read_customer(dir: &Path, file_name: &str) -> Result<Customer, ReportError> {
    let path = dir.join(file_name);
    let contents = fs::read_to_string(&path).map_err(|source| FileSystemError::ReadFile {
        path: path.clone(),
        source,
    })?;

    let customer: Customer = serde_json::from_str(&contents)
        .map_err(|source| ReportError::parse(&path, ParseError::CustomerJson { source }))?;

    debug!(path = %path.display(), customer = %customer.customer_number(), "read customer document");
    Ok(customer.with_processing_center(PROCESSING_CENTER))
}

/// Reads the product catalog from a line-delimited file under `dir`.
///
/// Every line carries a fixed 2-character marker ahead of its JSON
/// payload; the marker is stripped and the remainder deserialized.
/// File order is preserved: N valid lines yield N products.
///
/// # Errors
/// [`ReportError::FileSystem`] when the file cannot be read,
/// [`ReportError::Parse`] when a line is shorter than its marker or its
/// payload is not a product object.
pub fn read_products(dir: &Path, file_name: &str) -> Result<Vec<Product>, ReportError> {
    let path = dir.join(file_name);
    let contents = fs::read_to_string(&path).map_err(|source| FileSystemError::ReadFile {
        path: path.clone(),
        source,
    })?;

    let mut products = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let payload = strip_line_marker(line).ok_or_else(|| {
            ReportError::parse(&path, ParseError::ProductLineTooShort { line: line_no })
        })?;
        let product = serde_json::from_str(payload).map_err(|source| {
            ReportError::parse(
                &path,
                ParseError::ProductJson {
                    line: line_no,
                    source,
                },
            )
        })?;
        products.push(product);
    }

    debug!(path = %path.display(), products = products.len(), "read product file");
    Ok(products)
}

/// Strips the fixed-width line marker, or `None` when the line is shorter
/// than the marker.
fn strip_line_marker(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    for _ in 0..PRODUCT_LINE_MARKER {
        chars.next()?;
    }
    Some(chars.as_str())
}
