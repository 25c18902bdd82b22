use std::io::{self, Stdout, Write};

use anyhow::{Result, anyhow};
use csv::{Writer, WriterBuilder};
use serde::Serialize;

/// RecordWrite trait provides methods to write serializable records to a sink.
pub trait RecordWrite {
    /// Writes one record to the sink.
    ///
    /// # Arguments
    /// * `record` - The record to write, anything Serializable.
    ///
    /// # Returns
    /// A Result indicating success or failure.
    fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()>;

    /// Flushes anything the sink buffered.
    fn flush(&mut self) -> Result<()>;
}

/// CSV record writer over any byte sink.
///
/// The first record written emits a header row named after the record's
/// serialized field names.
pub struct CsvRecordWriter<W: Write> {
    writer: Writer<W>,
}

impl CsvRecordWriter<Stdout> {
    /// Writer that prints records to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CsvRecordWriter<W> {
    pub fn new(sink: W) -> Self {
        CsvRecordWriter {
            writer: WriterBuilder::new().from_writer(sink),
        }
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow!("finalize csv output: {e}"))
    }
}

impl<W: Write> RecordWrite for CsvRecordWriter<W> {
    fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()> {
        Ok(self.writer.serialize(record)?)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.writer.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Order;
    use anyhow::Result;
    use chrono::NaiveDate;
    use rust_decimal::prelude::*;

    #[test]
    fn test_csv_writer_echoes_the_order_line_format() -> Result<()> {
        let order = Order::new(
            10100,
            NaiveDate::from_ymd_opt(2003, 1, 6).unwrap(),
            "Shipped",
            363,
            dec!(10223.83),
        );

        let mut writer = CsvRecordWriter::new(Vec::new());
        writer.write_record(&order)?;
        let bytes = writer.into_inner()?;

        let output = String::from_utf8(bytes)?;
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("orderNumber,orderDate,status,customerNumber,orderTotal")
        );
        assert_eq!(lines.next(), Some("10100,2003-01-06,Shipped,363,10223.83"));
        assert_eq!(lines.next(), None);
        Ok(())
    }

    #[test]
    fn test_csv_writer_writes_one_row_per_record() -> Result<()> {
        let orders = [
            Order::new(
                10110,
                NaiveDate::from_ymd_opt(2003, 2, 4).unwrap(),
                "Shipped",
                187,
                dec!(7674.94),
            ),
            Order::new(
                10111,
                NaiveDate::from_ymd_opt(2003, 2, 10).unwrap(),
                "Shipped",
                129,
                dec!(4208.23),
            ),
        ];

        let mut writer = CsvRecordWriter::new(Vec::new());
        for order in &orders {
            writer.write_record(order)?;
        }
        let output = String::from_utf8(writer.into_inner()?)?;

        // Header plus one row per order.
        assert_eq!(output.lines().count(), 3);
        Ok(())
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("sink closed"))
        }
    }

    #[test]
    fn test_csv_writer_surfaces_sink_failures() {
        let order = Order::new(
            10100,
            NaiveDate::from_ymd_opt(2003, 1, 6).unwrap(),
            "Shipped",
            363,
            dec!(10223.83),
        );

        let mut writer = CsvRecordWriter::new(FailingSink);
        let result = writer
            .write_record(&order)
            .and_then(|_| RecordWrite::flush(&mut writer));
        assert!(result.is_err());
    }
}
