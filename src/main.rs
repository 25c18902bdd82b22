use std::env;
use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use sales_reports::report::generate_orders_report;
use sales_reports::writer::{CsvRecordWriter, RecordWrite};

const DEFAULT_SEARCH_PATTERN: &str = "*.csv";

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let (data_dir, pattern) = match args.len() {
        2 => (args[1].as_str(), DEFAULT_SEARCH_PATTERN),
        3 => (args[1].as_str(), args[2].as_str()),
        _ => Err(anyhow!("usage: sales-reports <data-dir> [search-pattern]"))?,
    };

    let report = generate_orders_report(Path::new(data_dir), pattern)?;

    let mut writer = CsvRecordWriter::stdout();
    for order in &report {
        writer.write_record(order)?;
    }
    writer.flush()?;

    Ok(())
}

/// Logs go to stderr so stdout stays clean report data.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
