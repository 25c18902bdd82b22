use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;

use crate::errors::{FileSystemError, ReportError};
use crate::models::Order;
use crate::orders::process_monthly_orders;

/// Builds the cross-file top-shipped-orders report.
///
/// Enumerates regular files directly under `dir` whose file name matches
/// the glob-style `search_pattern` (for example `*.csv`), runs each
/// through [`process_monthly_orders`], and concatenates the per-file
/// results. Matching is by UTF-8 file name: a name that is not valid
/// UTF-8 never matches any pattern. Matched files are processed in
/// file-name order: raw directory enumeration order is OS-dependent and
/// would otherwise leak into the report.
///
/// # Errors
/// [`ReportError::Pattern`] when the pattern is malformed,
/// [`ReportError::FileSystem`] when the directory or a matched file
/// cannot be read, and [`ReportError::Parse`] when any matched file fails
/// to parse. The first failure aborts the whole report; partial results
/// are discarded.
pub fn generate_orders_report(
    dir: &Path,
    search_pattern: &str,
) -> Result<Vec<Order>, ReportError> {
    let pattern = Pattern::new(search_pattern).map_err(|source| ReportError::Pattern {
        pattern: search_pattern.to_string(),
        source,
    })?;

    let mut paths = matching_files(dir, &pattern)?;
    paths.sort();

    let mut report = Vec::new();
    for path in &paths {
        let contents = fs::read_to_string(path).map_err(|source| FileSystemError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let orders = process_monthly_orders(contents.lines())
            .map_err(|source| ReportError::parse(path, source))?;

        debug!(path = %path.display(), orders = orders.len(), "processed monthly file");
        report.extend(orders);
    }

    debug!(files = paths.len(), orders = report.len(), "orders report complete");
    Ok(report)
}

/// Regular files directly under `dir` whose file name matches `pattern`.
fn matching_files(dir: &Path, pattern: &Pattern) -> Result<Vec<PathBuf>, ReportError> {
    let entries = fs::read_dir(dir).map_err(|source| FileSystemError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FileSystemError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name_matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name));
        if name_matches {
            paths.push(path);
        }
    }
    Ok(paths)
}
