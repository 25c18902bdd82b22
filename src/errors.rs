use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Filesystem access failures: missing or unreadable files and directories.
///
/// Never recovered locally; callers decide what a failed report means.
/// Messages name the failing operation; the cause stays on the `source`
/// chain.
#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("cannot read {path}")]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("cannot list directory {path}")]
    ListDir { path: PathBuf, source: io::Error },
}

/// Malformed input content.
///
/// Line numbers are 1-based. Variants carry no file path: operations that
/// touched the filesystem wrap these as [`ReportError::Parse`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed customer JSON")]
    CustomerJson { source: serde_json::Error },

    #[error("line {line}: malformed product JSON")]
    ProductJson { line: usize, source: serde_json::Error },

    #[error("line {line}: shorter than the 2-character line marker")]
    ProductLineTooShort { line: usize },

    #[error("line {line}: expected 5 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {field} {value:?} is not {expected}")]
    Field {
        line: usize,
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Error returned by every operation that touches the filesystem.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    #[error("cannot parse {path}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("invalid search pattern {pattern:?}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}

impl ReportError {
    pub(crate) fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
