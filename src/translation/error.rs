//! Error types for loading the translation dataset and code reference files.
//!
//! Both tiers of startup failure live here: the file could not be read at
//! all (`LoadError::Io`), or it was read but its contents are malformed
//! (`LoadError::Parse`). Lookup misses at runtime are not errors and never
//! produce one of these.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing dataset or reference text already in memory.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The country dataset is not a JSON array of well-formed records.
    #[error("invalid country dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A reference file could not be read as tab-separated records.
    #[error("invalid reference file: {0}")]
    Csv(#[from] csv::Error),

    /// A reference line has fewer tab-separated columns than the layout needs.
    #[error("line {line}: expected at least {expected} tab-separated columns, found {found}")]
    MissingColumn {
        /// One-based line number in the reference file
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while loading a data file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Read a data file to a string, tagging failures with the path.
pub(crate) fn read_source(path: &std::path::Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
