//! Error types for catalogue loading.

use thiserror::Error;

/// Everything that can go wrong while turning a source into an
/// [`InventoryTable`](super::model::InventoryTable).
#[derive(Error, Debug)]
pub enum LoadError {
    /// The HTTP request failed or returned an error status.
    #[error("fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The header row could not be read at all.
    #[error("reading CSV header: {0}")]
    Header(#[source] csv::Error),

    /// Required columns are absent from the header row.
    #[error("schema mismatch, missing column(s): {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// A data row does not match the product schema.
    #[error("CSV line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;
