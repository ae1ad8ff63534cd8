//! Error types for the content-stream rewriting library.

use thiserror::Error;

/// Primary error type for rewriting operations.
///
/// Every variant is fatal for the whole run: nothing is retried and no
/// partially rewritten page is ever committed.
#[derive(Error, Debug)]
pub enum RewriteError {
    /// The document cannot be both read and rewritten in one session.
    #[error("document must be opened for reading and rewriting (stamping mode)")]
    StampingMode,

    #[error("page {0} not found")]
    PageNotFound(u32),

    /// A configured color could not be parsed or encoded. Colors observed
    /// while reading a stream never raise this; they simply never match.
    #[error("unsupported color: {0}")]
    UnsupportedColor(String),

    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for RewriteError.
pub type Result<T> = std::result::Result<T, RewriteError>;
