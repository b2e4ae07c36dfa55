//! Error types for the document model and URL helpers.
//!
//! The paginator itself never surfaces these: malformed state is clamped and
//! failed side effects are logged and skipped.

use crate::document::ElementId;
use thiserror::Error;

/// Errors returned by the fallible helpers of this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An element handle that does not belong to the document.
    #[error("unknown element handle {0:?}")]
    UnknownElement(ElementId),
    /// A location that could not be parsed as an absolute URL.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        /// The rejected location string.
        url: String,
        /// Parser diagnostic.
        #[source]
        source: url::ParseError,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
