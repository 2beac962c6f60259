//! Error types for the scraping pipeline.
//!
//! Failures are named and inspectable at the fetch and extraction
//! boundaries, and fatal by default at the top level: `main` propagates
//! every [`ScrapeError`] and exits non-zero. Nothing in the pipeline
//! catches or recovers.

use thiserror::Error;

/// Errors that can occur while fetching or extracting the front page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The HTTP request failed: DNS, connection, timeout, or a non-success
    /// status reported by the server.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A story anchor matched the title selector but carries no `href`.
    #[error("story anchor at position {position} has no href attribute")]
    MissingHref {
        /// Zero-based position of the anchor among the selected titles.
        position: usize,
    },
}
