//! Fusker Core Library
//!
//! This library expands compact URL range patterns such as
//! `https://example.com/gallery/img[001-120].jpg` into the full list of URLs
//! they denote, then downloads each URL into a directory, recording one
//! outcome per URL.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`pattern`] - Range token grammars and pattern expansion
//! - [`download`] - HTTP transport and the sequential download pipeline
//! - [`url_list`] - Saving expanded URL lists to disk
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let urls = fusker_core::expand_pattern("https://example.com/img[1-3].jpg")?;
//! let outcomes = fusker_core::download_all(Path::new("./downloads"), &urls).await;
//! for outcome in &outcomes {
//!     println!("{}: {}", outcome.url(), outcome.is_success());
//! }
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::Path;

pub mod download;
pub mod pattern;
#[cfg(test)]
pub mod test_support;
pub mod url_list;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use download::{
    DownloadError, DownloadOutcome, DownloadPipeline, FailureKind, HttpClient, OutcomeSummary,
    Transport, TransportOptions,
};
pub use pattern::{
    ExpansionMode, PatternError, PatternExpander, RangeToken, TokenClass, split_pattern_list,
};
pub use url_list::{UrlListError, append_urls};

/// Expands one pattern into its concrete URLs using the default mode.
///
/// # Errors
///
/// Returns a [`PatternError`] if any token has an inverted or invalid range.
pub fn expand_pattern(pattern: &str) -> Result<Vec<String>, PatternError> {
    pattern::expand(pattern)
}

/// Downloads `urls` into `destination_dir` one at a time with a default
/// [`HttpClient`].
///
/// Never fails as a whole; the returned outcomes match `urls` one to one.
pub async fn download_all(destination_dir: &Path, urls: &[String]) -> Vec<DownloadOutcome> {
    DownloadPipeline::new(HttpClient::new())
        .run(destination_dir, urls)
        .await
}
