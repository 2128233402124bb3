//! HTTP download pipeline for streaming files to disk.
//!
//! This module provides functionality for downloading files from HTTP/HTTPS URLs
//! with streaming support to handle large files efficiently.
//!
//! # Features
//!
//! - Streaming downloads (memory-efficient for large files)
//! - File name taken from the URL's final path segment
//! - Configurable timeouts (30s connect, 5min request by default)
//! - Strictly sequential batches that record a per-URL outcome
//! - Structured error types with full context
//!
//! # Example
//!
//! ```no_run
//! use fusker_core::download::HttpClient;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let file_path = client
//!     .download_to_file("https://example.com/img001.jpg", Path::new("./downloads"))
//!     .await?;
//! println!("Downloaded: {}", file_path.display());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod constants;
mod error;
pub mod filename;
mod pipeline;
mod transport;

pub use client::{HttpClient, TransportOptions};
pub use error::{DownloadError, FailureKind};
pub use pipeline::{DownloadOutcome, DownloadPipeline, OutcomeSummary};
pub use transport::Transport;
