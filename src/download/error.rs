//! Error types for the download module.
//!
//! Every variant carries the URL or path it concerns, so a failure recorded
//! in a batch outcome is readable on its own.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Broad failure classes recorded in batch outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request could not be made or the server refused it.
    Transport,
    /// The response body could not be read or written to disk.
    Stream,
    /// The batch was interrupted before this item was attempted.
    Cancelled,
}

impl FailureKind {
    /// Returns the stable lowercase label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Stream => "stream",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Errors that can occur while fetching a single URL.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The URL could not be parsed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// The URL uses a scheme other than http or https.
    #[error("unsupported scheme '{scheme}' in {url}")]
    UnsupportedScheme {
        /// The URL that was rejected.
        url: String,
        /// Its scheme.
        scheme: String,
    },

    /// No usable file name after the last `/` of the URL.
    #[error("no file name in {url}")]
    MissingFilename {
        /// The URL that was rejected.
        url: String,
    },

    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error downloading {url}: {source}")]
    Network {
        /// The URL that failed to download.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// No response headers arrived within the timeout.
    #[error("timeout downloading {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// The server answered with anything other than 200.
    #[error("HTTP {status} downloading {url}")]
    HttpStatus {
        /// The URL that returned the status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body broke off or stalled past the timeout while streaming.
    #[error("stream error downloading {url}: {source}")]
    Stream {
        /// The URL being streamed.
        url: String,
        /// The underlying body error.
        #[source]
        source: reqwest::Error,
    },

    /// File system error during download (create file, write, etc.)
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates an unsupported scheme error.
    pub fn unsupported_scheme(url: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            url: url.into(),
            scheme: scheme.into(),
        }
    }

    /// Creates a missing file name error.
    pub fn missing_filename(url: impl Into<String>) -> Self {
        Self::MissingFilename { url: url.into() }
    }

    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a body stream error.
    pub fn stream(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Stream {
            url: url.into(),
            source,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classifies the error for outcome reporting.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidUrl { .. }
            | Self::UnsupportedScheme { .. }
            | Self::MissingFilename { .. }
            | Self::Network { .. }
            | Self::Timeout { .. }
            | Self::HttpStatus { .. } => FailureKind::Transport,
            Self::Stream { .. } | Self::Io { .. } => FailureKind::Stream,
        }
    }
}

// No `From<reqwest::Error>` / `From<std::io::Error>`: every variant needs the
// url or path, which the source errors don't carry.
