//! The seam between the download pipeline and the code that performs a fetch.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::DownloadError;

/// Retrieves one URL into a directory.
///
/// [`HttpClient`](super::HttpClient) is the production implementation; the
/// pipeline only depends on this trait so batches can run against any source.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url` and writes its body into `destination_dir`.
    ///
    /// Returns the full path of the written file.
    ///
    /// # Errors
    ///
    /// Returns a [`DownloadError`] for any transport or stream failure.
    async fn fetch(&self, url: &str, destination_dir: &Path) -> Result<PathBuf, DownloadError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn fetch(&self, url: &str, destination_dir: &Path) -> Result<PathBuf, DownloadError> {
        (**self).fetch(url, destination_dir).await
    }
}
