//! Saving expanded URL lists to a text file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, instrument};

/// Errors writing a URL list.
#[derive(Debug, Error)]
#[error("failed to write URL list {path}: {source}")]
pub struct UrlListError {
    /// The list file.
    pub path: PathBuf,
    /// The underlying IO error.
    #[source]
    pub source: std::io::Error,
}

/// Appends each URL as one line to `path`, creating the file if needed.
///
/// Existing content is kept, so repeated runs accumulate a history.
///
/// # Errors
///
/// Returns [`UrlListError`] if the file cannot be opened or written.
#[instrument(skip(urls), fields(path = %path.display(), count = urls.len()))]
pub async fn append_urls(path: &Path, urls: &[String]) -> Result<(), UrlListError> {
    let to_error = |source| UrlListError {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    for url in urls {
        writer.write_all(url.as_bytes()).await.map_err(to_error)?;
        writer.write_all(b"\n").await.map_err(to_error)?;
    }
    writer.flush().await.map_err(to_error)?;

    debug!("URL list written");
    Ok(())
}
