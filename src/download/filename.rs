//! Destination file naming for downloads.
//!
//! The file name is the URL's final segment taken verbatim: everything after
//! the last `/`, query string included. There is no collision handling, so a
//! later URL with the same final segment overwrites the earlier file.

use std::path::{Path, PathBuf};

/// Returns the text after the last `/` of `url`.
///
/// Returns `None` when that text is empty, `.` or `..`, none of which names
/// a file inside the destination directory.
#[must_use]
pub fn filename_from_url(url: &str) -> Option<&str> {
    let name = url.rsplit('/').next().unwrap_or(url);
    match name {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}

/// Joins the URL's file name onto `destination_dir`.
#[must_use]
pub fn destination_path(destination_dir: &Path, url: &str) -> Option<PathBuf> {
    filename_from_url(url).map(|name| destination_dir.join(name))
}
