//! Appcast document downloading.

use reqwest::blocking::Client;

use crate::error::{AppcastError, Result};
use crate::http::{bytes_to_string, download_bytes};

/// Download an appcast document.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - Location of the feed
/// * `max_size` - Largest accepted document in bytes
///
/// # Returns
/// Raw XML content as a string
pub fn download_appcast_xml(client: &Client, url: &str, max_size: u64) -> Result<String> {
    let bytes = download_bytes(client, url, max_size).map_err(|e| {
        if let AppcastError::Http(source) = e {
            AppcastError::FeedDownload {
                url: url.to_string(),
                source,
            }
        } else {
            e
        }
    })?;

    Ok(bytes_to_string(&bytes, &format!("appcast at {url}")))
}
