//! Choosing the release to offer from the parsed feed.

use crate::error::{AppcastError, Result};
use crate::types::ReleaseDescriptor;

/// Pick the release for the running platform.
///
/// Returns the first release whose `os` equals `platform_marker`. Feeds
/// without a platform-specific item fall back to their first item,
/// whatever its `os`.
///
/// # Errors
/// Returns `NoItemsFound` if `releases` is empty.
///
/// # Examples
/// ```
/// use appcast::parser::select_release;
/// use appcast::types::ReleaseDescriptor;
///
/// let mac = ReleaseDescriptor { os: Some("mac".into()), ..Default::default() };
/// let win = ReleaseDescriptor { os: Some("windows".into()), ..Default::default() };
///
/// let chosen = select_release(vec![mac, win], "windows").unwrap();
/// assert_eq!(chosen.os.as_deref(), Some("windows"));
/// ```
pub fn select_release(
    mut releases: Vec<ReleaseDescriptor>,
    platform_marker: &str,
) -> Result<ReleaseDescriptor> {
    if releases.is_empty() {
        return Err(AppcastError::NoItemsFound);
    }

    let index = match releases
        .iter()
        .position(|release| release.targets(platform_marker))
    {
        Some(index) => {
            tracing::debug!(index, "Selected platform-specific release");
            index
        }
        None => {
            tracing::debug!(
                candidates = releases.len(),
                "No platform-specific release, using first item"
            );
            0
        }
    };

    Ok(releases.swap_remove(index))
}
