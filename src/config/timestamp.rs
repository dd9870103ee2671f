//! Reference timestamp for embedded-timestamp detection.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current UNIX time in whole seconds, as a decimal string.
///
/// Take it once before fetching and pass it to the analyzers.
///
/// # Example
///
/// ```rust
/// use cookieget::reference_timestamp;
///
/// let now = reference_timestamp();
/// assert!(now.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn reference_timestamp() -> String {
    // A clock before 1970 is reported as "0".
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    secs.to_string()
}
