#![allow(dead_code)]

use request_cookies::RequestCookieCollection;
use std::ops::Range;
use std::time::{Duration, Instant};

#[allow(clippy::missing_panics_doc)]
pub fn assert_starts_with(value: impl AsRef<str>, prefix: impl AsRef<str>) {
    assert!(
        value.as_ref().starts_with(prefix.as_ref()),
        "value {:?} does not start with {:?}",
        value.as_ref(),
        prefix.as_ref()
    );
}

#[allow(clippy::missing_panics_doc)]
pub fn assert_contains(value: impl AsRef<str>, needle: impl AsRef<str>) {
    assert!(
        value.as_ref().contains(needle.as_ref()),
        "value {:?} does not contain {:?}",
        value.as_ref(),
        needle.as_ref()
    );
}

#[allow(clippy::missing_errors_doc)]
#[allow(clippy::missing_panics_doc)]
pub fn check_elapsed(before: Instant, range_ms: Range<u64>) -> Result<(), String> {
    assert!(!range_ms.is_empty(), "invalid range {range_ms:?}");
    let elapsed = before.elapsed();
    let duration_range = Duration::from_millis(range_ms.start)..Duration::from_millis(range_ms.end);
    if duration_range.contains(&elapsed) {
        Ok(())
    } else {
        Err(format!(
            "{elapsed:?} elapsed, out of range {duration_range:?}"
        ))
    }
}

/// Returns the collection's `(name, value)` pairs in order.
pub fn pairs(cookies: &RequestCookieCollection) -> Vec<(String, String)> {
    cookies
        .iter()
        .map(|entry| (entry.name().to_string(), entry.value().to_string()))
        .collect()
}

/// Returns the collection's values in order.
pub fn values(cookies: &RequestCookieCollection) -> Vec<&str> {
    cookies.iter().map(|entry| entry.value()).collect()
}

pub fn parse_one(line: &str) -> RequestCookieCollection {
    RequestCookieCollection::parse([line], true)
}
