mod test_util;
use crate::test_util::check_elapsed;
use request_cookies::RequestCookieCollection;
use std::time::Instant;

#[test]
fn many_delimiters() {
    let line = ";,".repeat(500_000);
    let before = Instant::now();
    let cookies = RequestCookieCollection::parse([line.as_str()], true);
    check_elapsed(before, 0..3_000).unwrap();
    assert!(cookies.is_empty());
}

#[test]
fn many_pairs() {
    let line = "a=%41;".repeat(200_000);
    let before = Instant::now();
    let cookies = RequestCookieCollection::parse([line.as_str()], true);
    check_elapsed(before, 0..3_000).unwrap();
    assert_eq!(cookies.len(), 200_000);
    assert_eq!(cookies.get("A"), Some("A"));
}

#[test]
fn many_percent_signs() {
    let line = format!("a={}", "%".repeat(1_000_000));
    let before = Instant::now();
    let cookies = RequestCookieCollection::parse([line.as_str()], true);
    check_elapsed(before, 0..3_000).unwrap();
    assert_eq!(cookies.get("a").map(str::len), Some(1_000_000));
}
