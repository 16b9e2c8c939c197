#![cfg(feature = "json")]
use request_cookies::{CookieEntry, RequestCookieCollection};
use serde_json::json;

#[test]
fn json() {
    let cookies = RequestCookieCollection::parse(["b=2; a=1", "a=%21"], true);
    assert_eq!(
        cookies.to_json_string().unwrap(),
        r#"[{"name":"b","value":"2"},{"name":"a","value":"1"},{"name":"a","value":"!"}]"#,
    );
    assert_eq!(
        serde_json::to_value(&cookies).unwrap(),
        json!([
            {"name": "b", "value": "2"},
            {"name": "a", "value": "1"},
            {"name": "a", "value": "!"},
        ])
    );
    assert_eq!(
        serde_json::to_value(CookieEntry::new("k", "v")).unwrap(),
        json!({"name": "k", "value": "v"})
    );
    assert_eq!(
        RequestCookieCollection::empty().to_json_string().unwrap(),
        "[]"
    );
}
