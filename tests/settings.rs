use request_cookies::{NameComparison, RequestCookiesSettings, RequestOptions};

#[test]
fn defaults() {
    assert!(RequestCookiesSettings::DEFAULT_IS_NAME_CASE_INSENSITIVE);
    assert!(RequestCookiesSettings::DEFAULT.is_name_case_insensitive());
    assert_eq!(RequestCookiesSettings::new(), RequestCookiesSettings::DEFAULT);
    assert_eq!(
        RequestCookiesSettings::default(),
        RequestCookiesSettings::DEFAULT
    );
    assert_eq!(
        RequestOptions::new().cookies_settings(),
        &RequestCookiesSettings::DEFAULT
    );
    assert_eq!(RequestOptions::default(), RequestOptions::new());
}

#[test]
fn with_name_case_insensitive() {
    let settings = RequestCookiesSettings::new().with_name_case_insensitive(false);
    assert!(!settings.is_name_case_insensitive());
    assert_eq!(settings.name_comparison(), NameComparison::Ordinal);
    let settings = settings.with_name_case_insensitive(true);
    assert_eq!(settings.name_comparison(), NameComparison::IgnoreCase);
}

#[test]
fn with_cookies_settings() {
    let strict = RequestCookiesSettings::new().with_name_case_insensitive(false);
    let options = RequestOptions::new().with_cookies_settings(strict);
    assert_eq!(options.cookies_settings(), &strict);
    let cookies = options.cookies_settings().parse(["Id=1"]);
    assert_eq!(cookies.get("id"), None);
    assert_eq!(cookies.get("Id"), Some("1"));
}

#[test]
fn names_match() {
    for (expected, comparison, a, b) in [
        (true, NameComparison::Ordinal, "a", "a"),
        (false, NameComparison::Ordinal, "a", "A"),
        (false, NameComparison::Ordinal, "a", "ab"),
        (true, NameComparison::IgnoreCase, "a", "A"),
        (true, NameComparison::IgnoreCase, "Session_ID", "session_id"),
        (true, NameComparison::IgnoreCase, "\u{c9}t\u{e9}", "\u{e9}T\u{c9}"),
        (true, NameComparison::IgnoreCase, "\u{c4}pfel", "\u{e4}PFEL"),
        // KELVIN SIGN lowercases to 'k', but its uppercase form is itself.
        (false, NameComparison::IgnoreCase, "\u{212a}ey", "key"),
        (false, NameComparison::IgnoreCase, "\u{212a}ey", "KEY"),
        (false, NameComparison::IgnoreCase, "stra\u{df}e", "STRASSE"),
        (false, NameComparison::IgnoreCase, "a", "b"),
        (false, NameComparison::IgnoreCase, "a", "a "),
        (true, NameComparison::IgnoreCase, "", ""),
    ] {
        assert_eq!(
            expected,
            comparison.names_match(a, b),
            "{comparison:?} {a:?} {b:?}"
        );
    }
    assert_eq!(NameComparison::new(true), NameComparison::IgnoreCase);
    assert_eq!(NameComparison::new(false), NameComparison::Ordinal);
}
