use crate::RequestCookieCollection;

/// How cookie names are compared when looking up values.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NameComparison {
    /// Exact byte comparison.
    Ordinal,
    /// Compares the uppercase forms of each `char`, so `"Session"` matches `"SESSION"`.
    /// A `char` whose uppercase form is several `char`s, like `'ß'`, only matches itself.
    IgnoreCase,
}
impl NameComparison {
    #[must_use]
    pub fn new(is_name_case_insensitive: bool) -> Self {
        if is_name_case_insensitive {
            NameComparison::IgnoreCase
        } else {
            NameComparison::Ordinal
        }
    }

    #[must_use]
    pub fn names_match(self, a: &str, b: &str) -> bool {
        match self {
            NameComparison::Ordinal => a == b,
            NameComparison::IgnoreCase => {
                a.eq_ignore_ascii_case(b)
                    || a.chars()
                        .map(simple_uppercase)
                        .eq(b.chars().map(simple_uppercase))
            }
        }
    }
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Settings for parsing the request's `Cookie` headers.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RequestCookiesSettings {
    is_name_case_insensitive: bool,
}
impl RequestCookiesSettings {
    /// Cookie names match case-insensitively unless you change it.
    pub const DEFAULT_IS_NAME_CASE_INSENSITIVE: bool = true;

    pub const DEFAULT: RequestCookiesSettings = RequestCookiesSettings {
        is_name_case_insensitive: Self::DEFAULT_IS_NAME_CASE_INSENSITIVE,
    };

    /// Makes new settings with these defaults:
    /// - case-insensitive cookie names
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// When `true`, [`RequestCookieCollection::get`] finds `"a"` when looking up `"A"`.
    ///
    /// This affects only lookups.
    /// The parser keeps every cookie and stores names exactly as they appear.
    #[must_use]
    pub const fn with_name_case_insensitive(mut self, b: bool) -> Self {
        self.is_name_case_insensitive = b;
        self
    }

    #[must_use]
    pub const fn is_name_case_insensitive(&self) -> bool {
        self.is_name_case_insensitive
    }

    #[must_use]
    pub fn name_comparison(&self) -> NameComparison {
        NameComparison::new(self.is_name_case_insensitive)
    }

    /// Parses raw `Cookie` header values with these settings.
    #[must_use]
    pub fn parse<I, S>(&self, lines: I) -> RequestCookieCollection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RequestCookieCollection::parse(lines, self.is_name_case_insensitive)
    }
}
impl Default for RequestCookiesSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Options for request processing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RequestOptions {
    cookies_settings: RequestCookiesSettings,
}
impl RequestOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cookies_settings: RequestCookiesSettings::DEFAULT,
        }
    }

    #[must_use]
    pub const fn cookies_settings(&self) -> &RequestCookiesSettings {
        &self.cookies_settings
    }

    #[must_use]
    pub const fn with_cookies_settings(mut self, settings: RequestCookiesSettings) -> Self {
        self.cookies_settings = settings;
        self
    }
}
