use crate::cookie::CookieEntry;
use crate::log::{Level, debug, level_enabled, tag};
use crate::percent::percent_decode_value;
use crate::settings::{NameComparison, RequestCookiesSettings};
use crate::util::{escape_and_elide, trim_ows};
use core::fmt::{Debug, Formatter};

/// Characters that separate cookie pairs.
///
/// Browsers send `;`.  Some old clients join pairs with `,`.
/// We split on both, even inside quotes.
pub const PAIR_DELIMITERS: [char; 2] = [',', ';'];

/// Splits one cookie-pair token at its first `=`.
///
/// Returns `None` when `token` has no `=`.
/// Trims spaces and tabs around the name and around the value.
/// Percent-decodes the value, but not the name.
///
/// ```
/// use request_cookies::internal::split_pair;
/// let entry = split_pair(" ke%23y=val%5Eue==").unwrap();
/// assert_eq!(entry.name(), "ke%23y");
/// assert_eq!(entry.value(), "val^ue==");
/// assert_eq!(split_pair("novalue"), None);
/// ```
#[must_use]
pub fn split_pair(token: &str) -> Option<CookieEntry> {
    match token.split_once('=') {
        None => None,
        Some((raw_name, raw_value)) => {
            let name = trim_ows(raw_name);
            let (value, opt_issue) = percent_decode_value(trim_ows(raw_value));
            match opt_issue {
                Some(issue) if level_enabled(Level::Debug) => debug(
                    "kept cookie with bad value encoding",
                    (
                        tag("name", escape_and_elide(name.as_bytes(), 30)),
                        tag("issue", issue.description()),
                    ),
                ),
                _ => {}
            }
            Some(CookieEntry::new(name, value))
        }
    }
}

/// Splits `line` on [`PAIR_DELIMITERS`] and appends every pair to `entries`.
/// Drops tokens without `=`.
pub fn parse_line(line: &str, entries: &mut Vec<CookieEntry>) {
    for token in line.split(PAIR_DELIMITERS) {
        match split_pair(token) {
            Some(entry) => entries.push(entry),
            None if level_enabled(Level::Debug) && !trim_ows(token).is_empty() => debug(
                "dropped malformed cookie fragment",
                tag("fragment", escape_and_elide(token.as_bytes(), 100)),
            ),
            None => {}
        }
    }
}

/// The cookies a client sent in its `Cookie` request headers.
///
/// Keeps every pair in the order it appeared, including pairs with duplicate names.
/// Lookups by name use the [`NameComparison`] chosen at parse time
/// and return the first match.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct RequestCookieCollection {
    entries: Vec<CookieEntry>,
    comparison: NameComparison,
}
impl RequestCookieCollection {
    /// Makes an empty collection that matches names case-insensitively.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            comparison: RequestCookiesSettings::DEFAULT.name_comparison(),
        }
    }

    /// Parses the values of a request's `Cookie` headers.
    ///
    /// Treats `lines` as one list of pairs separated by `;` or `,`.
    /// Silently drops pairs without `=`.
    /// Never fails.
    ///
    /// ```
    /// use request_cookies::RequestCookieCollection;
    ///
    /// let cookies = RequestCookieCollection::parse(["a=1; B=2", "c=%21"], true);
    /// assert_eq!(cookies.len(), 3);
    /// assert_eq!(cookies.get("b"), Some("2"));
    /// assert_eq!(cookies.get("c"), Some("!"));
    /// assert_eq!(cookies.get("d"), None);
    /// ```
    #[must_use]
    pub fn parse<I, S>(lines: I, is_name_case_insensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for line in lines {
            parse_line(line.as_ref(), &mut entries);
        }
        Self {
            entries,
            comparison: NameComparison::new(is_name_case_insensitive),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn name_comparison(&self) -> NameComparison {
        self.comparison
    }

    #[must_use]
    pub fn is_name_case_insensitive(&self) -> bool {
        self.comparison == NameComparison::IgnoreCase
    }

    /// Returns the first cookie named `name`.
    #[must_use]
    pub fn get_entry(&self, name: impl AsRef<str>) -> Option<&CookieEntry> {
        let name = name.as_ref();
        self.entries
            .iter()
            .find(|entry| self.comparison.names_match(entry.name(), name))
    }

    /// Returns the value of the first cookie named `name`.
    #[must_use]
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        self.get_entry(name).map(CookieEntry::value)
    }

    /// Returns the values of all cookies named `name`, in order.
    #[must_use]
    pub fn get_all(&self, name: impl AsRef<str>) -> Vec<&str> {
        let name = name.as_ref();
        self.entries
            .iter()
            .filter(|entry| self.comparison.names_match(entry.name(), name))
            .map(CookieEntry::value)
            .collect()
    }

    #[must_use]
    pub fn contains_key(&self, name: impl AsRef<str>) -> bool {
        self.get_entry(name).is_some()
    }

    /// Returns cookie names in order, including duplicates.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CookieEntry::name)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, CookieEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CookieEntry] {
        &self.entries
    }

    /// # Errors
    /// Returns an error when serialization fails.
    #[cfg(feature = "json")]
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
impl Debug for RequestCookieCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "RequestCookieCollection{{{:?}, {:?}}}",
            self.comparison, self.entries
        )
    }
}
impl Default for RequestCookieCollection {
    fn default() -> Self {
        Self::empty()
    }
}
impl<'x> IntoIterator for &'x RequestCookieCollection {
    type Item = &'x CookieEntry;
    type IntoIter = core::slice::Iter<'x, CookieEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
impl IntoIterator for RequestCookieCollection {
    type Item = CookieEntry;
    type IntoIter = std::vec::IntoIter<CookieEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
#[cfg(feature = "serde")]
impl serde::Serialize for RequestCookieCollection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
