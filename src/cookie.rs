use crate::util::escape_and_elide;
use core::fmt::{Debug, Formatter};

/// One `name=value` pair from a request's `Cookie` header.
///
/// `name` is exactly what the client sent before the first `=`.
/// `value` is the rest of the pair, percent-decoded.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CookieEntry {
    name: String,
    value: String,
}
impl CookieEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.name, self.value)
    }
}
impl Debug for CookieEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "CookieEntry({}={})",
            escape_and_elide(self.name.as_bytes(), 30),
            escape_and_elide(self.value.as_bytes(), 100)
        )
    }
}
impl From<CookieEntry> for (String, String) {
    fn from(entry: CookieEntry) -> Self {
        entry.into_pair()
    }
}
impl<N: Into<String>, V: Into<String>> From<(N, V)> for CookieEntry {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
