use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TagValue {
    Str(&'static str),
    String(String),
}
impl TagValue {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            TagValue::Str(s) => s,
            TagValue::String(s) => s,
        }
    }
}
impl From<&'static str> for TagValue {
    fn from(value: &'static str) -> Self {
        Self::Str(value)
    }
}
impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
/// Renders the value as a quoted JSON string.
impl Display for TagValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write_json_str(f, self.as_str())
    }
}

/// Writes `s` as a JSON string literal, escaping quotes, backslashes, and control characters.
pub(crate) fn write_json_str(f: &mut Formatter<'_>, s: &str) -> Result<(), std::fmt::Error> {
    let quoted = serde_json::to_string(s).map_err(|_| std::fmt::Error)?;
    f.write_str(&quoted)
}
