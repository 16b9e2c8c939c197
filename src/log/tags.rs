use crate::log::tag_value::{TagValue, write_json_str};
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

pub fn tag(name: &'static str, value: impl Into<TagValue>) -> Tag {
    Tag::new(name, value)
}

#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag {
    pub name: &'static str,
    pub value: TagValue,
}
impl Tag {
    pub fn new(name: &'static str, value: impl Into<TagValue>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}
impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Tags attached to one log event.
///
/// Converts from `()`, a single [`Tag`], or a pair of tags,
/// so callers can write `debug("msg", (tag("a", "x"), tag("b", "y")))`.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TagList(pub Vec<Tag>);
impl TagList {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the value of the first tag named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.0.iter().find(|t| t.name == name).map(|t| &t.value)
    }
}
impl Deref for TagList {
    type Target = Vec<Tag>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
/// Renders the tags as the inside of a JSON object: `"a":"x","b":"y"`.
impl Display for TagList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        for (n, tag) in self.0.iter().enumerate() {
            if n > 0 {
                write!(f, ",")?;
            }
            write_json_str(f, tag.name)?;
            write!(f, ":{}", tag.value)?;
        }
        Ok(())
    }
}
impl Debug for TagList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "TagList{:?}", self.0)
    }
}

impl From<Tag> for TagList {
    fn from(t: Tag) -> Self {
        Self(vec![t])
    }
}
impl From<()> for TagList {
    fn from((): ()) -> Self {
        Self::new()
    }
}
impl From<(Tag, Tag)> for TagList {
    fn from((a, b): (Tag, Tag)) -> Self {
        Self(vec![a, b])
    }
}
