use crate::error::StyleError;
use std::fmt;
use std::str::FromStr;

/// The closed set of element tags understood by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The root canvas. Only valid at the top of the tree.
    Image,
    Row,
    Col,
    /// A leaf carrying inline text.
    Text,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::Image, Tag::Row, Tag::Col, Tag::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Image => "image",
            Tag::Row => "row",
            Tag::Col => "col",
            Tag::Text => "text",
        }
    }

    pub fn parse(name: &str) -> Result<Tag, StyleError> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == name)
            .ok_or_else(|| StyleError::UnknownTag(name.to_string()))
    }

    /// Whether elements with this tag may hold inline character content.
    pub fn accepts_text(self) -> bool {
        matches!(self, Tag::Text)
    }
}

impl FromStr for Tag {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::parse(s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
