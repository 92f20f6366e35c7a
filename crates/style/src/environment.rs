//! The per-node attribute map: tag defaults, explicit overrides and `inherit` resolution.

use crate::attribute::AttributeName;
use crate::defaults::default_value;
use crate::dimension::Dimension;
use crate::error::StyleError;
use crate::flow::Flow;
use crate::parsers::parse_value;
use crate::tag::Tag;
use crate::text::TextAlign;
use crate::value::Value;

/// Resolved attributes of a single node.
///
/// Slots are indexed by [`AttributeName::index`]. A `None` slot means the tag
/// does not recognize that attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeEnvironment {
    tag: Tag,
    values: [Option<Value>; AttributeName::COUNT],
}

impl AttributeEnvironment {
    /// The default environment for `tag`.
    pub fn for_tag(tag: Tag) -> Self {
        Self {
            tag,
            values: std::array::from_fn(|i| default_value(tag, AttributeName::ALL[i])),
        }
    }

    /// The default environment for a tag given by name.
    pub fn resolve_defaults(tag: &str) -> Result<Self, StyleError> {
        Ok(Self::for_tag(Tag::parse(tag)?))
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn get(&self, name: AttributeName) -> Option<&Value> {
        self.values[name.index()].as_ref()
    }

    /// Iterates the recognized attributes in table order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, &Value)> + '_ {
        AttributeName::ALL
            .into_iter()
            .filter_map(|name| self.get(name).map(|value| (name, value)))
    }

    /// Binds an explicit attribute from its raw string form.
    pub fn apply(&mut self, name: &str, raw: &str) -> Result<(), StyleError> {
        let unknown = || StyleError::UnknownAttribute {
            tag: self.tag.as_str().to_string(),
            name: name.to_string(),
        };
        let attribute = AttributeName::parse(name).ok_or_else(unknown)?;
        if self.values[attribute.index()].is_none() {
            return Err(unknown());
        }
        self.values[attribute.index()] = Some(parse_value(attribute, raw)?);
        Ok(())
    }

    /// Replaces every `Inherit` slot with the parent's value for the same name.
    ///
    /// The parent must already be fully resolved.
    pub fn inherit_from(&mut self, parent: &AttributeEnvironment) -> Result<(), StyleError> {
        for name in AttributeName::ALL {
            let slot = &mut self.values[name.index()];
            if !matches!(slot, Some(Value::Inherit)) {
                continue;
            }
            match parent.get(name) {
                Some(value) if !value.is_inherit() => *slot = Some(value.clone()),
                _ => {
                    return Err(StyleError::UnresolvedInherit {
                        name: name.as_str().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Names still holding `Inherit`.
    pub fn unresolved(&self) -> impl Iterator<Item = AttributeName> + '_ {
        self.iter()
            .filter(|(_, value)| value.is_inherit())
            .map(|(name, _)| name)
    }

    pub fn is_resolved(&self) -> bool {
        self.unresolved().next().is_none()
    }

    // --- Typed accessors ---

    fn lookup<'s, T>(
        &'s self,
        name: AttributeName,
        project: impl FnOnce(&'s Value) -> Option<T>,
    ) -> Result<T, StyleError> {
        let value = self.get(name).ok_or_else(|| StyleError::UnknownAttribute {
            tag: self.tag.as_str().to_string(),
            name: name.as_str().to_string(),
        })?;
        if value.is_inherit() {
            return Err(StyleError::UnresolvedInherit {
                name: name.as_str().to_string(),
            });
        }
        project(value).ok_or_else(|| StyleError::MalformedAttributeValue {
            name: name.as_str().to_string(),
            value: value.to_string(),
            expected: name.kind().expected(),
        })
    }

    /// A length attribute (`width`, `min-height`, `x`, ...).
    pub fn dimension(&self, name: AttributeName) -> Result<Dimension, StyleError> {
        self.lookup(name, Value::as_dimension)
    }

    pub fn font_size(&self) -> Result<i32, StyleError> {
        self.lookup(AttributeName::FontSize, |value| match value {
            Value::Pixels(px) => Some(*px),
            _ => None,
        })
    }

    pub fn flow(&self) -> Result<Flow, StyleError> {
        self.lookup(AttributeName::Flow, |value| match value {
            Value::Flow(flow) => Some(*flow),
            _ => None,
        })
    }

    pub fn text_align(&self) -> Result<TextAlign, StyleError> {
        self.lookup(AttributeName::TextAlign, |value| match value {
            Value::Align(align) => Some(*align),
            _ => None,
        })
    }

    pub fn render_text(&self) -> Result<bool, StyleError> {
        self.lookup(AttributeName::RenderText, |value| match value {
            Value::Flag(flag) => Some(*flag),
            _ => None,
        })
    }

    fn reference(&self, name: AttributeName) -> Result<Option<&str>, StyleError> {
        self.lookup(name, |value| match value {
            Value::Reference(reference) => Some(reference.as_deref()),
            _ => None,
        })
    }

    /// The font to render text with; `None` selects the renderer's default font.
    pub fn font(&self) -> Result<Option<&str>, StyleError> {
        self.reference(AttributeName::Font)
    }

    pub fn background_color(&self) -> Result<Option<&str>, StyleError> {
        self.reference(AttributeName::BackgroundColor)
    }

    pub fn background_image(&self) -> Result<Option<&str>, StyleError> {
        self.reference(AttributeName::BackgroundImage)
    }

    pub fn text_color(&self) -> Result<&str, StyleError> {
        self.reference(AttributeName::TextColor)?
            .ok_or_else(|| StyleError::MalformedAttributeValue {
                name: AttributeName::TextColor.as_str().to_string(),
                value: "none".to_string(),
                expected: AttributeName::TextColor.kind().expected(),
            })
    }
}
