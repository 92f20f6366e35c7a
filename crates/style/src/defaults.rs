//! Built-in default tables, one per tag.
//!
//! The tables are fixed. Every tag currently recognizes the full attribute set;
//! a tag/name pair returning `None` would be rejected as an unknown attribute.

use crate::attribute::AttributeName;
use crate::flow::Flow;
use crate::tag::Tag;
use crate::text::TextAlign;
use crate::value::Value;

/// Upper size bound used when no `max-width`/`max-height` is given.
pub const UNBOUNDED: i32 = 1_000_000;

pub const DEFAULT_FONT_SIZE: i32 = 64;

pub const DEFAULT_TEXT_COLOR: &str = "black";

/// The default value of `name` on elements tagged `tag`, or `None` if the tag
/// does not recognize the attribute.
///
/// Only the root tag (`image`) is guaranteed to contain no `Inherit` defaults.
pub fn default_value(tag: Tag, name: AttributeName) -> Option<Value> {
    let is_root = tag == Tag::Image;
    let inherited_or = |root_value: Value| {
        if is_root { root_value } else { Value::Inherit }
    };

    let value = match name {
        AttributeName::BackgroundColor | AttributeName::BackgroundImage => Value::Reference(None),
        AttributeName::Flow => Value::Flow(match tag {
            Tag::Image => Flow::None,
            Tag::Row => Flow::Y,
            Tag::Col => Flow::X,
            Tag::Text => Flow::XY,
        }),
        AttributeName::Font => inherited_or(Value::Reference(None)),
        AttributeName::FontSize => inherited_or(Value::Pixels(DEFAULT_FONT_SIZE)),
        AttributeName::Width | AttributeName::Height => Value::Auto,
        AttributeName::MaxWidth | AttributeName::MaxHeight => Value::Pixels(UNBOUNDED),
        AttributeName::MinWidth => match tag {
            Tag::Row | Tag::Text => Value::Percent(100.0),
            Tag::Image | Tag::Col => Value::Pixels(0),
        },
        AttributeName::MinHeight => match tag {
            Tag::Col => Value::Percent(100.0),
            Tag::Image | Tag::Row | Tag::Text => Value::Pixels(0),
        },
        AttributeName::RenderText => Value::Flag(tag == Tag::Text),
        AttributeName::TextAlign => inherited_or(Value::Align(TextAlign::Left)),
        AttributeName::TextColor => {
            inherited_or(Value::Reference(Some(DEFAULT_TEXT_COLOR.to_string())))
        }
        AttributeName::X | AttributeName::Y => Value::Auto,
    };
    Some(value)
}
