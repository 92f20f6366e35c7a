use crate::dimension::Dimension;
use crate::flow::Flow;
use crate::text::TextAlign;
use std::fmt;

/// A parsed attribute value.
///
/// Which variants an attribute may hold is decided by its [`crate::ValueKind`];
/// `Inherit` is allowed everywhere but never survives the inherit pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Auto,
    Inherit,
    Pixels(i32),
    Percent(f64),
    Flow(Flow),
    Align(TextAlign),
    Flag(bool),
    /// An opaque color or path. `None` stands for the `none`/`default` keyword.
    Reference(Option<String>),
}

impl Value {
    pub fn is_inherit(&self) -> bool {
        matches!(self, Value::Inherit)
    }

    /// The value as a length, if it is one.
    pub fn as_dimension(&self) -> Option<Dimension> {
        match self {
            Value::Auto => Some(Dimension::Auto),
            Value::Pixels(px) => Some(Dimension::Px(*px)),
            Value::Percent(pct) => Some(Dimension::Percent(*pct)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Auto => f.write_str("auto"),
            Value::Inherit => f.write_str("inherit"),
            Value::Pixels(px) => write!(f, "{}", px),
            Value::Percent(pct) => write!(f, "{}%", pct),
            Value::Flow(flow) => f.write_str(flow.as_str()),
            Value::Align(align) => f.write_str(align.as_str()),
            Value::Flag(flag) => write!(f, "{}", flag),
            Value::Reference(Some(reference)) => f.write_str(reference),
            Value::Reference(None) => f.write_str("none"),
        }
    }
}
