pub mod attribute;
pub mod defaults;
pub mod dimension;
pub mod environment;
pub mod error;
pub mod flow;
pub mod parsers;
pub mod tag;
pub mod text;
pub mod value;

pub use attribute::{AttributeName, ValueKind};
pub use dimension::Dimension;
pub use environment::AttributeEnvironment;
pub use error::StyleError;
pub use flow::Flow;
pub use tag::Tag;
pub use text::TextAlign;
pub use value::Value;
