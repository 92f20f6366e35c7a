use thiserror::Error;

/// Errors raised while resolving tag defaults and binding element attributes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("XML tag '{0}' is not allowed")]
    UnknownTag(String),

    #[error("The attribute '{name}' is not valid on <{tag}>")]
    UnknownAttribute { tag: String, name: String },

    #[error("Invalid value for '{name}': '{value}' (expected {expected})")]
    MalformedAttributeValue {
        name: String,
        value: String,
        expected: &'static str,
    },

    #[error("Attribute '{name}' is still 'inherit' and has no resolved value")]
    UnresolvedInherit { name: String },
}
