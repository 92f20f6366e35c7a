use layoutimg_style::StyleError;
use layoutimg_traits::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error("Root tag should be image, not {0}")]
    InvalidRootTag(String),
    #[error("Image tag is only allowed as root")]
    MisplacedImageTag,
    #[error("Text node cannot contain child elements")]
    TextNodeHasChildren,
    #[error("Text only allowed in text nodes, found {text:?} in <{tag}>")]
    UnexpectedText { tag: String, text: String },
    #[error("Tree construction failed: {0}")]
    Tree(#[from] indextree::NodeError),
    #[error("State error: {0}")]
    State(String),
    #[error("Renderer error: {0}")]
    Render(#[from] RenderError),
}

pub mod algorithms;
pub mod builder;
pub mod config;
pub mod element;
pub mod engine;
pub mod inherit;
pub mod node;
pub mod painting;
pub mod tree;

pub use self::config::{LayoutConfig, RootInheritPolicy};
pub use self::element::Element;
pub use self::engine::LayoutEngine;
pub use self::node::LayoutNode;
pub use self::tree::LayoutTree;

pub use indextree::NodeId;
pub use layoutimg_types::geometry::{Axis, Point, Rect, Size};

#[cfg(test)]
mod layout_test;
#[cfg(test)]
mod test_utils;
