pub mod render;
pub mod text;

pub use render::{RenderError, Renderer};
pub use text::{FontQuery, TextMeasurer};
