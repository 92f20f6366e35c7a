//! Lays out trees of `image`, `row`, `col` and `text` elements and hands the
//! result to a [`Renderer`].
//!
//! ```no_run
//! use layoutimg::{LayoutImage, PipelineError};
//! use layoutimg::render_list::{DisplayList, FixedAdvanceMeasurer};
//!
//! fn main() -> Result<(), PipelineError> {
//!     let mut image = LayoutImage::new(r#"<image><text>Hello</text></image>"#)?;
//!     let measurer = FixedAdvanceMeasurer::default();
//!     let mut renderer = DisplayList::new(measurer);
//!     image.generate(&measurer, &mut renderer)?;
//!     image.save(&renderer, "hello.json")
//! }
//! ```

pub mod error;
pub mod parser;
pub mod pipeline;

pub use error::PipelineError;
pub use parser::parse_markup;
pub use pipeline::LayoutImage;

pub use layoutimg_layout::{
    Element, LayoutConfig, LayoutEngine, LayoutError, LayoutNode, LayoutTree, NodeId,
    RootInheritPolicy,
};
pub use layoutimg_render_list as render_list;
pub use layoutimg_style as style;
pub use layoutimg_traits::{FontQuery, RenderError, Renderer, TextMeasurer};
pub use layoutimg_types::{Axis, Point, Rect, Size};
