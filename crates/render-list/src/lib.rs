//! A recording [`Renderer`](layoutimg_traits::Renderer) backend.
//!
//! - `DisplayList` records every draw request as a [`DrawCommand`], tracks the
//!   canvas as it expands, and saves itself as JSON.
//! - `FixedAdvanceMeasurer` is a font-free, deterministic text measurer.

mod config;
mod display_list;
mod measure;

pub use config::RenderListConfig;
pub use display_list::{DisplayList, DrawCommand, Snapshot};
pub use measure::FixedAdvanceMeasurer;
