//! The drawing backend driven by the draw pass.

use crate::text::{FontQuery, TextMeasurer};
use layoutimg_types::{Point, Rect, Size};
use std::path::Path;
use thiserror::Error;

/// Errors reported by a drawing backend.
///
/// The layout engine never recovers from these; any fallback (a substitute font,
/// a placeholder for a missing image) belongs in the backend.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(String),

    #[error("Resource not found: {0}")]
    MissingResource(String),

    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}

/// A drawing surface. Coordinates are canvas pixels with the origin at the top left.
pub trait Renderer: TextMeasurer {
    /// Grows the canvas, if needed, so that it contains `rect`.
    fn expand(&mut self, rect: Rect) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), RenderError>;

    /// Draws the image at `path` scaled into `rect`.
    fn draw_image(&mut self, rect: Rect, path: &str) -> Result<(), RenderError>;

    /// Draws `text` with its top left corner at `origin`, returning its bounding box.
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: FontQuery<'_>,
        color: &str,
    ) -> Result<Size, RenderError>;

    fn save(&self, path: &Path) -> Result<(), RenderError>;
}
