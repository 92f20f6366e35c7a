//! TextMeasurer trait for sizing text without drawing it.

use crate::render::RenderError;
use layoutimg_types::Size;

/// The font selection a piece of text is measured or drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontQuery<'a> {
    /// Font name or path. `None` selects the backend's default font.
    pub family: Option<&'a str>,
    /// Font size in pixels.
    pub size: i32,
}

impl<'a> FontQuery<'a> {
    pub fn new(family: Option<&'a str>, size: i32) -> Self {
        Self { family, size }
    }
}

/// Measures the bounding box of a run of text.
///
/// The layout pass sizes text nodes with this capability, and the draw pass
/// draws the same text through [`crate::Renderer::draw_text`]. For identical
/// `(text, font)` inputs both must report the same box, or rendered text will
/// not match its laid out rectangle.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str, font: FontQuery<'_>) -> Result<Size, RenderError>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure_text(&self, text: &str, font: FontQuery<'_>) -> Result<Size, RenderError> {
        (**self).measure_text(text, font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure_text(&self, text: &str, font: FontQuery<'_>) -> Result<Size, RenderError> {
        (**self).measure_text(text, font)
    }
}
