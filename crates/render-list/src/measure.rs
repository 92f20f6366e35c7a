use layoutimg_traits::{FontQuery, RenderError, TextMeasurer};
use layoutimg_types::Size;

/// Measures text as if every character had the same advance.
///
/// Each character advances `round(size * advance_ratio)` pixels and every line
/// box is `floor(size * line_height_ratio)` pixels tall. The font family is
/// ignored, so results only depend on the text length and the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance_ratio: f64,
    pub line_height_ratio: f64,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.35,
        }
    }
}

impl FixedAdvanceMeasurer {
    pub fn advance(&self, size: i32) -> i32 {
        (f64::from(size) * self.advance_ratio).round() as i32
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure_text(&self, text: &str, font: FontQuery<'_>) -> Result<Size, RenderError> {
        if font.size < 0 {
            return Err(RenderError::Other(format!(
                "negative font size {}",
                font.size
            )));
        }
        let chars = i32::try_from(text.chars().count())
            .map_err(|_| RenderError::from("text too long to measure"))?;
        let height = (f64::from(font.size) * self.line_height_ratio).floor() as i32;
        let width = chars
            .checked_mul(self.advance(font.size))
            .ok_or_else(|| RenderError::from("text too wide to measure"))?;
        Ok(Size::new(width, height))
    }
}
