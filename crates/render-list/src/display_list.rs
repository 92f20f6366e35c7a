use crate::config::RenderListConfig;
use layoutimg_traits::{FontQuery, RenderError, Renderer, TextMeasurer};
use layoutimg_types::{Point, Rect, Size};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A single recorded drawing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: String,
    },
    DrawImage {
        rect: Rect,
        path: String,
    },
    DrawText {
        origin: Point,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        font: Option<String>,
        size: i32,
        color: String,
    },
}

/// The serialized form written by [`DisplayList::save`].
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub width: i32,
    pub height: i32,
    pub commands: &'a [DrawCommand],
}

/// A renderer that records commands instead of rasterizing them.
///
/// Text is measured (and "drawn") through the wrapped measurer, so
/// `measure_text` and `draw_text` always agree.
#[derive(Debug, Clone)]
pub struct DisplayList<M> {
    measurer: M,
    config: RenderListConfig,
    canvas: Size,
    commands: Vec<DrawCommand>,
}

impl<M: TextMeasurer> DisplayList<M> {
    pub fn new(measurer: M) -> Self {
        Self::with_config(measurer, RenderListConfig::default())
    }

    pub fn with_config(measurer: M, config: RenderListConfig) -> Self {
        Self {
            measurer,
            config,
            canvas: Size::new(config.initial_width, config.initial_height),
            commands: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.canvas.width
    }

    pub fn height(&self) -> i32 {
        self.canvas.height
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn set_expand(&mut self, expand: bool) {
        self.config.expand = expand;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            width: self.canvas.width,
            height: self.canvas.height,
            commands: &self.commands,
        }
    }

    /// Writes the snapshot as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(writer, &self.snapshot())
            .map_err(|e| RenderError::Serialize(e.to_string()))
    }
}

impl<M: TextMeasurer> TextMeasurer for DisplayList<M> {
    fn measure_text(&self, text: &str, font: FontQuery<'_>) -> Result<Size, RenderError> {
        self.measurer.measure_text(text, font)
    }
}

impl<M: TextMeasurer> Renderer for DisplayList<M> {
    fn expand(&mut self, rect: Rect) -> Result<(), RenderError> {
        if !self.config.expand {
            return Ok(());
        }
        let width = self.canvas.width.max(rect.right());
        let height = self.canvas.height.max(rect.bottom());
        if width != self.canvas.width || height != self.canvas.height {
            log::trace!(
                "Expanding canvas from {}x{} to {}x{}",
                self.canvas.width,
                self.canvas.height,
                width,
                height
            );
            self.canvas = Size::new(width, height);
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_string(),
        });
        Ok(())
    }

    fn draw_image(&mut self, rect: Rect, path: &str) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::DrawImage {
            rect,
            path: path.to_string(),
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: FontQuery<'_>,
        color: &str,
    ) -> Result<Size, RenderError> {
        let bbox = self.measurer.measure_text(text, font)?;
        self.commands.push(DrawCommand::DrawText {
            origin,
            text: text.to_string(),
            font: font.family.map(str::to_string),
            size: font.size,
            color: color.to_string(),
        });
        Ok(bbox)
    }

    fn save(&self, path: &Path) -> Result<(), RenderError> {
        log::debug!(
            "Saving {} commands ({}x{}) to {}",
            self.commands.len(),
            self.canvas.width,
            self.canvas.height,
            path.display()
        );
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedAdvanceMeasurer;

    fn list() -> DisplayList<FixedAdvanceMeasurer> {
        DisplayList::new(FixedAdvanceMeasurer::default())
    }

    #[test]
    fn test_expand_grows_to_union() {
        let mut r = list();
        r.expand(Rect::new(50, 50, 100, 100)).unwrap();
        r.expand(Rect::new(0, 0, 10, 300)).unwrap();
        assert_eq!((r.width(), r.height()), (150, 300));
    }

    #[test]
    fn test_no_expand() {
        let config = RenderListConfig {
            initial_width: 10,
            initial_height: 10,
            expand: false,
        };
        let mut r = DisplayList::with_config(FixedAdvanceMeasurer::default(), config);
        r.expand(Rect::new(50, 50, 100, 100)).unwrap();
        assert_eq!((r.width(), r.height()), (10, 10));
    }

    #[test]
    fn test_disable_expand_midway() {
        let mut r = list();
        r.expand(Rect::new(50, 50, 100, 100)).unwrap();
        let before = (r.width(), r.height());
        r.set_expand(false);
        r.expand(Rect::new(100, 100, 100, 100)).unwrap();
        assert_eq!((r.width(), r.height()), before);
    }

    #[test]
    fn test_draw_text_matches_measurement() {
        let mut r = list();
        let font = FontQuery::new(Some("Mono"), 20);
        let measured = r.measure_text("Hello World!", font).unwrap();
        let drawn = r.draw_text(Point::origin(), "Hello World!", font, "black").unwrap();
        assert_eq!(measured, drawn);
        assert_eq!(r.commands().len(), 1);
    }

    #[test]
    fn test_save_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut r = list();
        r.expand(Rect::new(0, 0, 20, 10)).unwrap();
        r.fill_rect(Rect::new(0, 0, 20, 10), "blue").unwrap();
        r.save(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["width"], 20);
        assert_eq!(written["commands"][0]["op"], "fill-rect");
        assert_eq!(written["commands"][0]["color"], "blue");
    }
}
