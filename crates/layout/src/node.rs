use crate::LayoutError;
use layoutimg_style::{AttributeEnvironment, Tag};
use layoutimg_types::geometry::{Point, Rect, Size};

/// A node of the layout tree.
///
/// The environment is resolved in place by the inherit pass; `position` and
/// `size` are written only by the layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    tag: Tag,
    env: AttributeEnvironment,
    text: Option<String>,
    pub(crate) position: Option<Point>,
    pub(crate) size: Size,
}

impl LayoutNode {
    pub(crate) fn new(env: AttributeEnvironment, text: Option<String>) -> Self {
        Self {
            tag: env.tag(),
            env,
            text,
            position: None,
            size: Size::zero(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn env(&self) -> &AttributeEnvironment {
        &self.env
    }

    pub(crate) fn env_mut(&mut self) -> &mut AttributeEnvironment {
        &mut self.env
    }

    /// Inline text. Always `Some` for `text` nodes, `None` otherwise.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Top left corner, or `None` before the layout pass has visited this node.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn geometry(&self) -> Option<Rect> {
        self.position.map(|position| Rect::from_parts(position, self.size))
    }

    pub(crate) fn laid_out_rect(&self) -> Result<Rect, LayoutError> {
        self.geometry().ok_or_else(|| {
            LayoutError::State(format!("<{}> node has not been laid out", self.tag))
        })
    }
}
