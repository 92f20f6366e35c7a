use crate::{Element, LayoutEngine, LayoutNode, LayoutTree, NodeId};
use layoutimg_render_list::FixedAdvanceMeasurer;
use layoutimg_traits::{FontQuery, RenderError, TextMeasurer};
use layoutimg_types::geometry::{Rect, Size};
use std::cell::Cell;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn image() -> Element {
    Element::new("image")
}

pub fn row() -> Element {
    Element::new("row")
}

pub fn col() -> Element {
    Element::new("col")
}

pub fn text(content: &str) -> Element {
    Element::new("text").with_text(content)
}

/// At the default font size of 64px every character is 38px wide and a line is 86px tall.
pub fn measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer::default()
}

pub const CHAR_WIDTH: i32 = 38;
pub const LINE_HEIGHT: i32 = 86;

/// Builds, resolves and lays out `root` with the default engine.
pub fn lay_out(root: &Element) -> LayoutTree {
    init_logging();
    let engine = LayoutEngine::default();
    let mut tree = engine.build(root).unwrap();
    engine.resolve_inherit(&mut tree).unwrap();
    engine.layout(&mut tree, &measurer()).unwrap();
    tree
}

pub fn rect(tree: &LayoutTree, id: NodeId) -> Rect {
    tree.node(id).geometry().unwrap()
}

pub fn root_size(tree: &LayoutTree) -> Size {
    tree.node(tree.root()).size()
}

pub fn child(tree: &LayoutTree, id: NodeId, index: usize) -> NodeId {
    tree.children(id).nth(index).unwrap()
}

/// The first text node (pre-order) whose content equals `content`.
pub fn find_text(tree: &LayoutTree, content: &str) -> NodeId {
    tree.iter()
        .find(|(_, node)| node.text() == Some(content))
        .map(|(id, _)| id)
        .unwrap()
}

pub fn snapshot(tree: &LayoutTree) -> Vec<LayoutNode> {
    tree.iter().map(|(_, node)| node.clone()).collect()
}

/// Wraps a measurer and counts how often it is asked.
pub struct CountingMeasurer<M> {
    pub inner: M,
    pub calls: Cell<usize>,
}

impl<M> CountingMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }
}

impl<M: TextMeasurer> TextMeasurer for CountingMeasurer<M> {
    fn measure_text(&self, text: &str, font: FontQuery<'_>) -> Result<Size, RenderError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.measure_text(text, font)
    }
}

/// A measurer whose font lookups always fail.
pub struct MissingFontMeasurer;

impl TextMeasurer for MissingFontMeasurer {
    fn measure_text(&self, _text: &str, font: FontQuery<'_>) -> Result<Size, RenderError> {
        Err(RenderError::MissingResource(
            font.family.unwrap_or("default").to_string(),
        ))
    }
}
