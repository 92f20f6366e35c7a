#![allow(dead_code)]

use layoutimg::render_list::{DisplayList, FixedAdvanceMeasurer};
use layoutimg::{LayoutImage, LayoutTree, NodeId, PipelineError, Rect};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// At the default font size of 64px a character is 38px wide and a line 86px tall.
pub const CHAR_WIDTH: i32 = 38;
pub const LINE_HEIGHT: i32 = 86;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generated image together with the renderer it was drawn on.
pub struct Generated {
    pub image: LayoutImage,
    pub renderer: DisplayList<FixedAdvanceMeasurer>,
}

impl Generated {
    pub fn tree(&self) -> &LayoutTree {
        self.image.tree()
    }

    pub fn canvas(&self) -> (i32, i32) {
        (self.renderer.width(), self.renderer.height())
    }

    /// Geometry of the node reached by following child indices from the root.
    pub fn rect_at(&self, path: &[usize]) -> Rect {
        let tree = self.tree();
        let id = path.iter().fold(tree.root(), |id, &index| {
            tree.children(id).nth(index).expect("no child at index")
        });
        self.rect(id)
    }

    pub fn rect(&self, id: NodeId) -> Rect {
        self.tree()
            .node(id)
            .geometry()
            .expect("node has not been laid out")
    }
}

/// Parses, lays out and draws `markup` on a fresh display list.
pub fn generate(markup: &str) -> Result<Generated, PipelineError> {
    init_logging();
    let mut image = LayoutImage::new(markup)?;
    let measurer = FixedAdvanceMeasurer::default();
    let mut renderer = DisplayList::new(measurer);
    image.generate(&measurer, &mut renderer)?;
    Ok(Generated { image, renderer })
}
