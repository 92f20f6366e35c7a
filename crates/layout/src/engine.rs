//! The layout pass and the driver that sequences all passes.

use crate::algorithms::sizing::{self, SizeBounds};
use crate::algorithms::FlowCursor;
use crate::config::LayoutConfig;
use crate::element::Element;
use crate::inherit::propagate_inherit;
use crate::painting;
use crate::tree::LayoutTree;
use crate::LayoutError;
use indextree::NodeId;
use layoutimg_style::AttributeName;
use layoutimg_traits::{FontQuery, Renderer, TextMeasurer};
use layoutimg_types::geometry::{Axis, Point, Size};

/// Runs the passes over a [`LayoutTree`]: inherit, layout, draw.
///
/// Each pass must complete before the next starts. The engine holds no
/// per-tree state, so one engine can process any number of trees.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn build(&self, root: &Element) -> Result<LayoutTree, LayoutError> {
        LayoutTree::build(root)
    }

    /// Resolves every `inherit` value in the tree.
    pub fn resolve_inherit(&self, tree: &mut LayoutTree) -> Result<(), LayoutError> {
        propagate_inherit(tree, self.config.root_inherit)
    }

    /// Computes the position and size of every node, starting from the origin.
    ///
    /// Text nodes are sized through `measurer`, which must agree with the
    /// renderer later used for drawing.
    pub fn layout<M>(&self, tree: &mut LayoutTree, measurer: &M) -> Result<(), LayoutError>
    where
        M: TextMeasurer + ?Sized,
    {
        let root = tree.root();
        self.layout_node(tree, root, Point::origin(), measurer)?;
        let size = tree.node(root).size();
        log::debug!("Layout finished: {}x{}", size.width, size.height);
        Ok(())
    }

    /// Dispatches the laid out geometry to `renderer`.
    pub fn draw<R>(&self, tree: &LayoutTree, renderer: &mut R) -> Result<(), LayoutError>
    where
        R: Renderer + ?Sized,
    {
        painting::draw_tree(tree, renderer)
    }

    /// Inherit, layout and draw in sequence.
    pub fn process<M, R>(
        &self,
        tree: &mut LayoutTree,
        measurer: &M,
        renderer: &mut R,
    ) -> Result<(), LayoutError>
    where
        M: TextMeasurer + ?Sized,
        R: Renderer + ?Sized,
    {
        self.resolve_inherit(tree)?;
        self.layout(tree, measurer)?;
        self.draw(tree, renderer)
    }

    fn layout_node<M>(
        &self,
        tree: &mut LayoutTree,
        id: NodeId,
        cursor: Point,
        measurer: &M,
    ) -> Result<(), LayoutError>
    where
        M: TextMeasurer + ?Sized,
    {
        // Percentages resolve against the parent, which has finished its own
        // pre-children sizing by now. The root resolves them against zero.
        let parent_size = tree
            .parent(id)
            .map(|parent| tree.node(parent).size())
            .unwrap_or_default();

        let node = tree.node(id);
        let env = node.env();
        let position = sizing::resolve_position(env, cursor)?;
        let mut bounds = [SizeBounds { min: 0, max: 0 }; 2];
        let mut size = Size::zero();
        for (i, axis) in Axis::BOTH.into_iter().enumerate() {
            let base = parent_size.get(axis);
            bounds[i] = SizeBounds::resolve(env, axis, base)?;
            size.set(axis, sizing::presize(env, axis, base, 0, bounds[i])?);
        }

        let node = tree.node_mut(id);
        node.position = Some(position);
        node.size = size;

        let children: Vec<NodeId> = tree.children(id).collect();
        let mut flow = FlowCursor::new(position);
        for &child in &children {
            self.layout_node(tree, child, flow.position(), measurer)?;
            let child = tree.node(child);
            flow.advance(child.env().flow()?, child.laid_out_rect()?);
        }

        let node = tree.node(id);
        let env = node.env();
        let render_text = env.render_text()?;
        for (i, axis) in Axis::BOTH.into_iter().enumerate() {
            if !env.dimension(AttributeName::size(axis))?.is_auto() {
                continue;
            }
            let content = if render_text {
                let font = FontQuery::new(env.font()?, env.font_size()?);
                match axis {
                    Axis::X => measurer.measure_text(node.text().unwrap_or_default(), font)?.width,
                    Axis::Y => self.config.line_height(font.size),
                }
            } else {
                let rects = children
                    .iter()
                    .map(|&child| tree.node(child).laid_out_rect())
                    .collect::<Result<Vec<_>, _>>()?;
                sizing::content_extent(rects, position, axis)
            };
            size.set(axis, bounds[i].clamp(content));
        }

        log::trace!(
            "<{}> at ({}, {}) size {}x{}",
            node.tag(),
            position.x,
            position.y,
            size.width,
            size.height
        );
        tree.node_mut(id).size = size;
        Ok(())
    }
}
