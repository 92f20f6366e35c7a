pub mod node_painter;

use crate::tree::LayoutTree;
use crate::LayoutError;
use layoutimg_traits::Renderer;

/// Walks the tree in source order and paints every node.
///
/// Read-only: geometry is taken exactly as the layout pass left it. Fails with
/// a state error if the tree has not been laid out.
pub fn draw_tree<R>(tree: &LayoutTree, renderer: &mut R) -> Result<(), LayoutError>
where
    R: Renderer + ?Sized,
{
    if tree.node(tree.root()).position().is_none() {
        return Err(LayoutError::State(
            "Cannot draw before layout has run".to_string(),
        ));
    }
    for (_, node) in tree.iter() {
        node_painter::paint_node(node, renderer)?;
    }
    Ok(())
}
