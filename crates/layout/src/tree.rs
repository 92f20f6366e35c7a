use crate::builder;
use crate::element::Element;
use crate::node::LayoutNode;
use crate::LayoutError;
use indextree::{Arena, NodeId};

/// The layout tree.
///
/// Nodes live in an arena; parents own the ordered list of their children and
/// a child reaches its parent only through the arena's non-owning parent link.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    arena: Arena<LayoutNode>,
    root: NodeId,
}

impl LayoutTree {
    /// Builds and validates a tree from a parsed element tree.
    pub fn build(root: &Element) -> Result<Self, LayoutError> {
        builder::build_tree(root)
    }

    pub(crate) fn from_parts(arena: Arena<LayoutNode>, root: NodeId) -> Self {
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &LayoutNode {
        self.arena[id].get()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        self.arena[id].get_mut()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent()
    }

    /// Children of `id` in source order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// All nodes in depth-first pre-order (source order), root first.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &LayoutNode)> + '_ {
        self.root
            .descendants(&self.arena)
            .map(move |id| (id, self.node(id)))
    }

    pub fn len(&self) -> usize {
        self.arena.count()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Whether no node holds an `inherit` value any more.
    pub fn is_resolved(&self) -> bool {
        self.iter().all(|(_, node)| node.env().is_resolved())
    }

    /// Whether the layout pass has assigned geometry to every node.
    pub fn is_laid_out(&self) -> bool {
        self.iter().all(|(_, node)| node.position().is_some())
    }
}
