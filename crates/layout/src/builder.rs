//! Tree construction and structural validation.

use crate::element::Element;
use crate::node::LayoutNode;
use crate::tree::LayoutTree;
use crate::LayoutError;
use indextree::{Arena, NodeId};
use layoutimg_style::{AttributeEnvironment, Tag};

pub(crate) fn build_tree(root: &Element) -> Result<LayoutTree, LayoutError> {
    if root.tag != Tag::Image.as_str() {
        return Err(LayoutError::InvalidRootTag(root.tag.clone()));
    }
    let mut arena = Arena::with_capacity(root.count());
    let root_id = build_node(&mut arena, root, true)?;
    log::debug!("Built layout tree with {} nodes", arena.count());
    Ok(LayoutTree::from_parts(arena, root_id))
}

/// Builds the subtree for `element`: defaults, explicit attributes, then the
/// children in source order, which are attached once the node exists.
fn build_node(
    arena: &mut Arena<LayoutNode>,
    element: &Element,
    is_root: bool,
) -> Result<NodeId, LayoutError> {
    let mut env = AttributeEnvironment::resolve_defaults(&element.tag)?;
    let tag = env.tag();
    if tag == Tag::Image && !is_root {
        return Err(LayoutError::MisplacedImageTag);
    }

    for (name, raw) in &element.attributes {
        env.apply(name, raw)?;
    }

    let text = if tag.accepts_text() {
        if !element.children.is_empty() {
            return Err(LayoutError::TextNodeHasChildren);
        }
        Some(element.text.clone().unwrap_or_default())
    } else {
        if let Some(text) = element.text.as_deref().filter(|t| !t.trim().is_empty()) {
            return Err(LayoutError::UnexpectedText {
                tag: tag.as_str().to_string(),
                text: text.to_string(),
            });
        }
        None
    };

    let children = element
        .children
        .iter()
        .map(|child| build_node(arena, child, false))
        .collect::<Result<Vec<_>, _>>()?;

    let id = arena.new_node(LayoutNode::new(env, text));
    for child in children {
        id.checked_append(child, arena)?;
    }
    Ok(id)
}
