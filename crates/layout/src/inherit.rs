//! Top-down resolution of `inherit` attribute values.

use crate::config::RootInheritPolicy;
use crate::tree::LayoutTree;
use crate::LayoutError;
use layoutimg_style::{AttributeEnvironment, StyleError, Tag};

/// Replaces every `inherit` value in the tree with the parent's resolved value.
///
/// Nodes are visited in pre-order, so each parent is fully resolved before any
/// of its children reads from it. Running the pass again is a no-op.
pub fn propagate_inherit(
    tree: &mut LayoutTree,
    policy: RootInheritPolicy,
) -> Result<(), LayoutError> {
    let order: Vec<_> = tree.iter().map(|(id, _)| id).collect();
    for id in order {
        if tree.node(id).env().is_resolved() {
            continue;
        }
        match tree.parent(id) {
            Some(parent) => {
                let parent_env = tree.node(parent).env().clone();
                tree.node_mut(id).env_mut().inherit_from(&parent_env)?;
            }
            None => resolve_root(tree.node_mut(id).env_mut(), policy)?,
        }
    }
    Ok(())
}

fn resolve_root(
    env: &mut AttributeEnvironment,
    policy: RootInheritPolicy,
) -> Result<(), StyleError> {
    let Some(name) = env.unresolved().next() else {
        return Ok(());
    };
    match policy {
        RootInheritPolicy::Fallback => {
            log::debug!(
                "Root attribute '{}' is 'inherit'; using the {} default",
                name,
                Tag::Image
            );
            env.inherit_from(&AttributeEnvironment::for_tag(Tag::Image))
        }
        RootInheritPolicy::Reject => Err(StyleError::UnresolvedInherit {
            name: name.as_str().to_string(),
        }),
    }
}
