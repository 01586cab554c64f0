//! Recursive hierarchy builder.
//!
//! One generic depth-first descent over [`ArchivalComponent`]s. Each call
//! draws the component's order from the run's [`OrderCounter`] before any
//! child is visited, so orders come out in pre-order. The parent chain
//! handed to the children is the current chain plus this component's
//! inventory number.

use crate::counter::OrderCounter;
use crate::error::{ConvertError, Result};
use crate::header::resolve_header;
use crate::markup::serialize_markup;
use crate::models::{ArchivalComponent, Fidelity, Node};

/// Convert one component and its whole subtree into a [`Node`].
///
/// `parent_ids` is empty for root-level components. Any scope-content
/// serialization failure in the subtree aborts the call.
pub fn build_node<C: ArchivalComponent>(
    component: &C,
    parent_ids: &[String],
    counter: &mut OrderCounter,
    fidelity: Fidelity,
) -> Result<Node> {
    let order = counter.next_order();
    let sparse = fidelity.is_sparse();

    let mut node = Node {
        tag: if sparse {
            String::new()
        } else {
            component.tag().to_string()
        },
        depth: depth_for(parent_ids),
        order,
        level_type: component.level_type().to_string(),
        level_subtype: component.level_subtype().to_string(),
        parent_ids: parent_ids.to_vec(),
        header: resolve_header(component.did(), fidelity),
        html: String::new(),
        children: Vec::new(),
    };

    if !sparse {
        if let Some(scope) = component.scope_content() {
            node.html =
                serialize_markup(&scope.paragraphs).map_err(|source| ConvertError::Markup {
                    tag: component.tag().to_string(),
                    order,
                    path: parent_ids.to_vec(),
                    source,
                })?;
        }
    }

    let children = component.children();
    if !children.is_empty() {
        let mut child_ids = Vec::with_capacity(parent_ids.len() + 1);
        child_ids.extend_from_slice(parent_ids);
        child_ids.push(node.header.inventory_number.clone());

        node.children.reserve(children.len());
        for child in children {
            node.children
                .push(build_node(child, &child_ids, counter, fidelity)?);
        }
    }

    Ok(node)
}

fn depth_for(parent_ids: &[String]) -> u32 {
    (parent_ids.len() + 1) as u32
}
