//! Root assembly and conversion entry points.
//!
//! Every call allocates its own [`OrderCounter`], so independent
//! conversions never share state and may run concurrently.

use crate::counter::OrderCounter;
use crate::error::Result;
use crate::hierarchy::build_node;
use crate::models::{ArchivalComponent, Description, Fidelity, NodeList};

/// Convert a description at full fidelity.
pub fn build_full<C: ArchivalComponent>(description: &Description<C>) -> Result<(NodeList, u64)> {
    build_node_list(description, Fidelity::Full)
}

/// Convert a description at sparse fidelity, for navigation views.
pub fn build_sparse<C: ArchivalComponent>(
    description: &Description<C>,
) -> Result<(NodeList, u64)> {
    build_node_list(description, Fidelity::Sparse)
}

/// Convert a description into a [`NodeList`].
///
/// Returns the list together with the total node count. Fails as a whole
/// when any component's scope content cannot be serialized.
pub fn build_node_list<C: ArchivalComponent>(
    description: &Description<C>,
    fidelity: Fidelity,
) -> Result<(NodeList, u64)> {
    let mut counter = OrderCounter::new();

    let mut list = NodeList {
        level_type: description.level_type.clone(),
        labels: description.labels.clone(),
        nodes: Vec::with_capacity(description.components.len()),
        node_count: 0,
    };

    for component in &description.components {
        list.nodes
            .push(build_node(component, &[], &mut counter, fidelity)?);
    }

    let total = counter.current();
    list.node_count = total;

    tracing::debug!(
        fidelity = %fidelity,
        roots = list.nodes.len(),
        nodes = total,
        "built node list"
    );

    Ok((list, total))
}
