//! Core data models for eadtree.
//!
//! Input side: [`Description`], [`Level`] and the identification block
//! ([`Did`]) as handed over by a markup reader. Output side: [`NodeList`],
//! [`Node`] and [`Header`], the normalized tree consumed by indexing and
//! navigation views. Output types serialize with camelCase field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::markup::Markup;

// ═══════════════════════════════════════════════════════════════════════
// Fidelity
// ═══════════════════════════════════════════════════════════════════════

/// Output fidelity of a conversion run.
///
/// `Full` keeps every descriptive field. `Sparse` keeps only what a
/// lightweight tree/list navigation view needs. Both produce the same tree
/// shape, orders, depths and parent chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fidelity {
    #[default]
    Full,
    Sparse,
}

impl Fidelity {
    pub fn is_sparse(self) -> bool {
        self == Fidelity::Sparse
    }
}

impl fmt::Display for Fidelity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fidelity::Full => write!(f, "full"),
            Fidelity::Sparse => write!(f, "sparse"),
        }
    }
}

impl FromStr for Fidelity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Fidelity::Full),
            "sparse" => Ok(Fidelity::Sparse),
            other => Err(format!(
                "unknown fidelity '{}'. Must be full or sparse.",
                other
            )),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Input: archival description
// ═══════════════════════════════════════════════════════════════════════

/// Top-level archival description: the `<dsc>` of a finding aid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description<C = Level> {
    /// The `type` attribute of the description (e.g. `combined`).
    pub level_type: String,
    /// `<head>` labels, in document order.
    pub labels: Vec<String>,
    /// Root-level components, in document order.
    pub components: Vec<C>,
}

/// One component (`<c>`, `<c01>` … `<c12>`) of the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Raw element name the component was read from.
    pub tag: String,
    /// `level` attribute (series, file, item, otherlevel, ...).
    pub level: String,
    /// `otherlevel` attribute.
    pub other_level: String,
    pub did: Did,
    pub scope_content: Option<ScopeContent>,
    pub children: Vec<Level>,
}

/// Identification block of a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Did {
    pub unit_ids: Vec<UnitId>,
    pub unit_titles: Vec<UnitTitle>,
    /// Dates attached directly to the block, not nested in a title.
    pub unit_dates: Vec<UnitDate>,
    pub physdesc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitId {
    /// Identifier value (element text).
    pub id: String,
    /// `identifier` attribute.
    pub identifier: String,
    /// `type` attribute; drives inventory number selection.
    pub kind: String,
    pub audience: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitTitle {
    pub text: String,
    pub dates: Vec<UnitDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitDate {
    pub calendar: String,
    pub era: String,
    /// `normal` attribute, e.g. `1900/1910`.
    pub normal: String,
    /// Rendered date text.
    pub label: String,
}

/// Descriptive rich text of a component: its `<p>` paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeContent {
    pub paragraphs: Vec<Markup>,
}

/// A component that can be turned into a [`Node`].
///
/// The hierarchy builder is generic over this trait so any nested
/// representation can be converted without per-depth code.
pub trait ArchivalComponent {
    fn tag(&self) -> &str;
    fn level_type(&self) -> &str;
    fn level_subtype(&self) -> &str;
    fn did(&self) -> &Did;
    fn scope_content(&self) -> Option<&ScopeContent>;
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

impl ArchivalComponent for Level {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn level_type(&self) -> &str {
        &self.level
    }

    fn level_subtype(&self) -> &str {
        &self.other_level
    }

    fn did(&self) -> &Did {
        &self.did
    }

    fn scope_content(&self) -> Option<&ScopeContent> {
        self.scope_content.as_ref()
    }

    fn children(&self) -> &[Level] {
        &self.children
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Output: normalized node tree
// ═══════════════════════════════════════════════════════════════════════

/// Root container produced by one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeList {
    #[serde(rename = "type", default)]
    pub level_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Total number of nodes in the tree (the final counter value).
    #[serde(default)]
    pub node_count: u64,
}

impl NodeList {
    /// Iterate over every node in pre-order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.nodes.iter().rev().collect(),
        }
    }
}

/// One normalized component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    pub depth: u32,
    pub order: u64,
    #[serde(rename = "type", default)]
    pub level_type: String,
    #[serde(rename = "subType", default, skip_serializing_if = "String::is_empty")]
    pub level_subtype: String,
    /// Inventory numbers of all ancestors, root first.
    #[serde(default)]
    pub parent_ids: Vec<String>,
    pub header: Header,
    /// Serialized scope content (full fidelity only).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Iterate over this node and its descendants in pre-order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order traversal over a node tree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Resolved identification summary of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<NodeDate>,
    #[serde(default)]
    pub date_as_label: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<NodeIdentifier>,
    #[serde(default)]
    pub inventory_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub physical_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeIdentifier {
    pub id: String,
    #[serde(rename = "typeID")]
    pub type_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub audience: String,
}

impl From<&UnitId> for NodeIdentifier {
    fn from(unit_id: &UnitId) -> Self {
        Self {
            id: unit_id.id.clone(),
            type_id: unit_id.identifier.clone(),
            kind: unit_id.kind.clone(),
            audience: unit_id.audience.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDate {
    pub calendar: String,
    pub era: String,
    pub normal: String,
    pub label: String,
}

impl From<&UnitDate> for NodeDate {
    fn from(date: &UnitDate) -> Self {
        Self {
            calendar: date.calendar.clone(),
            era: date.era.clone(),
            normal: date.normal.clone(),
            label: date.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(order: u64) -> Node {
        Node {
            order,
            ..Default::default()
        }
    }

    #[test]
    fn fidelity_parses_and_displays() {
        assert_eq!("full".parse::<Fidelity>().unwrap(), Fidelity::Full);
        assert_eq!("sparse".parse::<Fidelity>().unwrap(), Fidelity::Sparse);
        assert!("lossy".parse::<Fidelity>().is_err());
        assert_eq!(Fidelity::Sparse.to_string(), "sparse");
        assert!(Fidelity::Sparse.is_sparse());
        assert!(!Fidelity::default().is_sparse());
    }

    #[test]
    fn pre_order_iteration() {
        let mut first = leaf(1);
        let mut second = leaf(2);
        second.children.push(leaf(3));
        first.children.push(second);
        first.children.push(leaf(4));
        let list = NodeList {
            nodes: vec![first, leaf(5)],
            ..Default::default()
        };

        let orders: Vec<u64> = list.iter().map(|n| n.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
        assert_eq!(list.nodes[0].iter().count(), 4);
    }

    #[test]
    fn identifier_projection_is_verbatim() {
        let unit_id = UnitId {
            id: "A1".to_string(),
            identifier: "urn:x".to_string(),
            kind: "ABS".to_string(),
            audience: "external".to_string(),
        };
        let projected = NodeIdentifier::from(&unit_id);
        assert_eq!(projected.id, "A1");
        assert_eq!(projected.type_id, "urn:x");
        assert_eq!(projected.kind, "ABS");
        assert_eq!(projected.audience, "external");
    }

    #[test]
    fn node_serializes_camel_case() {
        let node = Node {
            order: 7,
            depth: 2,
            level_type: "file".to_string(),
            parent_ids: vec!["S1".to_string()],
            header: Header {
                inventory_number: "7".to_string(),
                date_as_label: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["parentIds"][0], "S1");
        assert_eq!(json["header"]["inventoryNumber"], "7");
        assert_eq!(json["header"]["dateAsLabel"], true);
        assert!(json.get("tag").is_none());
        assert!(json.get("html").is_none());
    }
}
