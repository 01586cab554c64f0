//! # eadtree core
//!
//! Pure, I/O-free normalization engine for hierarchical archival
//! descriptions. A nested tree of archival components (series, files,
//! items, nested to any depth) is flattened into order-stamped,
//! depth-stamped [`models::Node`]s with resolved headers and parent
//! chains, ready for indexing and navigation views.
//!
//! ## Pipeline
//!
//! ```text
//! Description ──▶ assemble ──▶ hierarchy (recursive) ──▶ NodeList
//!                    │               │
//!              OrderCounter      header + markup
//! ```
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Input components and output node types |
//! | [`counter`] | Per-run pre-order counter |
//! | [`header`] | Titles, dates, identifiers, inventory number |
//! | [`markup`] | Scope-content rich text and its XML serialization |
//! | [`hierarchy`] | Recursive node builder |
//! | [`assemble`] | Top-level container and entry points |
//! | [`error`] | Conversion errors |
//!
//! This crate performs no filesystem or network I/O.

pub mod assemble;
pub mod counter;
pub mod error;
pub mod header;
pub mod hierarchy;
pub mod markup;
pub mod models;

pub use assemble::{build_full, build_node_list, build_sparse};
pub use error::{ConvertError, MarkupError};
pub use models::{Description, Fidelity, Node, NodeList};
