//! Data model for the analyzer's code-structure document.
//!
//! A [`RawGraph`] is the tree the backend emits: a root id plus a flat list of
//! [`RawNode`]s that point at their children by id. Each node carries a
//! [`NodeKind`], a closed set of code-entity variants.

mod graph;
mod kind;

pub use graph::{NodeId, RawGraph, RawNode};
pub use kind::{Field, KindTag, NodeKind};
