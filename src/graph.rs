//! Projection of a [`RawGraph`] into the node/edge lists the canvas draws.

use std::collections::HashSet;

use log::debug;

use crate::model::{NodeId, RawGraph};
use crate::presentation;

/// A node ready to be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderNode {
	/// Id of the [`crate::model::RawNode`] this was derived from.
	pub id: NodeId,
	/// Text drawn beside the node.
	pub label: String,
	/// Hover text.
	pub tooltip: String,
	/// CSS color string.
	pub color: &'static str,
}

/// A parent → child arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderEdge {
	/// Parent id.
	pub from: NodeId,
	/// Child id.
	pub to: NodeId,
	/// Always `true`; edges are drawn as arrows.
	pub directed: bool,
}

/// Everything the canvas needs, derived wholesale from one [`RawGraph`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderGraph {
	/// One entry per raw node, in raw order.
	pub nodes: Vec<RenderNode>,
	/// One entry per resolvable child reference, grouped by parent in node order.
	pub edges: Vec<RenderEdge>,
}

/// Builds the render graph.
///
/// Child references to ids absent from the graph are dropped. Duplicate
/// child entries and self-references are kept as they are.
pub fn transform(raw: &RawGraph) -> RenderGraph {
	let known: HashSet<NodeId> = raw.nodes.iter().map(|node| node.id).collect();

	let nodes = raw
		.nodes
		.iter()
		.map(|node| RenderNode {
			id: node.id,
			label: presentation::label(node),
			tooltip: presentation::tooltip(node),
			color: presentation::color(node.kind.tag()),
		})
		.collect();

	let mut edges = Vec::new();
	for node in &raw.nodes {
		for &child in &node.children {
			if known.contains(&child) {
				edges.push(RenderEdge {
					from: node.id,
					to: child,
					directed: true,
				});
			} else {
				debug!("dropping edge {} -> {child}: no such node", node.id);
			}
		}
	}

	RenderGraph { nodes, edges }
}
