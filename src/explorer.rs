//! The explorer's mutable state: the loaded graph and the selection.

use std::collections::HashMap;

use log::info;

use crate::detail::DetailView;
use crate::graph::{RenderGraph, transform};
use crate::model::{NodeId, RawGraph, RawNode};
use crate::selection::Selection;

/// A fetched graph together with its render projection.
#[derive(Clone, Debug)]
pub struct LoadedGraph {
	raw: RawGraph,
	render: RenderGraph,
	index: HashMap<NodeId, usize>,
}

impl LoadedGraph {
	fn new(raw: RawGraph) -> Self {
		let render = transform(&raw);
		let mut index = HashMap::with_capacity(raw.nodes.len());
		for (pos, node) in raw.nodes.iter().enumerate() {
			index.entry(node.id).or_insert(pos);
		}
		Self { raw, render, index }
	}

	/// The graph as fetched.
	pub fn raw(&self) -> &RawGraph {
		&self.raw
	}

	/// The derived render graph.
	pub fn render(&self) -> &RenderGraph {
		&self.render
	}

	/// Looks a raw node up by id. The first node wins if ids repeat.
	pub fn node(&self, id: NodeId) -> Option<&RawNode> {
		self.index.get(&id).map(|&pos| &self.raw.nodes[pos])
	}
}

/// Current graph plus current selection, handed to interaction handlers.
#[derive(Clone, Debug, Default)]
pub struct Explorer {
	graph: Option<LoadedGraph>,
	selection: Selection,
}

impl Explorer {
	/// An explorer with no graph and no selection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the current graph wholesale and clears the selection.
	pub fn load(&mut self, raw: RawGraph) {
		let loaded = LoadedGraph::new(raw);
		info!(
			"loaded graph: {} nodes, {} edges",
			loaded.render.nodes.len(),
			loaded.render.edges.len()
		);
		self.graph = Some(loaded);
		self.selection.reload();
	}

	/// Handles a node pick from the canvas.
	pub fn pick(&mut self, id: NodeId) {
		self.selection.pick(id);
	}

	/// Handles a dismiss from the panel, the keyboard or the canvas background.
	pub fn dismiss(&mut self) {
		self.selection.dismiss();
	}

	/// The current selection.
	pub fn selection(&self) -> Selection {
		self.selection
	}

	/// The loaded graph, if any.
	pub fn graph(&self) -> Option<&LoadedGraph> {
		self.graph.as_ref()
	}

	/// The render graph of the loaded graph, if any.
	pub fn render_graph(&self) -> Option<&RenderGraph> {
		self.graph.as_ref().map(LoadedGraph::render)
	}

	/// The raw node behind the current selection.
	pub fn selected_node(&self) -> Option<&RawNode> {
		let id = self.selection.selected()?;
		self.graph.as_ref()?.node(id)
	}

	/// Detail view of the selected node, when it resolves in the current graph.
	pub fn detail(&self) -> Option<DetailView> {
		self.selected_node().map(DetailView::new)
	}

	/// Whether the detail panel is showing.
	pub fn detail_visible(&self) -> bool {
		self.selection.detail_visible()
	}
}

#[cfg(test)]
mod tests {
	use super::Explorer;
	use crate::model::{NodeKind, RawGraph, RawNode};
	use crate::selection::Selection;

	fn graph(names: &[(i64, &str)]) -> RawGraph {
		RawGraph {
			root: names[0].0,
			nodes: names
				.iter()
				.map(|&(id, name)| RawNode {
					id,
					name: name.into(),
					kind: NodeKind::Module {
						path: name.into(),
					},
					children: Vec::new(),
					documentation: String::new(),
					source_code: String::new(),
				})
				.collect(),
		}
	}

	#[test]
	fn pick_resolves_detail() {
		let mut explorer = Explorer::new();
		explorer.load(graph(&[(1, "a"), (2, "b")]));

		explorer.pick(2);

		assert!(explorer.detail_visible());
		let detail = explorer.detail().expect("detail for node 2");
		assert_eq!(detail.name, "b");
		assert_eq!(detail.type_label, "module");
	}

	#[test]
	fn loading_a_new_graph_clears_selection() {
		let mut explorer = Explorer::new();
		explorer.load(graph(&[(1, "a"), (5, "b")]));
		explorer.pick(5);

		explorer.load(graph(&[(5, "other")]));

		assert_eq!(explorer.selection(), Selection::Idle);
		assert!(explorer.detail().is_none());
		assert_eq!(explorer.render_graph().map(|g| g.nodes.len()), Some(1));
	}

	#[test]
	fn unresolved_pick_is_selected_without_detail() {
		let mut explorer = Explorer::new();
		explorer.pick(3);
		assert_eq!(explorer.selection(), Selection::Selected(3));
		assert!(explorer.detail().is_none());
	}

	#[test]
	fn repeated_ids_resolve_to_first_node() {
		let mut explorer = Explorer::new();
		explorer.load(graph(&[(1, "first"), (1, "second")]));
		explorer.pick(1);
		assert_eq!(explorer.selected_node().map(|n| n.name.as_str()), Some("first"));
	}
}
