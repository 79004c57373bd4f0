use std::collections::{HashMap, HashSet};

use crate::config::LayoutOptions;
use crate::graph::RenderGraph;
use crate::model::NodeId;

use super::layout;

pub const NODE_RADIUS: f64 = 10.0;
pub const HIT_RADIUS: f64 = 16.0;
/// Pointer travel, in screen pixels, below which a press-release is a click.
pub const CLICK_TOLERANCE: f64 = 4.0;
const FIT_MARGIN: f64 = 60.0;

#[derive(Clone, Debug)]
pub struct PlacedNode {
	pub id: NodeId,
	pub label: String,
	pub tooltip: String,
	pub color: &'static str,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub pointer: (f64, f64),
}

/// What a finished press-release on the canvas amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Click {
	Node(NodeId),
	Background,
	Drag,
}

pub struct GraphCanvasState {
	pub nodes: Vec<PlacedNode>,
	pub edges: Vec<(usize, usize)>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<NodeId>,
	pub width: f64,
	pub height: f64,
}

impl GraphCanvasState {
	pub fn new(graph: &RenderGraph, options: &LayoutOptions, width: f64, height: f64) -> Self {
		let positions = layout::hierarchical(graph, options);
		let nodes: Vec<PlacedNode> = graph
			.nodes
			.iter()
			.zip(positions)
			.map(|(node, (x, y))| PlacedNode {
				id: node.id,
				label: node.label.clone(),
				tooltip: node.tooltip.clone(),
				color: node.color,
				x,
				y,
			})
			.collect();

		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			index.entry(node.id).or_insert(i);
		}
		let edges = graph
			.edges
			.iter()
			.filter_map(|edge| Some((*index.get(&edge.from)?, *index.get(&edge.to)?)))
			.collect();

		let mut state = Self {
			nodes,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			selected: None,
			width,
			height,
		};
		state.fit();
		state
	}

	/// Centers the layout and zooms out until it fits, never zooming in past 1.
	pub fn fit(&mut self) {
		let Some(first) = self.nodes.first() else {
			return;
		};
		let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
		for node in &self.nodes {
			min_x = min_x.min(node.x);
			min_y = min_y.min(node.y);
			max_x = max_x.max(node.x);
			max_y = max_y.max(node.y);
		}
		let (span_x, span_y) = (max_x - min_x, max_y - min_y);
		let avail_x = (self.width - 2.0 * FIT_MARGIN).max(1.0);
		let avail_y = (self.height - 2.0 * FIT_MARGIN).max(1.0);
		let k = [1.0, avail_x / span_x.max(1.0), avail_y / span_y.max(1.0)]
			.into_iter()
			.fold(f64::INFINITY, f64::min)
			.clamp(0.1, 1.0);

		self.transform = ViewTransform {
			x: self.width / 2.0 - (min_x + span_x / 2.0) * k,
			y: self.height / 2.0 - (min_y + span_y / 2.0) * k,
			k,
		};
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Index of the node nearest to the screen point, within [`HIT_RADIUS`].
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (i, (node.x - gx).hypot(node.y - gy)))
			.filter(|&(_, dist)| dist < HIT_RADIUS)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	pub fn is_selected(&self, idx: usize) -> bool {
		self.selected.is_some() && self.nodes.get(idx).map(|n| n.id) == self.selected
	}

	pub fn press(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Pans while pressed, otherwise tracks hover. Returns whether a redraw is due.
	pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
		self.hover.pointer = (x, y);
		if self.pan.active {
			let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
			if dx.hypot(dy) >= CLICK_TOLERANCE {
				self.pan.moved = true;
			}
			if self.pan.moved {
				self.transform.x = self.pan.transform_start_x + dx;
				self.transform.y = self.pan.transform_start_y + dy;
				return true;
			}
			return false;
		}
		let before = self.hover.node;
		let hovered = self.node_at_position(x, y);
		self.set_hover(hovered);
		before != hovered || hovered.is_some()
	}

	pub fn release(&mut self, x: f64, y: f64) -> Click {
		let was_drag = !self.pan.active || self.pan.moved;
		self.pan = PanState::default();
		if was_drag {
			return Click::Drag;
		}
		match self.node_at_position(x, y) {
			Some(idx) => Click::Node(self.nodes[idx].id),
			None => Click::Background,
		}
	}

	pub fn leave(&mut self) {
		self.pan = PanState::default();
		self.set_hover(None);
	}

	/// Zooms by `factor` keeping the graph point under (`x`, `y`) fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Keeps the view centered on the same graph point across a viewport resize.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}
