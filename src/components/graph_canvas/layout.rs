use std::collections::{HashMap, VecDeque};

use crate::config::{LayoutDirection, LayoutOptions};
use crate::graph::RenderGraph;

/// Positions for `graph.nodes`, index for index, in graph space.
///
/// Nodes without incoming edges are roots at level 0. Everything else sits one
/// level below the node it is first reached from in a breadth-first walk that
/// follows edges in order. Nodes only reachable through a cycle start their own
/// walk at level 0.
pub fn hierarchical(graph: &RenderGraph, options: &LayoutOptions) -> Vec<(f64, f64)> {
	let count = graph.nodes.len();
	let mut index = HashMap::with_capacity(count);
	for (i, node) in graph.nodes.iter().enumerate() {
		index.entry(node.id).or_insert(i);
	}

	let mut children = vec![Vec::new(); count];
	let mut incoming = vec![0usize; count];
	for edge in &graph.edges {
		if let (Some(&from), Some(&to)) = (index.get(&edge.from), index.get(&edge.to)) {
			children[from].push(to);
			if from != to {
				incoming[to] += 1;
			}
		}
	}

	let mut level_of: Vec<Option<usize>> = vec![None; count];
	let mut levels: Vec<Vec<usize>> = Vec::new();
	let mut assign = |node: usize, level: usize, level_of: &mut [Option<usize>]| {
		level_of[node] = Some(level);
		if levels.len() <= level {
			levels.resize_with(level + 1, Vec::new);
		}
		levels[level].push(node);
	};

	let mut queue = VecDeque::new();
	for node in (0..count).filter(|&i| incoming[i] == 0) {
		assign(node, 0, &mut level_of);
		queue.push_back(node);
	}
	let mut seeds = 0..count;
	loop {
		while let Some(node) = queue.pop_front() {
			let level = level_of[node].unwrap_or(0);
			for &child in &children[node] {
				if level_of[child].is_none() {
					assign(child, level + 1, &mut level_of);
					queue.push_back(child);
				}
			}
		}
		match seeds.find(|&i| level_of[i].is_none()) {
			Some(seed) => {
				assign(seed, 0, &mut level_of);
				queue.push_back(seed);
			}
			None => break,
		}
	}

	let mut positions = vec![(0.0, 0.0); count];
	for (level, members) in levels.iter().enumerate() {
		let depth = level as f64 * options.level_separation;
		let center = (members.len() as f64 - 1.0) / 2.0;
		for (slot, &node) in members.iter().enumerate() {
			let along = (slot as f64 - center) * options.node_spacing;
			positions[node] = match options.direction {
				LayoutDirection::UpDown => (along, depth),
				LayoutDirection::DownUp => (along, -depth),
				LayoutDirection::LeftRight => (depth, along),
				LayoutDirection::RightLeft => (-depth, along),
			};
		}
	}
	positions
}

#[cfg(test)]
mod tests {
	use super::hierarchical;
	use crate::config::{LayoutDirection, LayoutOptions};
	use crate::graph::{RenderEdge, RenderGraph, RenderNode};

	fn graph(ids: &[i64], edges: &[(i64, i64)]) -> RenderGraph {
		RenderGraph {
			nodes: ids
				.iter()
				.map(|&id| RenderNode {
					id,
					label: id.to_string(),
					tooltip: String::new(),
					color: "#000",
				})
				.collect(),
			edges: edges
				.iter()
				.map(|&(from, to)| RenderEdge {
					from,
					to,
					directed: true,
				})
				.collect(),
		}
	}

	#[test]
	fn children_sit_one_level_below_parent() {
		let g = graph(&[1, 2, 3, 4], &[(1, 2), (1, 3), (3, 4)]);
		let pos = hierarchical(&g, &LayoutOptions::default());

		assert_eq!(pos[0], (0.0, 0.0));
		assert_eq!(pos[1], (-50.0, 150.0));
		assert_eq!(pos[2], (50.0, 150.0));
		assert_eq!(pos[3], (0.0, 300.0));
	}

	#[test]
	fn direction_rotates_axes() {
		let g = graph(&[1, 2], &[(1, 2)]);
		let options = LayoutOptions {
			direction: LayoutDirection::RightLeft,
			..LayoutOptions::default()
		};
		let pos = hierarchical(&g, &options);
		assert_eq!(pos, vec![(0.0, 0.0), (-150.0, 0.0)]);
	}

	#[test]
	fn cycles_and_self_loops_still_get_placed() {
		let g = graph(&[1, 2, 3], &[(1, 1), (2, 3), (3, 2)]);
		let pos = hierarchical(&g, &LayoutOptions::default());

		assert_eq!(pos.len(), 3);
		assert_eq!(pos[0].1, 0.0);
		assert_eq!(pos[1].1, 0.0);
		assert_eq!(pos[2].1, 150.0);
	}

	#[test]
	fn layout_is_deterministic() {
		let g = graph(&[1, 2, 3, 4, 5], &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);
		let options = LayoutOptions::default();
		assert_eq!(hierarchical(&g, &options), hierarchical(&g, &options));
	}
}
