use serde::Deserialize;

use super::kind::NodeKind;

/// Backend-assigned node identifier, unique within one fetched graph.
pub type NodeId = i64;

/// One code entity as emitted by the analyzer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
	/// Unique id within the graph.
	pub id: NodeId,
	/// Entity name; for containers, a `/`-separated path.
	#[serde(default)]
	pub name: String,
	/// What the node is.
	#[serde(default)]
	pub kind: NodeKind,
	/// Child ids in declaration order. May name nodes missing from the graph.
	#[serde(default)]
	pub children: Vec<NodeId>,
	/// Doc comment text, empty when absent.
	#[serde(default)]
	pub documentation: String,
	/// Source text of the item, empty when absent.
	#[serde(default, alias = "source_code")]
	pub source_code: String,
}

/// The code-structure document as fetched from the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawGraph {
	/// Id of the entry node.
	pub root: NodeId,
	/// Every node, in backend order.
	#[serde(default)]
	pub nodes: Vec<RawNode>,
}

impl RawGraph {
	/// Parses a graph document.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// First node carrying `id`, if any.
	pub fn node(&self, id: NodeId) -> Option<&RawNode> {
		self.nodes.iter().find(|node| node.id == id)
	}

	/// The entry node, if the document actually contains it.
	pub fn root_node(&self) -> Option<&RawNode> {
		self.node(self.root)
	}
}

#[cfg(test)]
mod tests {
	use super::RawGraph;
	use crate::model::NodeKind;

	#[test]
	fn parses_analyzer_output_without_optional_fields() {
		let graph = RawGraph::from_json(
			r#"{
				"root": 0,
				"nodes": [
					{ "id": 0, "name": "demo", "kind": { "module": { "path": "/src/demo" } }, "children": [1], "documentation": "" },
					{ "id": 1, "name": "lib.rs", "kind": { "module": { "path": "/src/demo/lib.rs" } }, "children": [] }
				]
			}"#,
		)
		.expect("graph parses");

		assert_eq!(graph.root, 0);
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.nodes[0].children, vec![1]);
		assert!(graph.nodes[1].documentation.is_empty());
		assert!(graph.nodes[1].source_code.is_empty());
		assert_eq!(graph.root_node().map(|n| n.name.as_str()), Some("demo"));
	}

	#[test]
	fn unknown_kind_does_not_fail_the_document() {
		let graph = RawGraph::from_json(
			r#"{
				"root": 3,
				"nodes": [
					{ "id": 3, "name": "Thing", "kind": { "externCrate": { "alias": "x" } }, "sourceCode": "extern crate x;" }
				]
			}"#,
		)
		.expect("graph parses");

		let node = graph.node(3).expect("node 3");
		assert_eq!(node.kind, NodeKind::Unknown);
		assert_eq!(node.source_code, "extern crate x;");
	}

	#[test]
	fn missing_root_is_not_an_error() {
		let graph = RawGraph::from_json(r#"{ "root": 9, "nodes": [] }"#).expect("graph parses");
		assert!(graph.root_node().is_none());
	}
}
