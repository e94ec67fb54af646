//! Renderer-neutral data model derived from a graph on every render.

use std::collections::HashMap;

use serde::Serialize;

/// A node as handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
	/// Identifier of the source node. Used to reference nodes in links.
	pub id: String,
	/// Hover label. Always equal to `id`.
	pub name: String,
	/// Origin flag copied from the source node.
	pub is_origin: bool,
}

/// A directed edge between two nodes, one per (node, successor) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphData {
	/// One entry per source node.
	pub nodes: Vec<GraphNode>,
	/// One entry per successor relation.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Identifier to origin flag, for classifying nodes in colorful mode.
	pub fn origin_lookup(&self) -> HashMap<String, bool> {
		self.nodes
			.iter()
			.map(|n| (n.id.clone(), n.is_origin))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_origin_flag_in_camel_case() {
		let node = GraphNode {
			id: "n1".into(),
			name: "n1".into(),
			is_origin: true,
		};
		let json = serde_json::to_value(&node).unwrap();
		assert_eq!(json["isOrigin"], serde_json::Value::Bool(true));
		assert_eq!(json["name"], "n1");
	}

	#[test]
	fn origin_lookup_keys_by_id() {
		let data = GraphData {
			nodes: vec![
				GraphNode {
					id: "a".into(),
					name: "a".into(),
					is_origin: true,
				},
				GraphNode {
					id: "b".into(),
					name: "b".into(),
					is_origin: false,
				},
			],
			links: vec![],
		};
		let lookup = data.origin_lookup();
		assert_eq!(lookup.get("a"), Some(&true));
		assert_eq!(lookup.get("b"), Some(&false));
		assert_eq!(lookup.get("c"), None);
	}
}
