//! Read-only directed graph consumed by the visualization.
//!
//! The visualization only needs a small query surface from a graph: enumerate
//! nodes, follow successors, and read two flags. That surface is captured by the
//! [`Graph`] and [`Node`] traits. [`AdjacencyGraph`] is the concrete
//! implementation the host application builds from an embedded JSON document.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::GraphError;

/// A node as seen by the visualization.
///
/// The identifier is the sole key for equality and lookup: two handles with the
/// same `id` are treated as the same node.
pub trait Node: Sized {
	/// Stable identifier, unique within its graph.
	fn id(&self) -> &str;
	/// Direct successors, in the graph's enumeration order. May be empty.
	fn successors(&self) -> impl Iterator<Item = Self>;
	/// Whether this node was marked as an origin when the graph was built.
	fn is_origin(&self) -> bool;
}

/// A graph as seen by the visualization.
pub trait Graph {
	/// Node handle type yielded by this graph.
	type Node<'a>: Node
	where
		Self: 'a;

	/// All nodes, in a stable enumeration order.
	fn nodes(&self) -> impl Iterator<Item = Self::Node<'_>>;

	/// Whether this graph is the vertex-cover ("VC") variant.
	fn is_vc_graph(&self) -> bool;
}

/// Serialized node: identifier, origin flag and successor identifiers.
#[derive(Clone, Debug, Deserialize)]
pub struct NodeDocument {
	/// Unique identifier.
	pub id: String,
	/// Origin flag; absent means `false`.
	#[serde(default)]
	pub origin: bool,
	/// Successor identifiers, in order.
	#[serde(default)]
	pub successors: Vec<String>,
}

/// Serialized graph as embedded by the host page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
	/// Vertex-cover variant flag.
	#[serde(default)]
	pub is_vc_graph: bool,
	/// Nodes, in enumeration order.
	#[serde(default)]
	pub nodes: Vec<NodeDocument>,
}

#[derive(Clone, Debug)]
struct NodeEntry {
	id: String,
	origin: bool,
	successors: Vec<usize>,
}

/// Immutable adjacency-list graph.
///
/// Node order and successor order follow the source document. Parallel edges
/// are preserved.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
	nodes: Vec<NodeEntry>,
	index: HashMap<String, usize>,
	is_vc_graph: bool,
}

impl AdjacencyGraph {
	/// Build a graph from a parsed document, resolving successor ids.
	pub fn from_document(doc: GraphDocument) -> Result<Self, GraphError> {
		let mut index = HashMap::with_capacity(doc.nodes.len());
		for (i, node) in doc.nodes.iter().enumerate() {
			if index.insert(node.id.clone(), i).is_some() {
				return Err(GraphError::DuplicateNode {
					id: node.id.clone(),
				});
			}
		}

		let mut nodes = Vec::with_capacity(doc.nodes.len());
		for node in doc.nodes {
			let successors = node
				.successors
				.iter()
				.map(|succ| {
					index
						.get(succ)
						.copied()
						.ok_or_else(|| GraphError::UnknownSuccessor {
							node: node.id.clone(),
							successor: succ.clone(),
						})
				})
				.collect::<Result<Vec<_>, _>>()?;
			nodes.push(NodeEntry {
				id: node.id,
				origin: node.origin,
				successors,
			});
		}

		Ok(Self {
			nodes,
			index,
			is_vc_graph: doc.is_vc_graph,
		})
	}

	/// Parse and validate a JSON graph document.
	pub fn from_json(json: &str) -> Result<Self, GraphError> {
		let doc: GraphDocument = serde_json::from_str(json)?;
		Self::from_document(doc)
	}

	/// Look up a node by identifier.
	pub fn node(&self, id: &str) -> Option<NodeRef<'_>> {
		self.index
			.get(id)
			.map(|&idx| NodeRef { graph: self, idx })
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

impl Graph for AdjacencyGraph {
	type Node<'a> = NodeRef<'a>;

	fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
		(0..self.nodes.len()).map(move |idx| NodeRef { graph: self, idx })
	}

	fn is_vc_graph(&self) -> bool {
		self.is_vc_graph
	}
}

/// Borrowed handle to a node of an [`AdjacencyGraph`].
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'g> {
	graph: &'g AdjacencyGraph,
	idx: usize,
}

impl<'g> NodeRef<'g> {
	fn entry(&self) -> &'g NodeEntry {
		&self.graph.nodes[self.idx]
	}
}

impl PartialEq for NodeRef<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.entry().id == other.entry().id
	}
}

impl Eq for NodeRef<'_> {}

impl Node for NodeRef<'_> {
	fn id(&self) -> &str {
		&self.entry().id
	}

	fn successors(&self) -> impl Iterator<Item = Self> {
		let graph = self.graph;
		self.entry()
			.successors
			.iter()
			.map(move |&idx| NodeRef { graph, idx })
	}

	fn is_origin(&self) -> bool {
		self.entry().origin
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"{
		"isVcGraph": true,
		"nodes": [
			{ "id": "1", "origin": true, "successors": ["2", "a1", "2"] },
			{ "id": "2", "successors": [] },
			{ "id": "a1", "successors": ["1"] }
		]
	}"#;

	#[test]
	fn parses_document_in_order() {
		let graph = AdjacencyGraph::from_json(SAMPLE).unwrap();
		assert!(graph.is_vc_graph());
		let ids: Vec<_> = graph.nodes().map(|n| n.id().to_string()).collect();
		assert_eq!(ids, ["1", "2", "a1"]);
	}

	#[test]
	fn keeps_parallel_successors() {
		let graph = AdjacencyGraph::from_json(SAMPLE).unwrap();
		let one = graph.node("1").unwrap();
		let succ: Vec<_> = one.successors().map(|n| n.id().to_string()).collect();
		assert_eq!(succ, ["2", "a1", "2"]);
		assert!(one.is_origin());
		assert!(!graph.node("2").unwrap().is_origin());
	}

	#[test]
	fn defaults_missing_fields() {
		let graph = AdjacencyGraph::from_json(r#"{ "nodes": [{ "id": "x" }] }"#).unwrap();
		assert!(!graph.is_vc_graph());
		let x = graph.node("x").unwrap();
		assert!(!x.is_origin());
		assert_eq!(x.successors().count(), 0);
	}

	#[test]
	fn empty_document_is_empty_graph() {
		let graph = AdjacencyGraph::from_json("{}").unwrap();
		assert!(graph.is_empty());
		assert_eq!(graph.nodes().count(), 0);
	}

	#[test]
	fn rejects_duplicate_ids() {
		let err = AdjacencyGraph::from_json(r#"{ "nodes": [{ "id": "x" }, { "id": "x" }] }"#)
			.unwrap_err();
		assert!(matches!(err, GraphError::DuplicateNode { id } if id == "x"));
	}

	#[test]
	fn rejects_unknown_successor() {
		let err = AdjacencyGraph::from_json(r#"{ "nodes": [{ "id": "x", "successors": ["y"] }] }"#)
			.unwrap_err();
		assert!(matches!(
			err,
			GraphError::UnknownSuccessor { ref node, ref successor } if node == "x" && successor == "y"
		));
	}

	#[test]
	fn reports_parse_errors() {
		let err = AdjacencyGraph::from_json("{ not json").unwrap_err();
		assert!(matches!(err, GraphError::Parse(_)));
	}

	#[test]
	fn handles_compare_by_id() {
		let graph = AdjacencyGraph::from_json(SAMPLE).unwrap();
		let via_lookup = graph.node("2").unwrap();
		let via_edge = graph.node("1").unwrap().successors().next().unwrap();
		assert_eq!(via_lookup, via_edge);
	}
}
