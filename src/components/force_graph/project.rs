//! Flattens a [`Graph`] into the renderer's node/link lists.

use crate::graph::{Graph, Node};

use super::types::{GraphData, GraphLink, GraphNode};

/// Project a graph into [`GraphData`].
///
/// Nodes keep the graph's enumeration order. Links are emitted per node, then
/// per successor, with no deduplication or filtering. The graph is only read.
pub fn project<G: Graph>(graph: &G) -> GraphData {
	let mut nodes = Vec::new();
	let mut links = Vec::new();

	for node in graph.nodes() {
		let id = node.id().to_string();
		links.extend(node.successors().map(|succ| GraphLink {
			source: id.clone(),
			target: succ.id().to_string(),
		}));
		nodes.push(GraphNode {
			name: id.clone(),
			id,
			is_origin: node.is_origin(),
		});
	}

	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::AdjacencyGraph;

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
		}
	}

	#[test]
	fn empty_graph_projects_to_empty_data() {
		let data = project(&AdjacencyGraph::default());
		assert_eq!(data, GraphData::default());
	}

	#[test]
	fn preserves_node_and_successor_order() {
		let graph = AdjacencyGraph::from_json(
			r#"{ "nodes": [
				{ "id": "b", "successors": ["c", "a"] },
				{ "id": "a", "origin": true },
				{ "id": "c", "successors": ["b"] }
			] }"#,
		)
		.unwrap();
		let data = project(&graph);

		let ids: Vec<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["b", "a", "c"]);
		assert!(data.nodes.iter().all(|n| n.name == n.id));
		assert!(data.nodes[1].is_origin);
		assert_eq!(data.links, [link("b", "c"), link("b", "a"), link("c", "b")]);
	}

	#[test]
	fn keeps_parallel_edges_and_self_loops() {
		let graph = AdjacencyGraph::from_json(
			r#"{ "nodes": [{ "id": "x", "successors": ["x", "y", "y"] }, { "id": "y" }] }"#,
		)
		.unwrap();
		let data = project(&graph);
		assert_eq!(data.links, [link("x", "x"), link("x", "y"), link("x", "y")]);
	}

	#[test]
	fn does_not_synthesize_reverse_edges() {
		let graph = AdjacencyGraph::from_json(
			r#"{ "nodes": [{ "id": "1", "successors": ["2"] }, { "id": "2" }] }"#,
		)
		.unwrap();
		let data = project(&graph);
		assert_eq!(data.links, [link("1", "2")]);
	}
}
