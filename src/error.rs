//! Errors raised while building a graph from its serialized form.

use thiserror::Error;

/// Errors that can occur when constructing an [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
#[derive(Debug, Error)]
pub enum GraphError {
	/// The JSON document could not be parsed.
	#[error("failed to parse graph document: {0}")]
	Parse(#[from] serde_json::Error),

	/// Two nodes share the same identifier.
	#[error("duplicate node id '{id}'")]
	DuplicateNode {
		/// The repeated identifier.
		id: String,
	},

	/// A successor list names a node that does not exist.
	#[error("node '{node}' lists unknown successor '{successor}'")]
	UnknownSuccessor {
		/// Node whose successor list is invalid.
		node: String,
		/// The identifier that names no node.
		successor: String,
	},
}
