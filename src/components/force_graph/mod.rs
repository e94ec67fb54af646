//! Force-directed graph visualization component.
//!
//! Turns a [`Graph`](crate::graph::Graph) into an interactive canvas diagram:
//! - [`project`] flattens the graph into renderer-neutral nodes and links
//! - [`classify`] picks each node's color from selection, identifier and origin
//! - [`tuning`] sets the physics constants once per mounted canvas
//!
//! # Example
//!
//! ```ignore
//! use vc_graph_viz::{AdjacencyGraph, GraphVisualization};
//!
//! let graph = AdjacencyGraph::from_json(r#"{ "nodes": [{ "id": "1", "successors": ["2"] }, { "id": "2" }] }"#)?;
//! let selected = RwSignal::new(vec!["2".to_string()]);
//!
//! view! {
//!     <GraphVisualization
//!         graph=Signal::stored(graph)
//!         selected_nodes=selected
//!         on_node_click=Callback::new(move |id| log::info!("clicked {id}"))
//!     />
//! }
//! ```

pub mod classify;
mod component;
pub mod project;
mod render;
mod state;
pub mod style;
pub mod tuning;
mod types;

pub use classify::{ClassifierContext, NodeColor, classify};
pub use component::{GraphVisualization, forward_click};
pub use project::project;
pub use tuning::{ForceProfile, PhysicsEngine, SimulationTuner};
pub use types::{GraphData, GraphLink, GraphNode};
