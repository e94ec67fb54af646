//! vc-graph-viz: force-directed visualization of directed graphs.
//!
//! This crate provides a WASM graph visualization component that colors nodes
//! by selection, identifier pattern and origin status, and softens its physics
//! for vertex-cover ("VC") graphs.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;
pub mod graph;

pub use components::force_graph::{GraphData, GraphLink, GraphNode, GraphVisualization};
pub use error::GraphError;
pub use graph::{AdjacencyGraph, Graph, Node};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("vc-graph: logging initialized");
}

/// Read the JSON text of the script element with id="graph-data".
fn graph_document_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load the graph embedded in the page.
/// Expected format: JSON with { isVcGraph, nodes: [{ id, origin, successors }] }
fn load_graph() -> AdjacencyGraph {
	let Some(json_text) = graph_document_text() else {
		warn!("vc-graph: no #graph-data element, rendering an empty graph");
		return AdjacencyGraph::default();
	};

	match AdjacencyGraph::from_json(&json_text) {
		Ok(graph) => {
			info!(
				"vc-graph: loaded {} nodes ({} graph)",
				graph.len(),
				if graph.is_vc_graph() { "VC" } else { "generic" }
			);
			graph
		}
		Err(e) => {
			warn!("vc-graph: {}", e);
			AdjacencyGraph::default()
		}
	}
}

/// Add `id` to the selection, or remove every occurrence if already present.
pub fn toggle_selection(selected: &mut Vec<String>, id: String) {
	if selected.contains(&id) {
		selected.retain(|s| *s != id);
	} else {
		selected.push(id);
	}
}

/// Main application component.
/// Loads the graph from the DOM and renders it with a selection and a
/// colorful-mode toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let graph = load_graph();
	let graph_signal = Signal::derive(move || graph.clone());
	let selected = RwSignal::new(Vec::<String>::new());
	let colorful = RwSignal::new(false);

	let on_node_click = Callback::new(move |id: String| {
		selected.update(|s| toggle_selection(s, id));
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Graph Visualization" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="graph-page">
			<label class="graph-toggle">
				<input
					type="checkbox"
					prop:checked=move || colorful.get()
					on:change=move |ev| colorful.set(event_target_checked(&ev))
				/>
				"Colorful components"
			</label>
			<GraphVisualization
				graph=graph_signal
				colorful_components=colorful
				on_node_click=on_node_click
				selected_nodes=selected
			/>
			<p class="graph-selection">
				"Selected: "
				{move || selected.with(|s| s.join(", "))}
			</p>
		</div>
	}
}
