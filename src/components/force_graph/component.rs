//! Leptos component wrapping the force-directed graph canvas.
//!
//! On mount the component builds the simulation, tunes it once for the graph
//! variant, and starts a `requestAnimationFrame` loop. Every later change to the
//! graph, the selection or colorful mode re-projects and re-colors the nodes in
//! place without touching the physics constants.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::classify::{ClassifierContext, classify};
use super::project::project;
use super::render;
use super::state::ForceGraphState;
use super::style::VisualStyle;
use super::tuning::SimulationTuner;
use super::types::{GraphData, GraphNode};
use crate::graph::{AdjacencyGraph, Graph};

/// Bundles graph simulation state with its visual style and tuning guard.
struct GraphContext {
	state: ForceGraphState,
	style: VisualStyle,
	tuner: SimulationTuner,
}

/// Forward a node activation to the host, passing only the identifier.
pub fn forward_click(handler: Option<impl Fn(String)>, node: &GraphNode) {
	if let Some(handler) = handler {
		handler(node.id.clone());
	}
}

/// Color every node in `state` for the current selection and mode.
fn paint(state: &mut ForceGraphState, data: &GraphData, selected: &[String], colorful: bool) {
	let origins = data.origin_lookup();
	let ctx = ClassifierContext {
		selected,
		colorful,
		origins: &origins,
	};
	state.recolor(|node| classify(&node.id, &ctx).hex());
}

fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Drive the simulation and redraw on every animation frame.
fn start_animation(
	context: Rc<RefCell<Option<GraphContext>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	ctx: CanvasRenderingContext2d,
) {
	let animate_inner = animate.clone();
	*animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut c) = *context.borrow_mut() {
			c.state.tick(0.016);
			render::render(&c.state, &ctx, &c.style);
		}
		if let (Some(cb), Some(window)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let (Some(cb), Some(window)) = (animate.borrow().as_ref(), web_sys::window()) {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// Renders a graph as an interactive force-directed diagram.
///
/// Nodes are colored by selection, identifier pattern and, in colorful mode,
/// origin status. Clicking a node passes its identifier to `on_node_click`.
#[component]
pub fn GraphVisualization(
	#[prop(into)] graph: Signal<AdjacencyGraph>,
	#[prop(into, default = Signal::stored(false))] colorful_components: Signal<bool>,
	#[prop(optional, into)] on_node_click: Option<Callback<String>>,
	#[prop(into, default = Signal::stored(Vec::new()))] selected_nodes: Signal<Vec<String>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	let projected = Memo::new(move |_| graph.with(|g| project(g)));

	Effect::new(move |_| {
		let data = projected.get();
		let selected = selected_nodes.get();
		let colorful = colorful_components.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};

		let mut slot = context_init.borrow_mut();
		if slot.is_none() {
			let canvas: HtmlCanvasElement = canvas.into();
			let style = VisualStyle::default();
			canvas.set_width(style.width as u32);
			canvas.set_height(style.height as u32);

			let Some(ctx) = canvas
				.get_context("2d")
				.ok()
				.flatten()
				.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
			else {
				error!("vc-graph: canvas has no 2d context");
				return;
			};
			*slot = Some(GraphContext {
				state: ForceGraphState::new(&data, style.width, style.height),
				style,
				tuner: SimulationTuner::new(),
			});
			info!(
				"vc-graph: mounted with {} nodes, {} links",
				data.nodes.len(),
				data.links.len()
			);
			start_animation(context_init.clone(), animate_init.clone(), ctx);
		}

		if let Some(c) = slot.as_mut() {
			c.tuner
				.tune(&mut c.state, graph.with_untracked(|g| g.is_vc_graph()));
			c.state.set_data(&data);
			paint(&mut c.state, &data, &selected, colorful);
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_md.borrow_mut() {
			if let Some(idx) = c.state.node_at_position(x, y, &c.style) {
				c.state.drag.active = true;
				c.state.drag.node_idx = Some(idx);
				c.state.drag.start_x = x;
				c.state.drag.start_y = y;
				c.state.drag.travel = 0.0;
				c.state.graph.visit_nodes(|node| {
					if node.index() == idx {
						c.state.drag.node_start_x = node.x();
						c.state.drag.node_start_y = node.y();
					}
				});
			} else {
				c.state.pan.active = true;
				c.state.pan.start_x = x;
				c.state.pan.start_y = y;
				c.state.pan.transform_start_x = c.state.transform.x;
				c.state.pan.transform_start_y = c.state.transform.y;
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if !c.state.drag.active {
				let hovered = c.state.node_at_position(x, y, &c.style);
				c.state.set_hover(hovered);
			}

			if c.state.drag.active {
				if let Some(idx) = c.state.drag.node_idx {
					if !c.state.drag.record_travel(x, y) {
						return;
					}
					let (sdx, sdy) = (x - c.state.drag.start_x, y - c.state.drag.start_y);
					let (nx, ny) = (
						c.state.drag.node_start_x + (sdx / c.state.transform.k) as f32,
						c.state.drag.node_start_y + (sdy / c.state.transform.k) as f32,
					);
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if c.state.pan.active {
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = {
			let Some(ref mut c) = *context_mu.borrow_mut() else {
				return;
			};
			let clicked = c.state.drag.clicked_node().and_then(|idx| c.state.node(idx));
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
			clicked
		};
		// Release the state borrow first: the handler may update signals.
		if let Some(node) = clicked {
			forward_click(on_node_click.map(|cb| move |id: String| cb.run(id)), &node);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
			c.state.set_hover(None);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-visualization"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
