//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node display data, the
//! pan/zoom view transform, and the drag/hover state driven by pointer events.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::style::VisualStyle;
use super::tuning::PhysicsEngine;
use super::types::{GraphData, GraphNode};

/// Converts a d3 charge strength into `force_charge`. Maps -100 to 150.
const CHARGE_SCALE: f32 = 1.5;
/// `force_spring` is this constant divided by the link distance. Maps 50 to 0.05.
const SPRING_STIFFNESS: f32 = 2.5;
/// Pointer travel in pixels below which a press-and-release counts as a click.
pub const CLICK_SLOP: f64 = 3.0;
/// Radius of the circle new nodes are laid out on.
const SEED_RADIUS: f64 = 100.0;

/// Per-node data attached to each node in the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub node: GraphNode,
	/// CSS color chosen by the classifier.
	pub color: &'static str,
}

/// Physics constants handed to `force_graph`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
}

impl Default for PhysicsParams {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}
}

impl PhysicsParams {
	fn simulation(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag, which doubles as click detection.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
	/// Largest pointer distance from the start point seen during this drag.
	pub travel: f64,
}

impl DragState {
	/// Record the pointer at `(x, y)`. Returns `true` once travel has reached
	/// [`CLICK_SLOP`], meaning the press is a drag rather than a click.
	pub fn record_travel(&mut self, x: f64, y: f64) -> bool {
		let (dx, dy) = (x - self.start_x, y - self.start_y);
		self.travel = self.travel.max((dx * dx + dy * dy).sqrt());
		self.travel >= CLICK_SLOP
	}

	/// Node clicked by the press that is ending, if it never became a drag.
	pub fn clicked_node(&self) -> Option<DefaultNodeIdx> {
		match self.node_idx {
			Some(idx) if self.active && self.travel < CLICK_SLOP => Some(idx),
			_ => None,
		}
	}
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Simulation plus view state for one mounted canvas.
///
/// Created once when the component mounts. New graph data replaces the node set
/// in place, keeping positions of nodes that survive and the physics constants
/// already in effect.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub params: PhysicsParams,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	data: GraphData,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let params = PhysicsParams::default();
		Self {
			graph: build_graph(data, &params, &HashMap::new()),
			params,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			data: data.clone(),
		}
	}

	/// Replace the node set. No-op when `data` is unchanged.
	pub fn set_data(&mut self, data: &GraphData) {
		if *data == self.data {
			return;
		}
		debug!(
			"vc-graph: rebuilding simulation with {} nodes, {} links",
			data.nodes.len(),
			data.links.len()
		);
		self.data = data.clone();
		self.rebuild();
	}

	/// Re-run the classifier over every node.
	pub fn recolor(&mut self, mut color_of: impl FnMut(&GraphNode) -> &'static str) {
		self.graph.visit_nodes_mut(|node| {
			node.data.user_data.color = color_of(&node.data.user_data.node);
		});
	}

	/// Projected node behind a simulation index.
	pub fn node(&self, idx: DefaultNodeIdx) -> Option<GraphNode> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.node.clone());
			}
		});
		found
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64, style: &VisualStyle) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let hit_radius = style.hit_radius_at(self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.hovered = node;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	fn rebuild(&mut self) {
		let mut previous = HashMap::new();
		self.graph.visit_nodes(|node| {
			previous.insert(
				node.data.user_data.node.id.clone(),
				(node.x(), node.y(), node.data.user_data.color),
			);
		});
		self.graph = build_graph(&self.data, &self.params, &previous);
		self.drag = DragState::default();
		self.hovered = None;
	}
}

impl PhysicsEngine for ForceGraphState {
	fn set_charge_strength(&mut self, strength: f32) {
		self.params.force_charge = strength.abs() * CHARGE_SCALE;
		self.rebuild();
	}

	fn set_link_distance(&mut self, distance: f32) {
		self.params.force_spring = SPRING_STIFFNESS / distance.max(1.0);
		self.rebuild();
	}
}

/// Build a simulation for `data`. Nodes found in `previous` keep their position
/// and color; the rest are seeded on a circle around the origin.
fn build_graph(
	data: &GraphData,
	params: &PhysicsParams,
	previous: &HashMap<String, (f32, f32, &'static str)>,
) -> ForceGraph<NodeInfo, ()> {
	let mut graph = ForceGraph::new(params.simulation());
	let mut id_to_idx = HashMap::new();

	for (i, node) in data.nodes.iter().enumerate() {
		let (x, y, color) = previous.get(&node.id).copied().unwrap_or_else(|| {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			(
				(SEED_RADIUS * angle.cos()) as f32,
				(SEED_RADIUS * angle.sin()) as f32,
				"",
			)
		});
		let idx = graph.add_node(NodeData {
			x,
			y,
			mass: 10.0,
			is_anchor: false,
			user_data: NodeInfo {
				node: node.clone(),
				color,
			},
		});
		id_to_idx.insert(node.id.clone(), idx);
	}

	for link in &data.links {
		if let (Some(&src), Some(&tgt)) =
			(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
		{
			graph.add_edge(src, tgt, EdgeData::default());
		}
	}

	graph
}
