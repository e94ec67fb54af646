//! One-time physics tuning keyed to the graph variant.
//!
//! VC graphs get a much weaker repulsion than generic graphs so their gadgets
//! stay compact. Tuning happens once per live simulation; later renders leave
//! the constants alone so the layout can settle.

use log::{debug, info};

/// Anything exposing d3-style charge and link forces.
pub trait PhysicsEngine {
	/// Set the many-body force strength. Negative values repel.
	fn set_charge_strength(&mut self, strength: f32);
	/// Set the target length of every link.
	fn set_link_distance(&mut self, distance: f32);
}

/// A named pair of force constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceProfile {
	/// Many-body strength; negative repels.
	pub charge_strength: f32,
	/// Target link length.
	pub link_distance: f32,
}

impl ForceProfile {
	/// Profile for VC graphs.
	pub const VC: Self = Self {
		charge_strength: -10.0,
		link_distance: 50.0,
	};

	/// Profile for every other graph.
	pub const GENERIC: Self = Self {
		charge_strength: -100.0,
		link_distance: 50.0,
	};

	/// Profile for a graph with the given variant flag.
	pub fn for_graph(is_vc_graph: bool) -> Self {
		if is_vc_graph { Self::VC } else { Self::GENERIC }
	}
}

/// Applies a [`ForceProfile`] to an engine at most once.
#[derive(Clone, Debug, Default)]
pub struct SimulationTuner {
	applied: Option<ForceProfile>,
}

impl SimulationTuner {
	/// Tuner that has not applied anything yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Tune `engine` for the given variant if it has not been tuned yet.
	///
	/// Returns `true` when the profile was applied by this call.
	pub fn tune<E: PhysicsEngine + ?Sized>(&mut self, engine: &mut E, is_vc_graph: bool) -> bool {
		if let Some(profile) = self.applied {
			debug!("vc-graph: simulation already tuned ({:?}), skipping", profile);
			return false;
		}
		let profile = ForceProfile::for_graph(is_vc_graph);
		engine.set_charge_strength(profile.charge_strength);
		engine.set_link_distance(profile.link_distance);
		self.applied = Some(profile);
		info!(
			"vc-graph: tuned simulation for {} graph (charge {}, distance {})",
			if is_vc_graph { "VC" } else { "generic" },
			profile.charge_strength,
			profile.link_distance
		);
		true
	}

	/// Profile in effect, if tuning has run.
	pub fn applied(&self) -> Option<ForceProfile> {
		self.applied
	}
}
