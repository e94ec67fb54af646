//! Fixed visual configuration for the graph canvas.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Canvas size, colors and stroke widths.
///
/// Lengths are in screen pixels unless noted otherwise.
#[derive(Clone, Debug)]
pub struct VisualStyle {
	pub width: f64,
	pub height: f64,
	pub background: Color,
	pub link_color: Color,
	pub link_width: f64,
	/// Node radius in world units.
	pub node_radius: f64,
	/// Hit detection radius in world units, never below `min_hit_screen` pixels.
	pub hit_radius: f64,
	pub min_hit_screen: f64,
	/// Ring drawn around the hovered node.
	pub hover_ring: Color,
	pub tooltip_background: Color,
	pub tooltip_text: Color,
	pub tooltip_font: &'static str,
}

impl VisualStyle {
	/// Hit radius in world units at zoom `k`.
	pub fn hit_radius_at(&self, k: f64) -> f64 {
		self.hit_radius.max(self.min_hit_screen / k)
	}
}

impl Default for VisualStyle {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 420.0,
			background: Color::rgb(255, 255, 255),
			link_color: Color::rgb(0, 0, 0),
			link_width: 1.0,
			node_radius: 5.0,
			hit_radius: 8.0,
			min_hit_screen: 5.0,
			hover_ring: Color::rgba(17, 24, 39, 0.6),
			tooltip_background: Color::rgba(17, 24, 39, 0.85),
			tooltip_text: Color::rgb(255, 255, 255),
			tooltip_font: "12px sans-serif",
		}
	}
}
