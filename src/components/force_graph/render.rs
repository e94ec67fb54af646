//! Canvas rendering for the force graph.
//!
//! Draw order: background (screen space), links then nodes (world space), and
//! finally the hover tooltip back in screen space so it is never scaled.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NodeInfo};
use super::style::VisualStyle;

/// Renders the complete graph to the canvas.
pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, style: &VisualStyle) {
	ctx.set_fill_style_str(&style.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_links(state, ctx, style);
	draw_nodes(state, ctx, style);

	ctx.restore();

	draw_tooltip(state, ctx, style);
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, style: &VisualStyle) {
	ctx.set_stroke_style_str(&style.link_color.to_css());
	ctx.set_line_width(style.link_width / state.transform.k);

	ctx.begin_path();
	state.graph.visit_edges(|n1, n2, _| {
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
	});
	ctx.stroke();
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, style: &VisualStyle) {
	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		ctx.begin_path();
		let _ = ctx.arc(x, y, style.node_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.data.user_data.color);
		ctx.fill();

		if state.hovered == Some(node.index()) {
			ctx.set_stroke_style_str(&style.hover_ring.to_css());
			ctx.set_line_width(1.5 / state.transform.k);
			ctx.stroke();
		}
	});
}

/// Label box next to the hovered node showing its `name`.
fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, style: &VisualStyle) {
	let Some(idx) = state.hovered else {
		return;
	};
	let mut target = None;
	state.graph.visit_nodes(|node| {
		if node.index() == idx {
			target = Some((node.x() as f64, node.y() as f64, label(&node.data.user_data)));
		}
	});
	let Some((x, y, name)) = target else {
		return;
	};

	let sx = x * state.transform.k + state.transform.x;
	let sy = y * state.transform.k + state.transform.y;
	let offset = style.node_radius * state.transform.k + 6.0;

	ctx.set_font(style.tooltip_font);
	let text_width = ctx
		.measure_text(&name)
		.map(|m| m.width())
		.unwrap_or(0.0);
	let (pad, box_h) = (4.0, 18.0);

	ctx.set_fill_style_str(&style.tooltip_background.to_css());
	ctx.fill_rect(sx + offset, sy - box_h / 2.0, text_width + pad * 2.0, box_h);
	ctx.set_fill_style_str(&style.tooltip_text.to_css());
	let _ = ctx.fill_text(&name, sx + offset + pad, sy + 4.0);
}

/// Hover label for a node.
fn label(info: &NodeInfo) -> String {
	info.node.name.clone()
}
