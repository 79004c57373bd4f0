use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{GraphCanvasState, NODE_RADIUS};

const BACKGROUND: &str = "#1a1a2e";
const EDGE_RGB: &str = "100, 180, 255";
const TOOLTIP_PADDING: f64 = 6.0;

pub fn render(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_tooltip(state, ctx);
}

fn draw_edges(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 8.0 / k);
	let has_highlight = state.has_active_highlight();

	for &(src, tgt) in &state.edges {
		let (n1, n2) = (&state.nodes[src], &state.nodes[tgt]);
		let (dx, dy) = (n2.x - n1.x, n2.y - n1.y);
		let dist = dx.hypot(dy);
		if dist < 0.001 {
			continue;
		}

		let alpha = match (has_highlight, state.hover.node) {
			(true, Some(hovered)) if src == hovered || tgt == hovered => 0.95,
			(true, _) => 0.15,
			(false, _) => 0.6,
		};
		ctx.set_stroke_style_str(&format!("rgba({EDGE_RGB}, {alpha})"));
		ctx.set_line_width(line_width);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(n1.x + ux * NODE_RADIUS, n1.y + uy * NODE_RADIUS);
		ctx.line_to(
			n2.x - ux * (NODE_RADIUS + arrow_size),
			n2.y - uy * (NODE_RADIUS + arrow_size),
		);
		ctx.stroke();

		ctx.set_fill_style_str(&format!("rgba({EDGE_RGB}, {alpha})"));
		let (tip_x, tip_y) = (n2.x - ux * NODE_RADIUS, n2.y - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, k) = (state.has_active_highlight(), state.transform.k);
	ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));

	for (idx, node) in state.nodes.iter().enumerate() {
		let dimmed = has_highlight && !state.is_highlighted(idx);
		let alpha = if dimmed { 0.3 } else { 1.0 };
		let radius = if state.hover.node == Some(idx) {
			NODE_RADIUS * 1.3
		} else {
			NODE_RADIUS
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();

		if state.is_selected(idx) {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, radius + 4.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("white");
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha * 0.85));
		let _ = ctx.fill_text(&node.label, node.x + radius + 4.0, node.y + 4.0);
		ctx.set_global_alpha(1.0);
	}
}

fn draw_tooltip(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let Some(node) = state.hover.node.and_then(|idx| state.nodes.get(idx)) else {
		return;
	};
	if state.pan.moved || node.tooltip.is_empty() {
		return;
	}

	ctx.set_font("12px sans-serif");
	let text_width = ctx
		.measure_text(&node.tooltip)
		.map(|m| m.width())
		.unwrap_or(node.tooltip.len() as f64 * 7.0);
	let (w, h) = (text_width + 2.0 * TOOLTIP_PADDING, 12.0 + 2.0 * TOOLTIP_PADDING);
	let (px, py) = state.hover.pointer;
	let x = (px + 14.0).min(state.width - w - 4.0).max(4.0);
	let y = (py + 18.0).min(state.height - h - 4.0).max(4.0);

	ctx.set_fill_style_str("rgba(20, 20, 35, 0.92)");
	ctx.fill_rect(x, y, w, h);
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(x, y, w, h);
	ctx.set_fill_style_str("white");
	let _ = ctx.fill_text(&node.tooltip, x + TOOLTIP_PADDING, y + TOOLTIP_PADDING + 10.0);
}
