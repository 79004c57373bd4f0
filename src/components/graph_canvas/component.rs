use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::{Click, GraphCanvasState};
use crate::config::LayoutOptions;
use crate::graph::RenderGraph;
use crate::model::NodeId;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

fn local_position(canvas: Option<HtmlCanvasElement>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let rect = canvas?.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Draws a [`RenderGraph`] with a hierarchical layout and reports clicks.
///
/// A click on a node calls `on_pick`; a click on empty background calls
/// `on_dismiss`. Dragging the background pans, the wheel zooms.
#[component]
pub fn GraphCanvas(
	#[prop(into)] graph: Signal<Option<RenderGraph>>,
	#[prop(into)] selected: Signal<Option<NodeId>>,
	#[prop(into)] on_pick: Callback<NodeId>,
	#[prop(into)] on_dismiss: Callback<()>,
	#[prop(optional)] layout: LayoutOptions,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphCanvasState>>> = Rc::new(RefCell::new(None));
	let context: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let redraw: Rc<dyn Fn()> = {
		let (state, context) = (state.clone(), context.clone());
		Rc::new(move || {
			if let (Some(s), Some(ctx)) = (&*state.borrow(), &*context.borrow()) {
				render::render(s, ctx);
			}
		})
	};

	let (state_init, context_init, resize_cb_init, redraw_init) = (
		state.clone(),
		context.clone(),
		resize_cb.clone(),
		redraw.clone(),
	);
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("graph canvas mounted without a window");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			let parent = canvas.parent_element();
			(
				width.unwrap_or_else(|| {
					parent.as_ref().map(|p| p.client_width() as f64).unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					parent.as_ref().map(|p| p.client_height() as f64).unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		if context_init.borrow().is_none() {
			let ctx = canvas
				.get_context("2d")
				.ok()
				.flatten()
				.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
			if ctx.is_none() {
				warn!("canvas has no 2d context");
			}
			*context_init.borrow_mut() = ctx;
		}

		let graph = graph.get().unwrap_or_default();
		debug!(
			"laying out {} nodes, {} edges at {w}x{h}",
			graph.nodes.len(),
			graph.edges.len()
		);
		let mut fresh = GraphCanvasState::new(&graph, &layout, w, h);
		fresh.selected = selected.get_untracked();
		*state_init.borrow_mut() = Some(fresh);

		if fullscreen && resize_cb_init.borrow().is_none() {
			let (state_resize, canvas_resize, redraw_resize) =
				(state_init.clone(), canvas.clone(), redraw_init.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
				redraw_resize();
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		redraw_init();
	});

	let (state_sel, redraw_sel) = (state.clone(), redraw.clone());
	Effect::new(move |_| {
		let current = selected.get();
		if let Some(ref mut s) = *state_sel.borrow_mut() {
			s.selected = current;
		}
		redraw_sel();
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_position(canvas_ref.get(), &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.press(x, y);
		}
	};

	let (state_mm, redraw_mm) = (state.clone(), redraw.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_position(canvas_ref.get(), &ev) else {
			return;
		};
		let dirty = match *state_mm.borrow_mut() {
			Some(ref mut s) => s.pointer_moved(x, y),
			None => false,
		};
		if dirty {
			redraw_mm();
		}
	};

	let (state_mu, redraw_mu) = (state.clone(), redraw.clone());
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = local_position(canvas_ref.get(), &ev) else {
			return;
		};
		let click = match *state_mu.borrow_mut() {
			Some(ref mut s) => s.release(x, y),
			None => return,
		};
		match click {
			Click::Node(id) => on_pick.run(id),
			Click::Background => on_dismiss.run(()),
			Click::Drag => {}
		}
		redraw_mu();
	};

	let (state_ml, redraw_ml) = (state.clone(), redraw.clone());
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.leave();
		}
		redraw_ml();
	};

	let (state_wh, redraw_wh) = (state.clone(), redraw.clone());
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_position(canvas_ref.get(), &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
		redraw_wh();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
