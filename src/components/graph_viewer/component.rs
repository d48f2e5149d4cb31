use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent, WheelEvent,
};

use super::browser::{AnimationFrames, BrowserViewport};
use super::config::ViewerConfig;
use super::loader::fetch_dataset;
use super::render;
use super::startup::{self, SharedState, Surface};
use super::state::{DragMode, GraphViewerState};
use super::viewport::{StopHandle, Viewport};
use crate::error::{Result, ViewerError};

/// Full-viewport canvas showing the dataset at `config.data_url`.
#[component]
pub fn GraphViewer(
	#[prop(default = ViewerConfig::default())] config: ViewerConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let stop = StopHandle::default();

	let stop_cleanup = stop.clone();
	on_cleanup(move || stop_cleanup.stop());

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (config, state, stop) = (config.clone(), state_init.clone(), stop.clone());
		wasm_bindgen_futures::spawn_local(async move {
			if let Err(err) = initialize(canvas, &config, state, stop).await {
				error!("graph viewer failed to start: {err}");
			}
		});
	});

	let state_pd = state.clone();
	let on_pointerdown = move |ev: PointerEvent| {
		let mode = match ev.button() {
			0 => DragMode::Rotate,
			2 => DragMode::Pan,
			_ => return,
		};
		// keep receiving moves after the pointer leaves the canvas
		if let Some(canvas) = canvas_ref.get_untracked() {
			let _ = canvas.set_pointer_capture(ev.pointer_id());
		}
		if let Some(ref mut s) = *state_pd.borrow_mut() {
			s.pointer_down(mode, ev.client_x() as f64, ev.client_y() as f64);
		}
	};

	let state_pm = state.clone();
	let on_pointermove = move |ev: PointerEvent| {
		if let Some(ref mut s) = *state_pm.borrow_mut() {
			s.pointer_move(ev.client_x() as f64, ev.client_y() as f64);
		}
	};

	let state_pu = state.clone();
	let on_pointerup = move |ev: PointerEvent| {
		if let Some(canvas) = canvas_ref.get_untracked() {
			let _ = canvas.release_pointer_capture(ev.pointer_id());
		}
		if let Some(ref mut s) = *state_pu.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_pc = state.clone();
	let on_pointercancel = move |_: PointerEvent| {
		if let Some(ref mut s) = *state_pc.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_wh = state;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.wheel(ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-viewer-canvas"
			on:pointerdown=on_pointerdown
			on:pointermove=on_pointermove
			on:pointerup=on_pointerup
			on:pointercancel=on_pointercancel
			on:wheel=on_wheel
			on:contextmenu=|ev: MouseEvent| ev.prevent_default()
			style="display: block; cursor: grab; touch-action: none;"
		/>
	}
}

fn resize_canvas(canvas: &HtmlCanvasElement, size: DVec2) {
	canvas.set_width(size.x as u32);
	canvas.set_height(size.y as u32);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.map_err(|err| ViewerError::Host(format!("getContext failed: {err:?}")))?
		.ok_or_else(|| ViewerError::Host("canvas has no 2d context".into()))?
		.dyn_into()
		.map_err(|_| ViewerError::Host("2d context has an unexpected type".into()))
}

/// Load, build the scene, hook up resizing and start drawing.
async fn initialize(
	canvas: HtmlCanvasElement,
	config: &ViewerConfig,
	state: SharedState,
	stop: StopHandle,
) -> Result<()> {
	let dataset = fetch_dataset(&config.data_url).await?;

	let viewport = BrowserViewport::new()?;
	resize_canvas(&canvas, viewport.size()?);
	let ctx = context_2d(&canvas)?;

	let frames = AnimationFrames::new(viewport.window().clone());
	startup::start(
		&dataset,
		config,
		&viewport,
		frames,
		stop,
		state,
		Surface {
			resize: move |size| resize_canvas(&canvas, size),
			draw: move |s: &GraphViewerState| render::render(s, &ctx),
		},
	)
}
