//! `web-sys` implementations of the viewport and frame-scheduling seams.

use glam::DVec2;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::viewport::{FrameScheduler, Viewport};
use crate::error::{Result, ViewerError};

fn host_error(context: &'static str) -> impl FnOnce(JsValue) -> ViewerError {
	move |err| ViewerError::Host(format!("{context}: {err:?}"))
}

fn inner_size(window: &Window) -> Result<DVec2> {
	let read = |value: std::result::Result<JsValue, JsValue>| {
		value
			.map_err(host_error("window size unavailable"))?
			.as_f64()
			.ok_or_else(|| ViewerError::Host("window size is not a number".into()))
	};
	Ok(DVec2::new(
		read(window.inner_width())?,
		read(window.inner_height())?,
	))
}

/// The browser window.
pub struct BrowserViewport {
	window: Window,
}

impl BrowserViewport {
	pub fn new() -> Result<Self> {
		web_sys::window()
			.map(|window| Self { window })
			.ok_or_else(|| ViewerError::Host("no global window".into()))
	}

	pub fn window(&self) -> &Window {
		&self.window
	}
}

impl Viewport for BrowserViewport {
	type Subscription = ResizeListener;

	fn size(&self) -> Result<DVec2> {
		inner_size(&self.window)
	}

	fn on_resize(&self, mut handler: Box<dyn FnMut(DVec2)>) -> Result<ResizeListener> {
		let window = self.window.clone();
		let closure = Closure::<dyn FnMut()>::new(move || match inner_size(&window) {
			Ok(size) => handler(size),
			Err(err) => log::warn!("ignoring resize: {err}"),
		});
		self.window
			.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
			.map_err(host_error("could not register resize listener"))?;
		Ok(ResizeListener {
			window: self.window.clone(),
			closure,
		})
	}
}

/// Removes the `resize` listener when dropped.
pub struct ResizeListener {
	window: Window,
	closure: Closure<dyn FnMut()>,
}

impl Drop for ResizeListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
		log::debug!("resize listener removed");
	}
}

/// `requestAnimationFrame` scheduling.
#[derive(Clone)]
pub struct AnimationFrames {
	window: Window,
}

impl AnimationFrames {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl FrameScheduler for AnimationFrames {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<()> {
		let callback = Closure::once_into_js(move || callback());
		self.window
			.request_animation_frame(callback.unchecked_ref())
			.map(|_| ())
			.map_err(host_error("requestAnimationFrame failed"))
	}
}
