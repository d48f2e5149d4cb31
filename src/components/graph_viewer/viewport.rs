//! Host seams: viewport sizing, resize notification and frame scheduling.
//!
//! The browser implementations live in `browser.rs`; everything here is
//! plain Rust so the render loop can be driven by a test scheduler.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use glam::DVec2;
use log::error;

use crate::error::Result;

/// Something with a size that can report when it changes.
pub trait Viewport {
	/// Keeps the resize handler registered for as long as it lives.
	type Subscription;

	fn size(&self) -> Result<DVec2>;

	fn on_resize(&self, handler: Box<dyn FnMut(DVec2)>) -> Result<Self::Subscription>;
}

/// Runs a callback once, at the host's next display refresh.
pub trait FrameScheduler: Clone + 'static {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<()>;
}

/// Cancels a [`RenderLoop`]. Cloning shares the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
	pub fn stop(&self) {
		self.0.store(true, Ordering::Relaxed);
	}

	pub fn is_stopped(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

/// Calls a frame closure on every scheduled frame until stopped. Once the
/// stop is observed the closure, and everything it owns, is dropped.
pub struct RenderLoop<S> {
	scheduler: S,
	stop: StopHandle,
}

impl<S: FrameScheduler> RenderLoop<S> {
	pub fn new(scheduler: S, stop: StopHandle) -> Self {
		Self { scheduler, stop }
	}

	pub fn start<F>(self, frame: F) -> Result<()>
	where
		F: FnMut() + 'static,
	{
		schedule(self.scheduler, self.stop, frame)
	}
}

fn schedule<S, F>(scheduler: S, stop: StopHandle, mut frame: F) -> Result<()>
where
	S: FrameScheduler,
	F: FnMut() + 'static,
{
	let next = scheduler.clone();
	scheduler.request_frame(Box::new(move || {
		if stop.is_stopped() {
			return;
		}
		frame();
		if let Err(err) = schedule(next, stop, frame) {
			error!("render loop halted: {err}");
		}
	}))
}
