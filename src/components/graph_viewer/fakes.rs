//! In-memory stand-ins for the browser seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use glam::DVec2;

use super::viewport::{FrameScheduler, Viewport};
use crate::error::Result;

/// Queues frame callbacks until [`ManualFrames::pump`] runs them.
#[derive(Clone, Default)]
pub struct ManualFrames {
	queue: Rc<RefCell<VecDeque<Box<dyn FnOnce()>>>>,
}

impl ManualFrames {
	/// Runs the callbacks queued before this call; returns how many ran.
	pub fn pump(&self) -> usize {
		let pending: Vec<_> = self.queue.borrow_mut().drain(..).collect();
		let count = pending.len();
		for callback in pending {
			callback();
		}
		count
	}

	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}
}

impl FrameScheduler for ManualFrames {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<()> {
		self.queue.borrow_mut().push_back(callback);
		Ok(())
	}
}

pub struct FakeViewport {
	size: Cell<DVec2>,
	handlers: RefCell<Vec<Box<dyn FnMut(DVec2)>>>,
}

impl FakeViewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			size: Cell::new(DVec2::new(width, height)),
			handlers: RefCell::new(Vec::new()),
		}
	}

	pub fn listeners(&self) -> usize {
		self.handlers.borrow().len()
	}

	pub fn resize_to(&self, width: f64, height: f64) {
		self.size.set(DVec2::new(width, height));
		for handler in self.handlers.borrow_mut().iter_mut() {
			handler(self.size.get());
		}
	}
}

impl Viewport for FakeViewport {
	type Subscription = ();

	fn size(&self) -> Result<DVec2> {
		Ok(self.size.get())
	}

	fn on_resize(&self, handler: Box<dyn FnMut(DVec2)>) -> Result<()> {
		self.handlers.borrow_mut().push(handler);
		Ok(())
	}
}
