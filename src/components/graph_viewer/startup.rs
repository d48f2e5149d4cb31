//! Everything between a loaded dataset and a running render loop.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use log::info;

use super::config::ViewerConfig;
use super::state::GraphViewerState;
use super::types::Dataset;
use super::viewport::{FrameScheduler, RenderLoop, StopHandle, Viewport};
use crate::error::Result;

/// Viewer state shared by the render loop, the resize handler and input handlers.
pub type SharedState = Rc<RefCell<Option<GraphViewerState>>>;

/// Host callbacks run alongside the viewer's own resize and frame work.
pub struct Surface<R, D> {
	/// Resizes the drawing surface before the camera is updated.
	pub resize: R,
	/// Draws one frame after the controls have been advanced.
	pub draw: D,
}

/// Builds the scene and, only if that succeeds, registers the resize
/// handler and starts the render loop. Any error leaves `state` empty and
/// nothing scheduled.
pub fn start<V, S, R, D>(
	dataset: &Dataset,
	config: &ViewerConfig,
	viewport: &V,
	scheduler: S,
	stop: StopHandle,
	state: SharedState,
	surface: Surface<R, D>,
) -> Result<()>
where
	V: Viewport,
	V::Subscription: 'static,
	S: FrameScheduler,
	R: FnMut(DVec2) + 'static,
	D: FnMut(&GraphViewerState) + 'static,
{
	let Surface {
		resize: mut resize_surface,
		mut draw,
	} = surface;

	let size = viewport.size()?;
	let mut viewer = GraphViewerState::new(dataset, config, size.x, size.y);
	viewer.populate(dataset)?;
	info!(
		"scene ready: {} nodes, {} edges, scale {:.3}, centered on {}",
		viewer.scene.nodes.len(),
		viewer.scene.edges.len(),
		viewer.scale,
		viewer.centroid
	);

	let state_resize = state.clone();
	let resize_listener = viewport.on_resize(Box::new(move |size| {
		resize_surface(size);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(size.x, size.y);
		}
	}))?;
	*state.borrow_mut() = Some(viewer);

	RenderLoop::new(scheduler, stop).start(move || {
		let _listener = &resize_listener;
		if let Some(ref mut s) = *state.borrow_mut() {
			s.tick();
			draw(s);
		}
	})
}
