use glam::{DVec2, DVec3};

use super::bounds::Normalized;
use super::camera::PerspectiveCamera;
use super::config::ViewerConfig;
use super::controls::OrbitControls;
use super::scene::{AxesHelper, Scene, SharedResources};
use super::types::Dataset;
use crate::error::Result;

/// Which camera motion a pointer drag drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
	Rotate,
	Pan,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub mode: Option<DragMode>,
	pub last_x: f64,
	pub last_y: f64,
}

pub struct GraphViewerState {
	pub scene: Scene,
	pub camera: PerspectiveCamera,
	pub controls: OrbitControls,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	pub centroid: DVec3,
	pub scale: f64,
	/// Centered copy of the dataset's points.
	pub points: Vec<DVec3>,
}

impl GraphViewerState {
	/// Normalizes the dataset and sets up camera, controls and axes.
	/// Nodes and edges are added by [`GraphViewerState::populate`].
	pub fn new(data: &Dataset, config: &ViewerConfig, width: f64, height: f64) -> Self {
		let Normalized {
			centroid,
			scale,
			points,
		} = Normalized::new(&data.points);

		let mut camera = PerspectiveCamera::new(
			config.fov,
			aspect(width, height),
			config.near,
			config.far(scale),
		);
		camera.position = DVec3::new(0.0, 0.0, scale * config.distance_factor);
		camera.look_at(DVec3::ZERO);

		let mut controls = OrbitControls::new(DVec3::ZERO);
		controls.enable_damping = true;
		controls.damping_factor = config.damping_factor;
		controls.min_distance = scale * config.min_distance_factor;
		controls.max_distance = scale * config.max_distance_factor;
		controls.rotate_speed = config.rotate_speed;
		controls.zoom_speed = config.zoom_speed;
		controls.pan_speed = config.pan_speed;

		let mut scene = Scene::new(config.background, SharedResources::new(config, scale));
		scene.axes = Some(AxesHelper { size: scale });

		Self {
			scene,
			camera,
			controls,
			drag: DragState::default(),
			width,
			height,
			centroid,
			scale,
			points,
		}
	}

	/// Adds a node per point, then a line per edge. On an invalid edge the
	/// nodes and the lines before it remain in the scene.
	pub fn populate(&mut self, data: &Dataset) -> Result<()> {
		self.scene.add_nodes(&self.points);
		self.scene.add_edges(&self.points, &data.edges)
	}

	pub fn size(&self) -> DVec2 {
		DVec2::new(self.width, self.height)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.camera.aspect = aspect(width, height);
		self.camera.update_projection_matrix();
	}

	/// One frame of control damping.
	pub fn tick(&mut self) -> bool {
		self.controls.update(&mut self.camera)
	}

	pub fn pointer_down(&mut self, mode: DragMode, x: f64, y: f64) {
		self.drag = DragState {
			mode: Some(mode),
			last_x: x,
			last_y: y,
		};
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		let Some(mode) = self.drag.mode else {
			return;
		};
		let (dx, dy) = (x - self.drag.last_x, y - self.drag.last_y);
		(self.drag.last_x, self.drag.last_y) = (x, y);
		match mode {
			DragMode::Rotate => self.controls.rotate_by_pixels(dx, dy, self.height),
			DragMode::Pan => self
				.controls
				.pan_by_pixels(dx, dy, &self.camera, self.height),
		}
	}

	pub fn pointer_up(&mut self) {
		self.drag.mode = None;
	}

	pub fn wheel(&mut self, delta_y: f64) {
		self.controls.zoom_by_wheel(delta_y);
	}
}

fn aspect(width: f64, height: f64) -> f64 {
	if width > 0.0 && height > 0.0 {
		width / height
	} else {
		1.0
	}
}
