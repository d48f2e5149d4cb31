//! Perspective camera and world-to-screen projection.

use glam::{DMat4, DVec2, DVec3};

/// A projected point in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
	pub x: f64,
	pub y: f64,
	/// Distance in front of the camera along the view axis.
	pub depth: f64,
}

/// Right-handed, Y-up perspective camera.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
	/// Vertical field of view in degrees.
	pub fov: f64,
	pub aspect: f64,
	pub near: f64,
	pub far: f64,
	pub position: DVec3,
	pub target: DVec3,
	pub up: DVec3,
	projection: DMat4,
}

impl PerspectiveCamera {
	pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> Self {
		let mut camera = Self {
			fov,
			aspect,
			near,
			far,
			position: DVec3::ZERO,
			target: DVec3::NEG_Z,
			up: DVec3::Y,
			projection: DMat4::IDENTITY,
		};
		camera.update_projection_matrix();
		camera
	}

	/// Must be called after changing `fov`, `aspect`, `near` or `far`.
	pub fn update_projection_matrix(&mut self) {
		self.projection =
			DMat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far);
	}

	pub fn projection_matrix(&self) -> DMat4 {
		self.projection
	}

	pub fn view_matrix(&self) -> DMat4 {
		DMat4::look_at_rh(self.position, self.target, self.up)
	}

	pub fn look_at(&mut self, target: DVec3) {
		self.target = target;
	}

	/// Unit vectors spanning the image plane, (right, up), in world space.
	pub fn screen_axes(&self) -> (DVec3, DVec3) {
		let forward = (self.target - self.position).normalize_or(DVec3::NEG_Z);
		let right = forward.cross(self.up).normalize_or(DVec3::X);
		(right, right.cross(forward))
	}

	/// Projects a view-space point; the caller guarantees it lies in front of the camera.
	pub fn project_view(&self, view: DVec3, size: DVec2) -> ScreenPoint {
		let ndc = self.projection_matrix().project_point3(view);
		ScreenPoint {
			x: (ndc.x + 1.0) * 0.5 * size.x,
			y: (1.0 - ndc.y) * 0.5 * size.y,
			depth: -view.z,
		}
	}

	/// Projects a view-space point, `None` when it falls outside the near/far range.
	pub fn project(&self, view: DVec3, size: DVec2) -> Option<ScreenPoint> {
		let depth = -view.z;
		(depth >= self.near && depth <= self.far).then(|| self.project_view(view, size))
	}

	/// Clips a view-space segment to the near/far slab.
	pub fn clip_segment(&self, a: DVec3, b: DVec3) -> Option<(DVec3, DVec3)> {
		let (a, b) = clip_depth(a, b, self.near, true)?;
		clip_depth(a, b, self.far, false)
	}

	/// Pixels per world unit at the given depth.
	pub fn pixel_scale(&self, depth: f64, viewport_height: f64) -> f64 {
		viewport_height / (2.0 * (self.fov.to_radians() * 0.5).tan() * depth)
	}
}

fn clip_depth(a: DVec3, b: DVec3, limit: f64, keep_beyond: bool) -> Option<(DVec3, DVec3)> {
	let inside = |v: DVec3| {
		if keep_beyond {
			-v.z >= limit
		} else {
			-v.z <= limit
		}
	};
	match (inside(a), inside(b)) {
		(true, true) => Some((a, b)),
		(false, false) => None,
		(a_in, _) => {
			let t = (limit + a.z) / (a.z - b.z);
			let cut = a.lerp(b, t);
			if a_in { Some((a, cut)) } else { Some((cut, b)) }
		}
	}
}
