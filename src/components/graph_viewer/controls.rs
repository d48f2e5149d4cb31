//! Orbit camera controls with optional damping.
//!
//! Input handlers only accumulate deltas; [`OrbitControls::update`] applies
//! them to the camera once per frame. With damping enabled each update
//! consumes `damping_factor` of the pending motion and decays the rest, so
//! the camera keeps gliding for a few frames after the pointer stops.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use super::camera::PerspectiveCamera;

const EPS: f64 = 1e-6;

/// Spherical coordinates around the Y axis: polar angle `phi` from +Y, azimuth `theta` from +Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Spherical {
	radius: f64,
	phi: f64,
	theta: f64,
}

impl Spherical {
	fn from_offset(v: DVec3) -> Self {
		let radius = v.length();
		if radius == 0.0 {
			return Self::default();
		}
		Self {
			radius,
			theta: v.x.atan2(v.z),
			phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
		}
	}

	fn to_offset(self) -> DVec3 {
		let sin_phi = self.phi.sin();
		DVec3::new(
			self.radius * sin_phi * self.theta.sin(),
			self.radius * self.phi.cos(),
			self.radius * sin_phi * self.theta.cos(),
		)
	}
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
	pub target: DVec3,
	pub enable_damping: bool,
	pub damping_factor: f64,
	pub min_distance: f64,
	pub max_distance: f64,
	pub rotate_speed: f64,
	pub zoom_speed: f64,
	pub pan_speed: f64,
	delta: Spherical,
	scale: f64,
	pan_offset: DVec3,
}

impl Default for OrbitControls {
	fn default() -> Self {
		Self {
			target: DVec3::ZERO,
			enable_damping: false,
			damping_factor: 0.05,
			min_distance: 0.0,
			max_distance: f64::INFINITY,
			rotate_speed: 1.0,
			zoom_speed: 1.0,
			pan_speed: 1.0,
			delta: Spherical::default(),
			scale: 1.0,
			pan_offset: DVec3::ZERO,
		}
	}
}

impl OrbitControls {
	pub fn new(target: DVec3) -> Self {
		Self {
			target,
			..Self::default()
		}
	}

	pub fn rotate_left(&mut self, angle: f64) {
		self.delta.theta -= angle;
	}

	pub fn rotate_up(&mut self, angle: f64) {
		self.delta.phi -= angle;
	}

	/// Pointer drag of `(dx, dy)` pixels orbits around the target.
	pub fn rotate_by_pixels(&mut self, dx: f64, dy: f64, viewport_height: f64) {
		if viewport_height <= 0.0 {
			return;
		}
		self.rotate_left(TAU * dx / viewport_height * self.rotate_speed);
		self.rotate_up(TAU * dy / viewport_height * self.rotate_speed);
	}

	/// Wheel step: negative `delta_y` moves the camera toward the target.
	pub fn zoom_by_wheel(&mut self, delta_y: f64) {
		let step = 0.95_f64.powf(self.zoom_speed);
		if delta_y < 0.0 {
			self.scale *= step;
		} else if delta_y > 0.0 {
			self.scale /= step;
		}
	}

	/// Pointer drag of `(dx, dy)` pixels slides camera and target in the image plane.
	pub fn pan_by_pixels(
		&mut self,
		dx: f64,
		dy: f64,
		camera: &PerspectiveCamera,
		viewport_height: f64,
	) {
		if viewport_height <= 0.0 {
			return;
		}
		let distance = (camera.position - self.target).length();
		let world_per_pixel =
			2.0 * distance * (camera.fov.to_radians() * 0.5).tan() / viewport_height;
		let (right, up) = camera.screen_axes();
		self.pan_offset += (up * dy - right * dx) * world_per_pixel * self.pan_speed;
	}

	/// Applies pending motion to `camera`. Returns whether the camera moved.
	pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
		let before = camera.position;
		let mut spherical = Spherical::from_offset(camera.position - self.target);

		let step = if self.enable_damping {
			self.damping_factor
		} else {
			1.0
		};
		spherical.theta += self.delta.theta * step;
		spherical.phi = (spherical.phi + self.delta.phi * step).clamp(EPS, PI - EPS);
		spherical.radius = (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);
		self.target += self.pan_offset * step;

		camera.position = self.target + spherical.to_offset();
		camera.look_at(self.target);

		if self.enable_damping {
			let decay = 1.0 - self.damping_factor;
			self.delta.theta *= decay;
			self.delta.phi *= decay;
			self.pan_offset *= decay;
		} else {
			self.delta = Spherical::default();
			self.pan_offset = DVec3::ZERO;
		}
		self.scale = 1.0;

		camera.position.distance_squared(before) > EPS * EPS
	}
}
