/// `0xRRGGBB` color.
pub type Color = u32;

/// Tunables for the viewer. Distances are factors of the dataset scale
/// (its largest axis extent).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
	/// Location of the points/edges JSON document.
	pub data_url: String,
	/// Vertical field of view in degrees.
	pub fov: f64,
	/// Near clip plane, in world units.
	pub near: f64,
	/// Far clip plane as a multiple of the scale.
	pub far_factor: f64,
	/// Initial camera distance from the origin along +Z.
	pub distance_factor: f64,
	/// Closest zoom, as a multiple of the scale.
	pub min_distance_factor: f64,
	/// Farthest zoom, as a multiple of the scale.
	pub max_distance_factor: f64,
	/// Share of pending camera motion applied per frame.
	pub damping_factor: f64,
	/// Orbit input multiplier.
	pub rotate_speed: f64,
	/// Wheel input multiplier.
	pub zoom_speed: f64,
	/// Pan input multiplier.
	pub pan_speed: f64,
	/// Node sphere radius as a multiple of the scale.
	pub node_radius_factor: f64,
	/// Canvas clear color.
	pub background: Color,
	/// Shared node material color.
	pub node_color: Color,
	/// Shared edge material color.
	pub edge_color: Color,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			data_url: "/circuit_data.json".into(),
			fov: 75.0,
			near: 0.1,
			far_factor: 10.0,
			distance_factor: 1.5,
			min_distance_factor: 0.1,
			max_distance_factor: 5.0,
			damping_factor: 0.05,
			rotate_speed: 1.0,
			zoom_speed: 1.0,
			pan_speed: 1.0,
			node_radius_factor: 0.01,
			background: 0x202020,
			node_color: 0xffaa00,
			edge_color: 0x00aaff,
		}
	}
}

impl ViewerConfig {
	/// Far clip plane for a dataset of the given scale, never closer than `near * far_factor`.
	pub fn far(&self, scale: f64) -> f64 {
		(scale * self.far_factor).max(self.near * self.far_factor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn far_plane_follows_scale() {
		let config = ViewerConfig::default();
		assert_eq!(config.far(20.0), 200.0);
	}

	#[test]
	fn far_plane_stays_beyond_near_for_tiny_datasets() {
		let config = ViewerConfig::default();
		assert!(config.far(0.001) > config.near);
	}
}
