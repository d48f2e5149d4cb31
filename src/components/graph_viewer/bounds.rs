//! Bounding box, centroid and re-centering of the point set.

use glam::DVec3;

/// Scale used when the points have no spatial extent (empty or single point).
pub const FALLBACK_SCALE: f64 = 1.0;

/// Component-wise bounds of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
	pub min: DVec3,
	pub max: DVec3,
}

impl BoundingBox {
	/// `None` for an empty slice.
	pub fn from_points(points: &[DVec3]) -> Option<Self> {
		let first = *points.first()?;
		Some(points.iter().fold(
			Self {
				min: first,
				max: first,
			},
			|b, &p| Self {
				min: b.min.min(p),
				max: b.max.max(p),
			},
		))
	}

	/// Midpoint of the box, used as the centroid.
	pub fn center(&self) -> DVec3 {
		(self.min + self.max) * 0.5
	}

	pub fn size(&self) -> DVec3 {
		self.max - self.min
	}

	pub fn max_extent(&self) -> f64 {
		self.size().max_element()
	}
}

/// Points moved so the bounding box center sits at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized {
	pub centroid: DVec3,
	/// Largest axis extent, or [`FALLBACK_SCALE`] when that is not positive.
	pub scale: f64,
	pub points: Vec<DVec3>,
}

impl Normalized {
	pub fn new(points: &[DVec3]) -> Self {
		let bounds = BoundingBox::from_points(points);
		let centroid = bounds.map_or(DVec3::ZERO, |b| b.center());
		let scale = match bounds.map(|b| b.max_extent()) {
			Some(extent) if extent > 0.0 && extent.is_finite() => extent,
			_ => FALLBACK_SCALE,
		};
		Self {
			centroid,
			scale,
			points: points.iter().map(|&p| p - centroid).collect(),
		}
	}
}
