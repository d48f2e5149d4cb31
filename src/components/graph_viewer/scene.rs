//! Scene contents: node spheres, edge lines and the axes helper.
//!
//! Every node references the same [`SphereGeometry`] and [`BasicMaterial`],
//! and every edge the same line material, through [`SharedResources`].

use std::rc::Rc;

use glam::DVec3;

use super::config::{Color, ViewerConfig};
use super::types::Edge;
use crate::error::{Result, ViewerError};

#[derive(Clone, Debug, PartialEq)]
pub struct SphereGeometry {
	pub radius: f64,
}

/// Flat, unlit color shared by meshes and lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicMaterial {
	pub color: Color,
}

#[derive(Clone, Debug)]
pub struct SharedResources {
	pub node_geometry: Rc<SphereGeometry>,
	pub node_material: Rc<BasicMaterial>,
	pub edge_material: Rc<BasicMaterial>,
}

impl SharedResources {
	pub fn new(config: &ViewerConfig, scale: f64) -> Self {
		Self {
			node_geometry: Rc::new(SphereGeometry {
				radius: scale * config.node_radius_factor,
			}),
			node_material: Rc::new(BasicMaterial {
				color: config.node_color,
			}),
			edge_material: Rc::new(BasicMaterial {
				color: config.edge_color,
			}),
		}
	}
}

#[derive(Clone, Debug)]
pub struct NodeVisual {
	pub position: DVec3,
	pub geometry: Rc<SphereGeometry>,
	pub material: Rc<BasicMaterial>,
}

#[derive(Clone, Debug)]
pub struct EdgeVisual {
	pub start: DVec3,
	pub end: DVec3,
	pub material: Rc<BasicMaterial>,
}

/// X, Y and Z axes drawn from the origin in red, green and blue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesHelper {
	pub size: f64,
}

impl AxesHelper {
	pub const COLORS: [Color; 3] = [0xff0000, 0x00ff00, 0x0000ff];

	pub fn segments(&self) -> [(DVec3, DVec3, Color); 3] {
		let [x, y, z] = Self::COLORS;
		[
			(DVec3::ZERO, DVec3::X * self.size, x),
			(DVec3::ZERO, DVec3::Y * self.size, y),
			(DVec3::ZERO, DVec3::Z * self.size, z),
		]
	}
}

pub struct Scene {
	pub background: Color,
	pub axes: Option<AxesHelper>,
	pub nodes: Vec<NodeVisual>,
	pub edges: Vec<EdgeVisual>,
	pub resources: SharedResources,
}

impl Scene {
	pub fn new(background: Color, resources: SharedResources) -> Self {
		Self {
			background,
			axes: None,
			nodes: Vec::new(),
			edges: Vec::new(),
			resources,
		}
	}

	pub fn add_nodes(&mut self, points: &[DVec3]) {
		self.nodes.extend(points.iter().map(|&position| NodeVisual {
			position,
			geometry: Rc::clone(&self.resources.node_geometry),
			material: Rc::clone(&self.resources.node_material),
		}));
	}

	/// Adds one line per edge in order. Stops at the first edge with an
	/// out-of-range index; lines added before it stay in the scene.
	pub fn add_edges(&mut self, points: &[DVec3], edges: &[Edge]) -> Result<()> {
		for (n, &Edge(i, j)) in edges.iter().enumerate() {
			let endpoint = |index: usize| {
				points
					.get(index)
					.copied()
					.ok_or(ViewerError::EdgeOutOfRange {
						edge: n,
						index,
						len: points.len(),
					})
			};
			let (start, end) = (endpoint(i)?, endpoint(j)?);
			self.edges.push(EdgeVisual {
				start,
				end,
				material: Rc::clone(&self.resources.edge_material),
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scene() -> Scene {
		let config = ViewerConfig::default();
		Scene::new(config.background, SharedResources::new(&config, 2.0))
	}

	fn line_points() -> Vec<DVec3> {
		vec![DVec3::new(-1.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0)]
	}

	#[test]
	fn one_node_per_point_sharing_resources() {
		let mut scene = scene();
		let points = [DVec3::ZERO, DVec3::ONE, DVec3::NEG_ONE];
		scene.add_nodes(&points);

		assert_eq!(scene.nodes.len(), 3);
		for (node, point) in scene.nodes.iter().zip(points) {
			assert_eq!(node.position, point);
			assert!(Rc::ptr_eq(&node.geometry, &scene.resources.node_geometry));
			assert!(Rc::ptr_eq(&node.material, &scene.resources.node_material));
		}
		assert_eq!(Rc::strong_count(&scene.resources.node_geometry), 4);
	}

	#[test]
	fn node_radius_follows_scale() {
		let scene = scene();
		assert_eq!(scene.resources.node_geometry.radius, 0.02);
		assert_eq!(scene.resources.node_material.color, 0xffaa00);
		assert_eq!(scene.resources.edge_material.color, 0x00aaff);
	}

	#[test]
	fn one_line_per_valid_edge() {
		let mut scene = scene();
		let points = line_points();
		scene
			.add_edges(&points, &[Edge(0, 1), Edge(1, 0), Edge(1, 1)])
			.unwrap();

		assert_eq!(scene.edges.len(), 3);
		assert_eq!(scene.edges[0].start, points[0]);
		assert_eq!(scene.edges[0].end, points[1]);
		assert!(
			scene
				.edges
				.iter()
				.all(|e| Rc::ptr_eq(&e.material, &scene.resources.edge_material))
		);
	}

	#[test]
	fn out_of_range_edge_stops_construction() {
		let mut scene = scene();
		let err = scene
			.add_edges(&line_points(), &[Edge(0, 1), Edge(0, 5), Edge(1, 0)])
			.unwrap_err();

		assert!(matches!(
			err,
			ViewerError::EdgeOutOfRange {
				edge: 1,
				index: 5,
				len: 2
			}
		));
		assert_eq!(scene.edges.len(), 1);
	}

	#[test]
	fn bad_first_index_is_reported() {
		let mut scene = scene();
		let err = scene
			.add_edges(&line_points(), &[Edge(7, 0)])
			.unwrap_err();
		assert!(matches!(err, ViewerError::EdgeOutOfRange { index: 7, .. }));
		assert!(scene.edges.is_empty());
	}

	#[test]
	fn axes_span_scale_along_each_axis() {
		let axes = AxesHelper { size: 3.0 };
		let [x, y, z] = axes.segments();
		assert_eq!(x, (DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), 0xff0000));
		assert_eq!(y.1, DVec3::new(0.0, 3.0, 0.0));
		assert_eq!(z.1, DVec3::new(0.0, 0.0, 3.0));
	}
}
