use std::f64::consts::TAU;

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

use super::config::Color;
use super::state::GraphViewerState;

/// Smallest disc drawn for a node, in pixels.
const MIN_DISC_RADIUS: f64 = 0.75;
const LINE_WIDTH: f64 = 1.0;

/// One primitive in canvas pixels, tagged with its distance from the camera.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Line {
		from: DVec2,
		to: DVec2,
		color: Color,
		depth: f64,
	},
	Disc {
		center: DVec2,
		radius: f64,
		color: Color,
		depth: f64,
	},
}

impl DrawCommand {
	pub fn depth(&self) -> f64 {
		match self {
			Self::Line { depth, .. } | Self::Disc { depth, .. } => *depth,
		}
	}
}

fn css_color(color: Color) -> String {
	format!("#{:06x}", color & 0xff_ffff)
}

/// Projects the scene and orders it back to front (painter's algorithm).
pub fn draw_list(state: &GraphViewerState) -> Vec<DrawCommand> {
	let (camera, size) = (&state.camera, state.size());
	let view = camera.view_matrix();
	let mut commands = Vec::with_capacity(state.scene.nodes.len() + state.scene.edges.len() + 3);

	let axes = state.scene.axes.iter().flat_map(|axes| axes.segments());
	let edges = state
		.scene
		.edges
		.iter()
		.map(|e| (e.start, e.end, e.material.color));
	for (a, b, color) in axes.chain(edges) {
		let Some((a, b)) =
			camera.clip_segment(view.transform_point3(a), view.transform_point3(b))
		else {
			continue;
		};
		let (a, b) = (camera.project_view(a, size), camera.project_view(b, size));
		commands.push(DrawCommand::Line {
			from: DVec2::new(a.x, a.y),
			to: DVec2::new(b.x, b.y),
			color,
			depth: (a.depth + b.depth) * 0.5,
		});
	}

	for node in &state.scene.nodes {
		let Some(p) = camera.project(view.transform_point3(node.position), size) else {
			continue;
		};
		let radius = node.geometry.radius * camera.pixel_scale(p.depth, size.y);
		commands.push(DrawCommand::Disc {
			center: DVec2::new(p.x, p.y),
			radius: radius.max(MIN_DISC_RADIUS),
			color: node.material.color,
			depth: p.depth,
		});
	}

	commands.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
	commands
}

pub fn render(state: &GraphViewerState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&css_color(state.scene.background));
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.set_line_width(LINE_WIDTH);

	for command in draw_list(state) {
		match command {
			DrawCommand::Line { from, to, color, .. } => {
				ctx.set_stroke_style_str(&css_color(color));
				ctx.begin_path();
				ctx.move_to(from.x, from.y);
				ctx.line_to(to.x, to.y);
				ctx.stroke();
			}
			DrawCommand::Disc {
				center,
				radius,
				color,
				..
			} => {
				ctx.set_fill_style_str(&css_color(color));
				ctx.begin_path();
				let _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
				ctx.fill();
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_viewer::config::ViewerConfig;
	use crate::components::graph_viewer::types::{Dataset, Edge};
	use approx::assert_relative_eq;
	use glam::DVec3;

	fn two_point_state() -> GraphViewerState {
		let data = Dataset {
			points: vec![DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)],
			edges: vec![Edge(0, 1)],
		};
		let mut state = GraphViewerState::new(&data, &ViewerConfig::default(), 800.0, 600.0);
		state.populate(&data).unwrap();
		state
	}

	fn discs(commands: &[DrawCommand]) -> Vec<(DVec2, f64, Color)> {
		commands
			.iter()
			.filter_map(|c| match c {
				DrawCommand::Disc {
					center,
					radius,
					color,
					..
				} => Some((*center, *radius, *color)),
				DrawCommand::Line { .. } => None,
			})
			.collect()
	}

	#[test]
	fn css_colors_are_six_digit_hex() {
		assert_eq!(css_color(0x202020), "#202020");
		assert_eq!(css_color(0x00aaff), "#00aaff");
		assert_eq!(css_color(0xff), "#0000ff");
	}

	#[test]
	fn every_visible_item_gets_a_command() {
		let commands = draw_list(&two_point_state());
		let lines = commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }))
			.count();
		assert_eq!(lines, 4);
		assert_eq!(discs(&commands).len(), 2);
	}

	#[test]
	fn nodes_straddle_the_viewport_center() {
		let commands = draw_list(&two_point_state());
		let nodes = discs(&commands);
		let (left, right) = if nodes[0].0.x < nodes[1].0.x {
			(nodes[0], nodes[1])
		} else {
			(nodes[1], nodes[0])
		};
		assert_relative_eq!(400.0 - left.0.x, right.0.x - 400.0, epsilon = 1e-9);
		assert_relative_eq!(left.0.y, 300.0, epsilon = 1e-9);
		assert_relative_eq!(left.1, right.1, epsilon = 1e-9);
		assert_eq!(left.2, 0xffaa00);
	}

	#[test]
	fn edge_line_joins_the_projected_nodes() {
		let commands = draw_list(&two_point_state());
		let nodes = discs(&commands);
		let edge = commands
			.iter()
			.find_map(|c| match c {
				DrawCommand::Line {
					from, to, color, ..
				} if *color == 0x00aaff => Some((*from, *to)),
				_ => None,
			})
			.unwrap();
		let mut xs: Vec<f64> = nodes.iter().map(|n| n.0.x).collect();
		xs.sort_by(f64::total_cmp);
		assert_relative_eq!(edge.0.x, xs[0], epsilon = 1e-9);
		assert_relative_eq!(edge.1.x, xs[1], epsilon = 1e-9);
		assert_relative_eq!(edge.0.y, edge.1.y, epsilon = 1e-9);
	}

	#[test]
	fn commands_are_ordered_back_to_front() {
		let mut state = two_point_state();
		state.camera.position = DVec3::new(2.0, 1.0, 2.0);
		let commands = draw_list(&state);
		assert!(commands.windows(2).all(|w| w[0].depth() >= w[1].depth()));
	}

	#[test]
	fn nodes_behind_the_camera_are_skipped() {
		let mut state = two_point_state();
		state.camera.position = DVec3::new(0.5, 0.0, 0.0);
		state.camera.look_at(DVec3::new(5.0, 0.0, 0.0));
		let nodes = discs(&draw_list(&state));
		assert_eq!(nodes.len(), 1);
	}

	#[test]
	fn distant_nodes_keep_a_minimum_size() {
		let mut state = two_point_state();
		state.camera.position = DVec3::new(0.0, 0.0, 19.0);
		let nodes = discs(&draw_list(&state));
		assert!(nodes.iter().all(|n| n.1 >= MIN_DISC_RADIUS));
	}
}
