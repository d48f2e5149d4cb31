use glam::DVec3;
use serde::Deserialize;

use crate::error::Result;

/// Pair of point indices joined by a line. Read from an index array whose
/// first two entries are used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<usize>")]
pub struct Edge(pub usize, pub usize);

impl TryFrom<Vec<usize>> for Edge {
	type Error = String;

	fn try_from(indices: Vec<usize>) -> std::result::Result<Self, Self::Error> {
		match indices[..] {
			[i, j, ..] => Ok(Edge(i, j)),
			_ => Err(format!("edge needs two point indices, got {}", indices.len())),
		}
	}
}

/// Points and edges as served in `circuit_data.json`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Dataset {
	/// Node positions, addressed by index.
	pub points: Vec<DVec3>,
	/// Index pairs into `points`.
	pub edges: Vec<Edge>,
}

impl Dataset {
	/// Parses the JSON text of a dataset document.
	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}
}
