//! Error type shared by the loader, scene construction and browser glue.

use thiserror::Error;

/// Everything that can stop the viewer from reaching its running state.
#[derive(Error, Debug)]
pub enum ViewerError {
	/// The request could not be issued or the network failed.
	#[error("failed to fetch {url}: {reason}")]
	Fetch {
		/// Resource that was requested.
		url: String,
		/// Host-provided failure description.
		reason: String,
	},

	/// The server answered with a non-OK status.
	#[error("HTTP {status} while fetching {url}")]
	Status {
		/// Resource that was requested.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The document is not valid JSON or does not have the dataset shape.
	#[error("malformed dataset: {0}")]
	Parse(#[from] serde_json::Error),

	/// An edge points past the end of the point list.
	#[error("edge {edge} references point {index}, but only {len} points exist")]
	EdgeOutOfRange {
		/// Position of the offending edge in the edge list.
		edge: usize,
		/// The out-of-range point index.
		index: usize,
		/// Number of points in the dataset.
		len: usize,
	},

	/// The host environment is missing something (window, canvas context, ...).
	#[error("host environment error: {0}")]
	Host(String),
}

/// Result alias used throughout the viewer.
pub type Result<T> = std::result::Result<T, ViewerError>;
