//! Browser entry point: sets up logging and mounts the viewer app.

// the remaining dependencies are used through the library crate
#![allow(unused_crate_dependencies)]

use circuit_graph_viewer::{App, init_logging};
use leptos::mount::mount_to_body;

fn main() {
	init_logging();
	mount_to_body(App);
}
