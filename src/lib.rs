//! Leptos client-side app showing a 3D point-and-edge graph.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Modules
mod components;
mod error;
mod pages;

pub use crate::components::graph_viewer::{Color, Dataset, Edge, GraphViewer, ViewerConfig};
pub use crate::error::{Result, ViewerError};

// Top-Level pages
use crate::pages::home::Home;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The app root: document metadata plus the viewer page.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		// sets the document title
		<Title text="Circuit Graph Viewer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Home />
	}
}
