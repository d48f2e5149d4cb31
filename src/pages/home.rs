use leptos::prelude::*;

use crate::components::graph_viewer::{GraphViewer, ViewerConfig};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! { <GraphViewer config=ViewerConfig::default() /> }
}
