mod bounds;
mod browser;
mod camera;
mod component;
mod config;
mod controls;
#[cfg(test)]
mod fakes;
mod loader;
mod render;
mod scene;
mod startup;
mod state;
mod types;
mod viewport;

pub use component::GraphViewer;
pub use config::{Color, ViewerConfig};
pub use types::{Dataset, Edge};
