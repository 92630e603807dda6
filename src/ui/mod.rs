//! Terminal UI

pub mod app;

pub use app::render;
