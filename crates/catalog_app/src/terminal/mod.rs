//! Line-oriented terminal front end for the catalog browser.
mod app;
mod commands;
mod effects;
mod render;
mod shelf;

pub use app::run_app;
