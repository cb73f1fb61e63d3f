#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controller;
pub mod curve;
pub mod document;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod selection;
pub mod state;
pub mod view;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use controller::SketchController;
pub use curve::Curve;
pub use document::Drawing;
pub use history::SnapshotHistory;
pub use input::{InputEvent, InputHandler, SketchKey};
pub use palette::Palette;
pub use renderer::Renderer;
pub use selection::SelectionRegion;
pub use state::{ActionKey, Mode, QuasiKey};
pub use view::ViewTransform;
