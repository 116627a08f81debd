#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod input;
pub mod panels;
pub mod pixel;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use config::GridConfig;
pub use editor::{Editor, EventQueue};
pub use grid::Grid;
pub use input::{InputEvent, PointerInput, PointerKind};
pub use pixel::Pixel;
pub use renderer::CanvasSurface;
pub use state::{ToolManager, ToolState};
pub use surface::{RecordingSurface, Surface};
pub use tools::{GridTool, Tool, ToolType};
