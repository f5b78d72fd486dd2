#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod board;
pub mod color;
pub mod config;
pub mod document;
pub mod eraser;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod stroke;
pub mod texture_manager;
pub mod tool;
pub mod util;
pub mod widgets;

pub use app::NoodleApp;
pub use board::Board;
pub use config::{BoardConfig, BoardMode};
pub use document::Drawing;
pub use error::{BoardError, BoardResult};
pub use event::{BoardEvent, EventHandler};
pub use geometry::Point;
pub use input::{PointerEvent, PointerKind};
pub use stroke::{Segment, Stroke};
pub use tool::{Tool, ToolState};
