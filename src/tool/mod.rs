pub mod color_wheel;

pub use color_wheel::ColorWheel;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pen,
    Brush,
    Pencil,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Pen, Tool::Brush, Tool::Pencil, Tool::Eraser];

    pub fn config(self) -> ToolConfig {
        match self {
            Tool::Pen => ToolConfig { width: 4.0, opacity: 1.0, cap: LineCap::Round },
            Tool::Brush => ToolConfig { width: 12.0, opacity: 0.8, cap: LineCap::Round },
            Tool::Pencil => ToolConfig { width: 2.0, opacity: 1.0, cap: LineCap::Round },
            Tool::Eraser => ToolConfig { width: 24.0, opacity: 1.0, cap: LineCap::Round },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Brush => "Brush",
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
        }
    }

    pub fn is_eraser(self) -> bool {
        self == Tool::Eraser
    }

    /// The ink-laying variant of this tool, `None` for the eraser
    pub fn drawing_tool(self) -> Option<DrawingTool> {
        match self {
            Tool::Pen => Some(DrawingTool::Pen),
            Tool::Brush => Some(DrawingTool::Brush),
            Tool::Pencil => Some(DrawingTool::Pencil),
            Tool::Eraser => None,
        }
    }
}

/// A tool that records strokes. The eraser only removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawingTool {
    Pen,
    Brush,
    Pencil,
}

impl DrawingTool {
    pub fn tool(self) -> Tool {
        match self {
            DrawingTool::Pen => Tool::Pen,
            DrawingTool::Brush => Tool::Brush,
            DrawingTool::Pencil => Tool::Pencil,
        }
    }

    pub fn config(self) -> ToolConfig {
        self.tool().config()
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// End cap of a stroked segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

/// Base parameters of a tool before pressure is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolConfig {
    pub width: f32,
    pub opacity: f32,
    pub cap: LineCap,
}

/// Radius of the eraser's circular footprint
pub fn eraser_radius() -> f32 {
    Tool::Eraser.config().width / 2.0
}

/// A preset colour offered next to the tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub label: String,
    pub color: String,
}

impl Swatch {
    pub fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_owned(),
            color: color.to_owned(),
        }
    }

    pub fn defaults() -> Vec<Swatch> {
        vec![
            Swatch::new("Black", "#000000"),
            Swatch::new("Red", "#E21C1C"),
            Swatch::new("Yellow", "#FFEE00"),
            Swatch::new("Blue", "#0062FF"),
        ]
    }
}

/// The active tool and colour, as shown by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolState {
    pub tool: Tool,
    pub color: String,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            color: "#000000".to_owned(),
        }
    }
}

impl ToolState {
    pub fn new(tool: Tool, color: impl Into<String>) -> Self {
        Self {
            tool,
            color: color.into(),
        }
    }

    /// Picking a colour means the user wants to draw, so an active eraser
    /// gives way to the pencil.
    pub fn select_color(&self, color: &str) -> ToolState {
        let tool = if self.tool.is_eraser() { Tool::Pencil } else { self.tool };
        ToolState::new(tool, color)
    }

    pub fn select_tool(&self, tool: Tool) -> ToolState {
        ToolState::new(tool, self.color.clone())
    }
}
