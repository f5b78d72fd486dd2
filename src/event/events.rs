use crate::config::BoardMode;
use crate::tool::Tool;

#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    StrokeCommitted {
        tool: Tool,
        segments: usize,
    },
    StrokesErased {
        remaining: usize,
    },
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    ColorChanged {
        color: String,
    },
    ModeChanged(BoardMode),
    Resized {
        width: f32,
        height: f32,
        scale: f32,
    },
    /// PNG snapshot requested by the user
    Saved {
        png: Vec<u8>,
    },
    ProfileRequested,
}
