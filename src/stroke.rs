use log::{trace, warn};
use rand::Rng;

use crate::color::{Paint, Rgb, hex_to_rgb};
use crate::document::Drawing;
use crate::geometry::Point;
use crate::renderer::generate_grain_dots;
use crate::tool::{DrawingTool, LineCap, Tool};

/// Brush segments never get thinner than this
pub const BRUSH_MIN_WIDTH: f32 = 4.0;
pub const PENCIL_WIDTH_FACTOR: f32 = 0.9;
pub const PENCIL_OPACITY: f32 = 0.72;

/// One texture dot of a pencil segment, in surface units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrainDot {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub alpha: f32,
}

/// Pencil texture baked when the segment was drawn. Replayed as is, never regenerated.
#[derive(Debug, Clone, PartialEq)]
pub struct Grain {
    pub tint: Rgb,
    pub dots: Vec<GrainDot>,
}

/// The straight piece of ink between two consecutive samples of a stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub width: f32,
    pub opacity: f32,
    pub cap: LineCap,
    pub paint: Paint,
    pub grain: Option<Grain>,
}

/// One pointer-down to pointer-up gesture
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    tool: Tool,
    color: String,
    segments: Vec<Segment>,
}

impl Stroke {
    pub fn new(tool: Tool, color: &str) -> Self {
        Self::from_segments(tool, color, Vec::new())
    }

    pub fn from_segments(tool: Tool, color: &str, segments: Vec<Segment>) -> Self {
        Self {
            tool,
            color: color.to_owned(),
            segments,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The colour selected when the stroke began
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Debug)]
struct PendingStroke {
    tool: DrawingTool,
    stroke: Stroke,
    rgb: Rgb,
    last_point: Point,
    last_pressure: f32,
}

/// Builds the in-progress stroke from pointer samples.
///
/// Only one stroke is recorded at a time; it reaches the [`Drawing`] through
/// [`StrokeRecorder::commit_stroke`].
#[derive(Debug)]
pub struct StrokeRecorder {
    pending: Option<PendingStroke>,
    last_rgb: Rgb,
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self {
            pending: None,
            last_rgb: Rgb::BLACK,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.pending.is_some()
    }

    /// The stroke being recorded, if any
    pub fn current(&self) -> Option<&Stroke> {
        self.pending.as_ref().map(|pending| &pending.stroke)
    }

    /// Starts a stroke at `point`. The eraser never records strokes, so this
    /// returns `false` for it.
    pub fn begin_stroke(&mut self, tool: Tool, color: &str, point: Point, pressure: f32) -> bool {
        let Some(drawing_tool) = tool.drawing_tool() else {
            return false;
        };

        let rgb = match hex_to_rgb(color) {
            Some(rgb) => rgb,
            None => {
                warn!("Malformed colour {:?}, keeping {}", color, self.last_rgb.to_hex());
                self.last_rgb
            }
        };
        self.last_rgb = rgb;

        self.pending = Some(PendingStroke {
            tool: drawing_tool,
            stroke: Stroke::new(tool, color),
            rgb,
            last_point: point,
            last_pressure: pressure,
        });
        true
    }

    /// Appends the segment from the previous sample to `point` and returns it.
    pub fn extend_stroke<R: Rng + ?Sized>(
        &mut self,
        point: Point,
        pressure: f32,
        rng: &mut R,
    ) -> Option<&Segment> {
        let pending = self.pending.as_mut()?;
        let segment = compute_segment(
            pending.tool,
            pending.rgb,
            pending.last_point,
            point,
            pending.last_pressure,
            pressure,
            rng,
        );
        trace!("segment {:?} -> {:?} width {}", segment.from, segment.to, segment.width);

        pending.last_point = point;
        pending.last_pressure = pressure;
        pending.stroke.segments.push(segment);
        pending.stroke.segments.last()
    }

    /// Ends the stroke. It is appended to `drawing` only if it produced at
    /// least one segment; returns whether it was.
    pub fn commit_stroke(&mut self, drawing: &mut Drawing) -> bool {
        match self.pending.take() {
            Some(pending) if !pending.stroke.is_empty() => {
                drawing.push(pending.stroke);
                true
            }
            _ => false,
        }
    }
}

fn compute_segment<R: Rng + ?Sized>(
    tool: DrawingTool,
    rgb: Rgb,
    from: Point,
    to: Point,
    last_pressure: f32,
    pressure: f32,
    rng: &mut R,
) -> Segment {
    let config = tool.config();
    let blended = (last_pressure + pressure) / 2.0;

    match tool {
        DrawingTool::Brush => {
            let width = (config.width * (0.35 + blended * 1.05)).max(BRUSH_MIN_WIDTH);
            let alpha = (0.3 + blended * 0.7).min(1.0);
            Segment {
                from,
                to,
                width,
                // alpha already lives in the paint
                opacity: 1.0,
                cap: config.cap,
                paint: Paint::Translucent { rgb, alpha },
                grain: None,
            }
        }
        DrawingTool::Pencil => {
            let width = config.width * PENCIL_WIDTH_FACTOR;
            Segment {
                from,
                to,
                width,
                opacity: PENCIL_OPACITY,
                cap: config.cap,
                paint: Paint::Solid(rgb),
                grain: Some(Grain {
                    tint: rgb,
                    dots: generate_grain_dots(from, to, width, rng),
                }),
            }
        }
        DrawingTool::Pen => Segment {
            from,
            to,
            width: config.width,
            opacity: config.opacity,
            cap: config.cap,
            paint: Paint::Solid(rgb),
            grain: None,
        },
    }
}
