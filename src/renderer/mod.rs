pub mod surface;

pub use surface::{PixelRect, RasterSurface, Surface};

use rand::Rng;

use crate::color::Rgb;
use crate::document::Drawing;
use crate::geometry::Point;
use crate::stroke::{GrainDot, Segment};

pub const GRAIN_MIN_DOTS: usize = 18;
/// Grain dots per surface unit of segment length
pub const GRAIN_DENSITY: f32 = 4.2;
/// Sideways scatter of grain dots relative to the segment width
const GRAIN_SPREAD: f32 = 1.2;

/// Paints one segment, then its baked grain if it has any.
pub fn render_segment<S: Surface + ?Sized>(surface: &mut S, segment: &Segment) {
    let paint = segment.paint;
    surface.stroke_line(
        segment.from,
        segment.to,
        segment.width,
        segment.cap,
        paint.rgb(),
        paint.alpha() * segment.opacity,
    );

    if let Some(grain) = &segment.grain {
        for dot in &grain.dots {
            surface.fill_circle(Point::new(dot.x, dot.y), dot.r, grain.tint, dot.alpha);
        }
    }
}

/// Clears to `background` and replays the whole drawing in order.
pub fn redraw_all<S: Surface + ?Sized>(surface: &mut S, drawing: &Drawing, background: Rgb) {
    surface.clear(background);
    for stroke in drawing.strokes() {
        for segment in stroke.segments() {
            render_segment(surface, segment);
        }
    }
}

/// Scatters pencil grain along `from..to`. Called once per segment; the
/// result is stored with the segment so redraws look the same.
pub fn generate_grain_dots<R: Rng + ?Sized>(
    from: Point,
    to: Point,
    width: f32,
    rng: &mut R,
) -> Vec<GrainDot> {
    let length = from.distance(to);
    let count = ((length * GRAIN_DENSITY).ceil() as usize).max(GRAIN_MIN_DOTS);
    let spread = width * GRAIN_SPREAD;

    (0..count)
        .map(|i| {
            let along = from.lerp(to, (i as f32 + rng.random::<f32>()) / count as f32);
            GrainDot {
                x: along.x + (rng.random::<f32>() - 0.5) * spread,
                y: along.y + (rng.random::<f32>() - 0.5) * spread,
                r: rng.random_range(0.3..1.5),
                alpha: rng.random_range(0.08..0.22),
            }
        })
        .collect()
}
