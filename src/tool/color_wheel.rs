//! Maps pointer positions on the hue/saturation wheel to colours.

use crate::color::hsl_to_hex;
use crate::geometry::Point;

pub const WHEEL_LIGHTNESS: f32 = 0.5;

/// Colour at `pos` for a wheel centred on `center`, or `None` outside the wheel.
pub fn color_at(pos: Point, center: Point, radius: f32) -> Option<String> {
    let dx = pos.x - center.x;
    let dy = pos.y - center.y;
    let distance = dx.hypot(dy);
    if radius <= 0.0 || distance > radius {
        return None;
    }

    let hue = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    let saturation = (distance / radius).min(1.0);
    Some(hsl_to_hex(hue, saturation, WHEEL_LIGHTNESS))
}

/// Drag-to-pick state of the wheel widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorWheel {
    pub center: Point,
    pub radius: f32,
    dragging: bool,
}

impl ColorWheel {
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            center,
            radius,
            dragging: false,
        }
    }

    /// Keeps the wheel's geometry in step with its widget's layout.
    pub fn set_bounds(&mut self, center: Point, radius: f32) {
        self.center = center;
        self.radius = radius;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A press only starts a drag when it lands inside the wheel.
    pub fn pointer_down(&mut self, pos: Point) -> Option<String> {
        let picked = color_at(pos, self.center, self.radius);
        self.dragging = picked.is_some();
        picked
    }

    /// While dragging, every position inside the wheel re-resolves the colour.
    pub fn pointer_move(&mut self, pos: Point) -> Option<String> {
        if !self.dragging {
            return None;
        }
        color_at(pos, self.center, self.radius)
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }
}
