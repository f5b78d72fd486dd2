//! Decides which pointer events draw.

pub mod platform;

pub use platform::{CaptureError, PlatformCapabilities, StaticPlatform, UserAgentPlatform};

use crate::geometry::Point;

/// Pressure used when a pen or touch reports none
pub const MIN_PRESSURE: f32 = 0.1;
/// What browsers report for a mouse with a button held
pub const MOUSE_PRESSURE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

/// A pointer sample in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u64,
    pub kind: PointerKind,
    pub position: Point,
    /// Raw device pressure, if the device reports one
    pub pressure: Option<f32>,
}

impl PointerEvent {
    pub fn new(pointer_id: u64, kind: PointerKind, position: Point) -> Self {
        Self {
            pointer_id,
            kind,
            position,
            pressure: None,
        }
    }

    pub fn with_pressure(mut self, pressure: f32) -> Self {
        self.pressure = Some(pressure);
        self
    }
}

pub struct InputClassifier {
    platform: Box<dyn PlatformCapabilities>,
}

impl std::fmt::Debug for InputClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputClassifier")
            .field("tablet", &self.platform.is_tablet())
            .finish()
    }
}

impl InputClassifier {
    pub fn new(platform: Box<dyn PlatformCapabilities>) -> Self {
        Self { platform }
    }

    /// Mouse and pen always draw. Finger touch draws everywhere except on
    /// tablets, where it is left for scrolling and resting palms.
    pub fn should_draw(&self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Mouse | PointerKind::Pen => true,
            PointerKind::Touch => !self.platform.is_tablet(),
        }
    }

    /// Pressure in (0, 1]; missing or zero readings are floored so strokes
    /// never vanish.
    pub fn pressure(&self, event: &PointerEvent) -> f32 {
        match (event.kind, event.pressure) {
            (_, Some(p)) if p > 0.0 => p.min(1.0),
            (PointerKind::Mouse, None) => MOUSE_PRESSURE,
            _ => MIN_PRESSURE,
        }
    }

    pub fn platform_mut(&mut self) -> &mut dyn PlatformCapabilities {
        self.platform.as_mut()
    }
}
