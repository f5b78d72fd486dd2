//! Device capability detection, kept behind a trait so tests can pretend to
//! be a tablet.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Pointer capture is not supported on this platform")]
    Unsupported,
}

pub trait PlatformCapabilities {
    /// Touch tablet with a distinct stylus, where finger touches must not draw
    fn is_tablet(&self) -> bool;

    /// Routes further events of `pointer_id` to the board. Failing is harmless.
    fn capture_pointer(&mut self, _pointer_id: u64) -> Result<(), CaptureError> {
        Err(CaptureError::Unsupported)
    }

    fn release_pointer(&mut self, _pointer_id: u64) {}
}

/// Fixed answers, for hosts that already know what they run on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticPlatform {
    pub tablet: bool,
    pub pointer_capture: bool,
}

impl StaticPlatform {
    pub fn desktop() -> Self {
        Self {
            tablet: false,
            pointer_capture: true,
        }
    }

    pub fn tablet() -> Self {
        Self {
            tablet: true,
            pointer_capture: true,
        }
    }
}

impl PlatformCapabilities for StaticPlatform {
    fn is_tablet(&self) -> bool {
        self.tablet
    }

    fn capture_pointer(&mut self, _pointer_id: u64) -> Result<(), CaptureError> {
        if self.pointer_capture {
            Ok(())
        } else {
            Err(CaptureError::Unsupported)
        }
    }
}

/// Browser heuristic: iPads, including iPadOS that reports itself as a Mac
/// but has a multi-touch screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentPlatform {
    pub user_agent: String,
    pub max_touch_points: u32,
}

impl UserAgentPlatform {
    pub fn new(user_agent: impl Into<String>, max_touch_points: u32) -> Self {
        Self {
            user_agent: user_agent.into(),
            max_touch_points,
        }
    }

    /// Reads the navigator of the current page.
    #[cfg(target_arch = "wasm32")]
    pub fn from_browser() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        let user_agent = navigator.user_agent().ok()?;
        let max_touch_points = navigator.max_touch_points().max(0) as u32;
        Some(Self::new(user_agent, max_touch_points))
    }
}

impl PlatformCapabilities for UserAgentPlatform {
    fn is_tablet(&self) -> bool {
        self.user_agent.contains("iPad")
            || (self.user_agent.contains("Macintosh") && self.max_touch_points > 1)
    }

    /// egui owns the canvas element and exposes no DOM pointer capture, so
    /// this reports success without capturing anything.
    fn capture_pointer(&mut self, _pointer_id: u64) -> Result<(), CaptureError> {
        Ok(())
    }
}
