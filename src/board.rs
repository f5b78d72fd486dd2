//! The drawing board: owns the drawing and its surface and turns pointer
//! events into strokes and erasures.

use log::{debug, info, trace, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::Rgb;
use crate::config::{BoardConfig, BoardMode};
use crate::document::Drawing;
use crate::error::BoardResult;
use crate::eraser::erase_along;
use crate::event::{BoardEvent, EventBus, EventHandler};
use crate::geometry::Point;
use crate::input::{InputClassifier, PlatformCapabilities, PointerEvent};
use crate::renderer::{PixelRect, RasterSurface, Surface, redraw_all, render_segment};
use crate::stroke::{Stroke, StrokeRecorder};
use crate::tool::{ColorWheel, Swatch, Tool, ToolState, eraser_radius};

#[derive(Debug, Clone, Copy)]
struct Gesture {
    pointer_id: u64,
    last_point: Point,
    erasing: bool,
}

/// Hot-path state of the single gesture in progress
#[derive(Debug, Default)]
struct GestureState {
    active: Option<Gesture>,
    recorder: StrokeRecorder,
}

pub struct Board {
    config: BoardConfig,
    background: Rgb,
    drawing: Drawing,
    surface: RasterSurface,
    tools: ToolState,
    mode: BoardMode,
    wheel: ColorWheel,
    classifier: InputClassifier,
    gesture: GestureState,
    rng: StdRng,
    events: EventBus,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("strokes", &self.drawing.len())
            .field("surface", &self.surface)
            .field("tools", &self.tools)
            .field("mode", &self.mode)
            .field("gesture", &self.gesture.active)
            .finish()
    }
}

impl Board {
    pub fn new(
        config: BoardConfig,
        platform: Box<dyn PlatformCapabilities>,
        width: f32,
        height: f32,
        scale: f32,
    ) -> BoardResult<Self> {
        Self::with_rng(config, platform, width, height, scale, StdRng::from_os_rng())
    }

    /// Like [`Board::new`] with a caller-chosen grain generator, for repeatable textures.
    pub fn with_rng(
        config: BoardConfig,
        platform: Box<dyn PlatformCapabilities>,
        width: f32,
        height: f32,
        scale: f32,
        rng: StdRng,
    ) -> BoardResult<Self> {
        let background = config.background_rgb();
        let mut surface = RasterSurface::new(width, height, scale)?;
        let drawing = Drawing::new();
        redraw_all(&mut surface, &drawing, background);

        info!("Board created at {}x{} (scale {})", width, height, scale);
        Ok(Self {
            tools: ToolState::new(config.initial_tool, config.initial_color.clone()),
            mode: config.mode,
            config,
            background,
            drawing,
            surface,
            wheel: ColorWheel::new(Point::default(), 0.0),
            classifier: InputClassifier::new(platform),
            gesture: GestureState::default(),
            rng,
            events: EventBus::new(),
        })
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// The stroke under the pointer, not yet part of the drawing
    pub fn stroke_in_progress(&self) -> Option<&Stroke> {
        self.gesture.recorder.current()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.active.is_some()
    }

    /// Region of the surface repainted since the last call.
    pub fn take_damage(&mut self) -> Option<PixelRect> {
        self.surface.take_damage()
    }

    // ---- pointer input ----

    /// Starts a draw or erase gesture. Returns `false` if the event is not
    /// drawing input or another pointer already owns the board.
    pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
        if self.gesture.active.is_some() {
            trace!("Ignoring pointer {}: gesture in progress", event.pointer_id);
            return false;
        }
        if !self.classifier.should_draw(event.kind) {
            trace!("Ignoring {:?} input", event.kind);
            return false;
        }

        if let Err(e) = self.classifier.platform_mut().capture_pointer(event.pointer_id) {
            warn!("Drawing without pointer capture: {}", e);
        }

        let pressure = self.classifier.pressure(&event);
        let erasing = self.tools.tool.is_eraser();
        if !erasing {
            self.gesture
                .recorder
                .begin_stroke(self.tools.tool, &self.tools.color, event.position, pressure);
        }

        self.gesture.active = Some(Gesture {
            pointer_id: event.pointer_id,
            last_point: event.position,
            erasing,
        });
        true
    }

    /// Extends the active gesture. Returns `true` if the surface changed.
    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        let Some(gesture) = self.gesture.active.as_mut() else {
            return false;
        };
        if gesture.pointer_id != event.pointer_id {
            return false;
        }

        let from = gesture.last_point;
        gesture.last_point = event.position;

        if gesture.erasing {
            if !erase_along(&mut self.drawing, from, event.position, eraser_radius()) {
                return false;
            }
            redraw_all(&mut self.surface, &self.drawing, self.background);
            self.events.emit(BoardEvent::StrokesErased {
                remaining: self.drawing.len(),
            });
        } else {
            let pressure = self.classifier.pressure(&event);
            let Some(segment) = self.gesture.recorder.extend_stroke(event.position, pressure, &mut self.rng)
            else {
                return false;
            };
            render_segment(&mut self.surface, segment);
        }

        true
    }

    pub fn pointer_up(&mut self, pointer_id: u64) {
        self.end_gesture(pointer_id);
    }

    /// Leaving the surface ends the gesture just like lifting the pointer.
    pub fn pointer_leave(&mut self, pointer_id: u64) {
        self.end_gesture(pointer_id);
    }

    fn end_gesture(&mut self, pointer_id: u64) {
        match self.gesture.active {
            Some(gesture) if gesture.pointer_id == pointer_id => self.finish_gesture(),
            _ => {}
        }
    }

    /// Commits whatever the gesture drew and returns to idle.
    fn finish_gesture(&mut self) {
        let Some(gesture) = self.gesture.active.take() else {
            return;
        };
        self.classifier.platform_mut().release_pointer(gesture.pointer_id);

        if self.gesture.recorder.commit_stroke(&mut self.drawing) {
            if let Some(stroke) = self.drawing.strokes().last() {
                debug!(
                    "Committed {} stroke with {} segment(s)",
                    stroke.tool(),
                    stroke.segments().len()
                );
                self.events.emit(BoardEvent::StrokeCommitted {
                    tool: stroke.tool(),
                    segments: stroke.segments().len(),
                });
            }
        }
    }

    // ---- surface ----

    /// Recreates the surface at the new size and replays the drawing onto it.
    /// A stroke in progress is committed first.
    pub fn resize(&mut self, width: f32, height: f32, scale: f32) -> BoardResult<()> {
        if self.surface.size() == (width, height) && self.surface.scale() == scale {
            return Ok(());
        }

        let mut surface = RasterSurface::new(width, height, scale)?;
        self.finish_gesture();
        redraw_all(&mut surface, &self.drawing, self.background);
        self.surface = surface;

        info!("Board resized to {}x{} (scale {})", width, height, scale);
        self.events.emit(BoardEvent::Resized { width, height, scale });
        Ok(())
    }

    /// PNG of the surface as it is now; also sent to subscribers.
    pub fn save(&self) -> BoardResult<Vec<u8>> {
        let png = self.surface.encode_png()?;
        info!("Saved drawing: {} stroke(s), {} bytes", self.drawing.len(), png.len());
        self.events.emit(BoardEvent::Saved { png: png.clone() });
        Ok(png)
    }

    // ---- tools and colours ----

    pub fn tool_state(&self) -> &ToolState {
        &self.tools
    }

    pub fn tool(&self) -> Tool {
        self.tools.tool
    }

    pub fn color(&self) -> &str {
        &self.tools.color
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.config.swatches
    }

    pub fn select_tool(&mut self, tool: Tool) {
        let next = self.tools.select_tool(tool);
        self.apply_tools(next);
    }

    /// Sets the colour; an active eraser switches to the pencil.
    pub fn select_color(&mut self, color: &str) {
        let next = self.tools.select_color(color);
        self.apply_tools(next);
    }

    fn apply_tools(&mut self, next: ToolState) {
        let old = std::mem::replace(&mut self.tools, next);
        if old.tool != self.tools.tool {
            info!("Tool changed: {} -> {}", old.tool, self.tools.tool);
            self.events.emit(BoardEvent::ToolChanged {
                old: old.tool,
                new: self.tools.tool,
            });
        }
        if old.color != self.tools.color {
            info!("Colour changed to {}", self.tools.color);
            self.events.emit(BoardEvent::ColorChanged {
                color: self.tools.color.clone(),
            });
        }
    }

    pub fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }

    pub fn set_wheel_bounds(&mut self, center: Point, radius: f32) {
        self.wheel.set_bounds(center, radius);
    }

    /// Returns `true` if the press landed on the wheel.
    pub fn wheel_pointer_down(&mut self, pos: Point) -> bool {
        match self.wheel.pointer_down(pos) {
            Some(color) => {
                self.select_color(&color);
                true
            }
            None => false,
        }
    }

    pub fn wheel_pointer_move(&mut self, pos: Point) {
        if let Some(color) = self.wheel.pointer_move(pos) {
            self.select_color(&color);
        }
    }

    pub fn wheel_pointer_up(&mut self) {
        self.wheel.pointer_up();
    }

    // ---- host chrome ----

    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BoardMode) {
        if self.mode != mode {
            self.mode = mode;
            info!("Mode changed to {}", mode.label());
            self.events.emit(BoardEvent::ModeChanged(mode));
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// The prompt, only while in buddy mode
    pub fn visible_prompt(&self) -> Option<&str> {
        match self.mode {
            BoardMode::Buddy => Some(&self.config.prompt),
            BoardMode::Freestyle => None,
        }
    }

    pub fn buddy_message(&self) -> &str {
        &self.config.buddy_message
    }

    pub fn request_profile(&self) {
        self.events.emit(BoardEvent::ProfileRequested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PointerKind, StaticPlatform};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn board() -> Board {
        Board::with_rng(
            BoardConfig::default(),
            Box::new(StaticPlatform::desktop()),
            120.0,
            80.0,
            1.0,
            StdRng::seed_from_u64(1),
        )
        .unwrap()
    }

    fn mouse(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(1, PointerKind::Mouse, Point::new(x, y))
    }

    #[test]
    fn second_pointer_cannot_interfere() {
        let mut board = board();
        assert!(board.pointer_down(mouse(10.0, 10.0)));
        assert!(!board.pointer_down(PointerEvent::new(2, PointerKind::Touch, Point::new(50.0, 50.0))));
        assert!(!board.pointer_move(PointerEvent::new(2, PointerKind::Touch, Point::new(60.0, 50.0))));
        board.pointer_up(2);
        assert!(board.is_gesture_active());

        assert!(board.pointer_move(mouse(40.0, 10.0)));
        board.pointer_up(1);
        assert_eq!(board.drawing().len(), 1);
        assert!(!board.is_gesture_active());
    }

    #[test]
    fn refused_pointer_capture_still_draws() {
        let platform = StaticPlatform {
            tablet: false,
            pointer_capture: false,
        };
        let mut board =
            Board::with_rng(BoardConfig::default(), Box::new(platform), 50.0, 50.0, 1.0, StdRng::seed_from_u64(2))
                .unwrap();

        assert!(board.pointer_down(mouse(5.0, 5.0)));
        assert!(board.pointer_move(mouse(25.0, 5.0)));
        board.pointer_up(1);
        assert_eq!(board.drawing().len(), 1);
    }

    #[test]
    fn resize_commits_stroke_in_progress() {
        let mut board = board();
        board.pointer_down(mouse(10.0, 10.0));
        board.pointer_move(mouse(30.0, 10.0));

        board.resize(200.0, 100.0, 2.0).unwrap();
        assert!(!board.is_gesture_active());
        assert_eq!(board.drawing().len(), 1);
        assert_eq!(board.surface().pixel_size(), [400, 200]);

        // late events of the old gesture are ignored
        assert!(!board.pointer_move(mouse(50.0, 10.0)));
        board.pointer_up(1);
        assert_eq!(board.drawing().strokes()[0].segments().len(), 1);
    }

    #[test]
    fn resize_to_same_size_is_a_no_op() {
        let mut board = board();
        board.take_damage();
        board.resize(120.0, 80.0, 1.0).unwrap();
        assert_eq!(board.take_damage(), None);
    }

    #[test]
    fn drawing_damages_only_the_stroke_area() {
        let mut board = board();
        assert_eq!(board.take_damage(), Some(PixelRect { min: [0, 0], max: [120, 80] }));

        board.pointer_down(mouse(10.0, 10.0));
        board.pointer_move(mouse(30.0, 10.0));
        let damage = board.take_damage().unwrap();
        assert!(damage.min[0] <= 8 && damage.max[0] >= 32);
        assert!(damage.max[0] < 120 && damage.max[1] < 80);

        board.pointer_up(1);
        assert_eq!(board.take_damage(), None);
    }

    #[test]
    fn tool_and_color_changes_are_announced() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut board = board();
        let sink = Rc::clone(&events);
        board.subscribe(Box::new(move |event: &BoardEvent| sink.borrow_mut().push(event.clone())));

        board.select_tool(Tool::Eraser);
        board.select_color("#FFEE00");

        assert_eq!(
            *events.borrow(),
            vec![
                BoardEvent::ToolChanged { old: Tool::Pen, new: Tool::Eraser },
                BoardEvent::ToolChanged { old: Tool::Eraser, new: Tool::Pencil },
                BoardEvent::ColorChanged { color: "#FFEE00".to_owned() },
            ]
        );
    }

    #[test]
    fn prompt_only_in_buddy_mode() {
        let mut board = board();
        assert_eq!(board.visible_prompt(), None);
        board.toggle_mode();
        assert_eq!(board.visible_prompt(), Some("dinosaur's birthday"));
    }
}
