use egui::{Color32, Event, Pos2, Rect, TouchPhase};

use crate::NoodleApp;
use crate::board::Board;
use crate::geometry::Point;
use crate::input::{PointerEvent, PointerKind};

const MOUSE_POINTER_ID: u64 = 0;
const TOUCH_POINTER_ID: u64 = 1;

/// Turns egui's raw events into board pointer events.
///
/// egui reports touches as `Touch` events followed by synthesized pointer
/// events, so a pointer press that follows a touch start is treated as touch.
#[derive(Debug, Default)]
pub struct CanvasInput {
    touching: bool,
    force: Option<f32>,
    pressed: Option<u64>,
}

impl CanvasInput {
    fn event(&self, id: u64, pos: Pos2, rect: Rect) -> PointerEvent {
        // egui has no stylus pointer type, so this never yields `PointerKind::Pen`.
        // A stylus egui reports as a touch is refused on tablets like a finger.
        let kind = if id == TOUCH_POINTER_ID { PointerKind::Touch } else { PointerKind::Mouse };
        let event = PointerEvent::new(id, kind, Point::new(pos.x - rect.min.x, pos.y - rect.min.y));
        match (kind, self.force) {
            (PointerKind::Touch, Some(force)) => event.with_pressure(force),
            _ => event,
        }
    }

    /// Feeds this frame's events to `board`; returns `true` if it changed.
    pub fn process(&mut self, events: &[Event], rect: Rect, board: &mut Board) -> bool {
        let mut changed = false;
        for event in events {
            match event {
                Event::Touch { phase, force, .. } => {
                    self.force = *force;
                    match phase {
                        TouchPhase::Start => self.touching = true,
                        TouchPhase::End | TouchPhase::Cancel => self.touching = false,
                        TouchPhase::Move => {}
                    }
                }
                Event::PointerButton { pos, button: egui::PointerButton::Primary, pressed: true, .. } => {
                    if rect.contains(*pos) {
                        let id = if self.touching { TOUCH_POINTER_ID } else { MOUSE_POINTER_ID };
                        if board.pointer_down(self.event(id, *pos, rect)) {
                            self.pressed = Some(id);
                        }
                    }
                }
                Event::PointerMoved(pos) => {
                    if let Some(id) = self.pressed {
                        if rect.contains(*pos) {
                            changed |= board.pointer_move(self.event(id, *pos, rect));
                        } else {
                            board.pointer_leave(id);
                            self.pressed = None;
                        }
                    }
                }
                Event::PointerButton { button: egui::PointerButton::Primary, pressed: false, .. } => {
                    if let Some(id) = self.pressed.take() {
                        board.pointer_up(id);
                    }
                }
                Event::PointerGone => {
                    if let Some(id) = self.pressed.take() {
                        board.pointer_leave(id);
                    }
                }
                _ => {}
            }
        }
        changed
    }
}

pub fn central_panel(app: &mut NoodleApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(prompt) = app.board().visible_prompt() {
            let prompt = prompt.to_owned();
            ui.vertical_centered(|ui| ui.heading(prompt));
        }

        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        app.fit_board(canvas_rect, ctx.pixels_per_point());
        let events = ctx.input(|i| i.events.clone());
        if app.handle_canvas_input(&events, canvas_rect) {
            ctx.request_repaint();
        }

        let texture = app.sync_texture(ctx);
        painter.image(
            texture,
            canvas_rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    });
}
