use egui::{Color32, Pos2, Response, Sense, Ui, Vec2};

use crate::board::Board;
use crate::color::{Rgb, hex_to_rgb};
use crate::geometry::Point;
use crate::tool::color_wheel::color_at;

const RINGS: usize = 8;
const SECTORS: usize = 36;

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

fn point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Hue/saturation disc that feeds its picks to the board.
pub fn color_wheel(ui: &mut Ui, board: &mut Board, diameter: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::click_and_drag());
    let center = rect.center();
    let radius = diameter / 2.0;
    board.set_wheel_bounds(point(center), radius);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let dot = radius / RINGS as f32;
        for ring in 0..RINGS {
            let r = (ring as f32 + 0.5) * dot;
            for sector in 0..SECTORS {
                let angle = (sector as f32 / SECTORS as f32) * std::f32::consts::TAU;
                let pos = center + Vec2::angled(angle) * r;
                if let Some(rgb) = color_at(point(pos), point(center), radius).as_deref().and_then(hex_to_rgb) {
                    painter.circle_filled(pos, dot * 0.9, to_color32(rgb));
                }
            }
        }
        if let Some(rgb) = hex_to_rgb(board.color()) {
            painter.circle_filled(center, dot * 0.8, to_color32(rgb));
        }
    }

    if let Some(pos) = response.interact_pointer_pos() {
        if response.drag_started() || response.clicked() {
            board.wheel_pointer_down(point(pos));
        } else if response.dragged() {
            board.wheel_pointer_move(point(pos));
        }
    }
    if response.drag_stopped() || response.clicked() {
        board.wheel_pointer_up();
    }

    response.on_hover_text("Choose color")
}
