use log::debug;

use crate::document::Drawing;
use crate::geometry::{Point, stroke_hit_test};

/// Removes every stroke the eraser touched while moving from `from` to `to`.
///
/// Strokes go all at once or not at all; their segments are never trimmed.
/// Returns `true` if anything was removed, in which case the surface must be
/// redrawn from the drawing.
pub fn erase_along(drawing: &mut Drawing, from: Point, to: Point, radius: f32) -> bool {
    let removed = drawing.remove_where(|stroke| stroke_hit_test(stroke, from, to, radius));
    if removed > 0 {
        debug!("Erased {} stroke(s), {} left", removed, drawing.len());
    }
    removed > 0
}
