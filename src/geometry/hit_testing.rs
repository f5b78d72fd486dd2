use super::Point;
use crate::stroke::Stroke;

/// Spacing of eraser samples along its travel path, in surface units.
pub const ERASER_SAMPLE_SPACING: f32 = 4.0;

/// Distance from `point` to the closest position on the segment `start..end`.
pub fn point_to_segment_dist(point: Point, start: Point, end: Point) -> f32 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return point.distance(start);
    }

    let t = (((point.x - start.x) * dx + (point.y - start.y) * dy) / len_sq).clamp(0.0, 1.0);
    point.distance(Point::new(start.x + t * dx, start.y + t * dy))
}

/// True if the eraser, travelling from `from` to `to`, touches any segment of
/// `stroke`. A segment counts as touched within `radius + width / 2`.
pub fn stroke_hit_test(stroke: &Stroke, from: Point, to: Point, radius: f32) -> bool {
    let steps = (from.distance(to) / ERASER_SAMPLE_SPACING).ceil().max(1.0) as usize;

    (0..=steps).any(|i| {
        let sample = from.lerp(to, i as f32 / steps as f32);
        stroke.segments().iter().any(|segment| {
            point_to_segment_dist(sample, segment.from, segment.to) <= radius + segment.width / 2.0
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Paint, Rgb};
    use crate::stroke::{Segment, Stroke};
    use crate::tool::{LineCap, Tool};

    fn horizontal_stroke(width: f32) -> Stroke {
        let segment = Segment {
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 0.0),
            width,
            opacity: 1.0,
            cap: LineCap::Round,
            paint: Paint::Solid(Rgb::BLACK),
            grain: None,
        };
        Stroke::from_segments(Tool::Pen, "#000000", vec![segment])
    }

    #[test]
    fn distance_to_interior_projection() {
        let d = point_to_segment_dist(Point::new(50.0, 3.0), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn distance_clamps_to_endpoints() {
        let d = point_to_segment_dist(Point::new(-3.0, 4.0), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((d - 5.0).abs() < 1e-5);

        let d = point_to_segment_dist(Point::new(106.0, 8.0), Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((d - 10.0).abs() < 1e-5);
    }

    #[test]
    fn zero_length_segment_is_a_point() {
        let p = Point::new(3.0, 4.0);
        let d = point_to_segment_dist(p, Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn stationary_eraser_respects_half_width() {
        let stroke = horizontal_stroke(4.0);
        // radius 1 + half width 2 = 3
        assert!(stroke_hit_test(&stroke, Point::new(50.0, 3.0), Point::new(50.0, 3.0), 1.0));
        assert!(!stroke_hit_test(&stroke, Point::new(50.0, 3.5), Point::new(50.0, 3.5), 1.0));
    }

    #[test]
    fn fast_eraser_swipe_is_sampled_along_its_path() {
        let stroke = horizontal_stroke(2.0);
        // Both endpoints are far from the stroke, the path between them crosses it.
        assert!(stroke_hit_test(&stroke, Point::new(50.0, -40.0), Point::new(50.0, 40.0), 1.0));
        assert!(!stroke_hit_test(&stroke, Point::new(150.0, -40.0), Point::new(150.0, 40.0), 1.0));
    }
}
