//! CPU raster the board draws into.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage, imageops};

use crate::color::Rgb;
use crate::error::{BoardError, BoardResult};
use crate::geometry::{Point, point_to_segment_dist};
use crate::tool::LineCap;

/// Something strokes can be painted onto. Coordinates are surface units;
/// implementations apply their own device scale.
pub trait Surface {
    /// Device pixels per surface unit
    fn scale(&self) -> f32;

    fn clear(&mut self, color: Rgb);

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, cap: LineCap, color: Rgb, alpha: f32);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: f32);
}

/// Device-pixel rectangle, `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub min: [usize; 2],
    pub max: [usize; 2],
}

impl PixelRect {
    pub fn size(&self) -> [usize; 2] {
        [self.max[0] - self.min[0], self.max[1] - self.min[1]]
    }

    pub fn union(self, other: PixelRect) -> PixelRect {
        PixelRect {
            min: [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            max: [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        }
    }
}

/// RGBA raster sized `round(width * scale) x round(height * scale)`.
///
/// Remembers the region painted since the last [`RasterSurface::take_damage`]
/// so a host texture can be patched instead of re-uploaded.
#[derive(Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    width: f32,
    height: f32,
    scale: f32,
    damage: Option<PixelRect>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("scale", &self.scale)
            .field("pixels", &self.image.dimensions())
            .field("damage", &self.damage)
            .finish()
    }
}

impl RasterSurface {
    pub fn new(width: f32, height: f32, scale: f32) -> BoardResult<Self> {
        let px_width = (width * scale).round();
        let px_height = (height * scale).round();
        if !px_width.is_finite() || !px_height.is_finite() || px_width < 1.0 || px_height < 1.0 {
            return Err(BoardError::InvalidSurfaceSize { width, height, scale });
        }

        Ok(Self {
            image: RgbaImage::new(px_width as u32, px_height as u32),
            width,
            height,
            scale,
            damage: None,
        })
    }

    /// Size in surface units
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Size in device pixels
    pub fn pixel_size(&self) -> [usize; 2] {
        let (w, h) = self.image.dimensions();
        [w as usize, h as usize]
    }

    /// Unpremultiplied RGBA bytes, row major
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Painted region since the previous call, `None` if nothing changed.
    pub fn take_damage(&mut self) -> Option<PixelRect> {
        self.damage.take()
    }

    /// Row-major RGBA bytes of `rect`, clipped to the raster.
    pub fn region_pixels(&self, rect: PixelRect) -> Vec<u8> {
        let [w, h] = self.pixel_size();
        let x = rect.min[0].min(w);
        let y = rect.min[1].min(h);
        let width = rect.max[0].min(w).saturating_sub(x);
        let height = rect.max[1].min(h).saturating_sub(y);
        imageops::crop_imm(&self.image, x as u32, y as u32, width as u32, height as u32)
            .to_image()
            .into_raw()
    }

    fn mark_damaged(&mut self, rect: PixelRect) {
        self.damage = Some(match self.damage {
            Some(damage) => damage.union(rect),
            None => rect,
        });
    }

    /// Lossless PNG of the full raster
    pub fn encode_png(&self) -> BoardResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Paints a capsule around `a..b` (device pixels) with antialiased edges.
    fn fill_capsule(&mut self, a: Point, b: Point, half_width: f32, color: Rgb, alpha: f32) {
        if alpha <= 0.0 || half_width <= 0.0 {
            return;
        }

        let (w, h) = self.image.dimensions();
        let reach = half_width + 1.0;
        let min_x = (a.x.min(b.x) - reach).floor().max(0.0) as u32;
        let min_y = (a.y.min(b.y) - reach).floor().max(0.0) as u32;
        let max_x = ((a.x.max(b.x) + reach).ceil().max(0.0) as u32).min(w);
        let max_y = ((a.y.max(b.y) + reach).ceil().max(0.0) as u32).min(h);
        if min_x >= max_x || min_y >= max_y {
            return;
        }
        self.mark_damaged(PixelRect {
            min: [min_x as usize, min_y as usize],
            max: [max_x as usize, max_y as usize],
        });

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (half_width + 0.5 - point_to_segment_dist(center, a, b)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    blend(self.image.get_pixel_mut(x, y), color, alpha * coverage);
                }
            }
        }
    }
}

/// Source-over compositing of an unpremultiplied colour
fn blend(dst: &mut Rgba<u8>, color: Rgb, alpha: f32) {
    let src_a = alpha.clamp(0.0, 1.0);
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }

    let mix = |src: u8, dst: u8| {
        let value = (src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    *dst = Rgba([
        mix(color.r, dst.0[0]),
        mix(color.g, dst.0[1]),
        mix(color.b, dst.0[2]),
        (out_a * 255.0).round() as u8,
    ]);
}

impl Surface for RasterSurface {
    fn scale(&self) -> f32 {
        self.scale
    }

    fn clear(&mut self, color: Rgb) {
        let fill = Rgba([color.r, color.g, color.b, 255]);
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
        self.mark_damaged(PixelRect {
            min: [0, 0],
            max: self.pixel_size(),
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, cap: LineCap, color: Rgb, alpha: f32) {
        let s = self.scale;
        match cap {
            LineCap::Round => self.fill_capsule(from.scaled(s), to.scaled(s), width * s / 2.0, color, alpha),
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: f32) {
        let c = center.scaled(self.scale);
        self.fill_capsule(c, c, radius * self.scale, color, alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_follows_device_scale() {
        let surface = RasterSurface::new(100.0, 50.0, 2.0).unwrap();
        assert_eq!(surface.pixel_size(), [200, 100]);
        assert_eq!(surface.size(), (100.0, 50.0));
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(matches!(
            RasterSurface::new(0.0, 50.0, 1.0),
            Err(BoardError::InvalidSurfaceSize { .. })
        ));
    }

    #[test]
    fn opaque_line_covers_its_centre() {
        let mut surface = RasterSurface::new(20.0, 20.0, 1.0).unwrap();
        surface.clear(Rgb::WHITE);
        surface.stroke_line(
            Point::new(2.0, 10.0),
            Point::new(18.0, 10.0),
            4.0,
            LineCap::Round,
            Rgb::new(255, 0, 0),
            1.0,
        );

        assert_eq!(surface.pixel(10, 9), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(10, 2), Some([255, 255, 255, 255]));
    }

    #[test]
    fn translucent_paint_blends_with_background() {
        let mut surface = RasterSurface::new(10.0, 10.0, 1.0).unwrap();
        surface.clear(Rgb::WHITE);
        surface.fill_circle(Point::new(5.0, 5.0), 3.0, Rgb::BLACK, 0.5);

        let [r, g, b, a] = surface.pixel(5, 5).unwrap();
        assert_eq!(a, 255);
        assert!((127..=128).contains(&r));
        assert_eq!((r, r), (g, b));
    }

    #[test]
    fn png_has_signature() {
        let mut surface = RasterSurface::new(4.0, 4.0, 1.0).unwrap();
        surface.clear(Rgb::WHITE);
        let bytes = surface.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn clear_damages_the_whole_raster_once() {
        let mut surface = RasterSurface::new(30.0, 20.0, 2.0).unwrap();
        assert_eq!(surface.take_damage(), None);

        surface.clear(Rgb::WHITE);
        assert_eq!(surface.take_damage(), Some(PixelRect { min: [0, 0], max: [60, 40] }));
        assert_eq!(surface.take_damage(), None);
    }

    #[test]
    fn painting_damages_only_its_neighbourhood() {
        let mut surface = RasterSurface::new(100.0, 100.0, 1.0).unwrap();
        surface.clear(Rgb::WHITE);
        surface.take_damage();

        surface.fill_circle(Point::new(10.0, 10.0), 2.0, Rgb::BLACK, 1.0);
        surface.fill_circle(Point::new(20.0, 15.0), 2.0, Rgb::BLACK, 1.0);
        let damage = surface.take_damage().unwrap();

        assert!(damage.min[0] <= 8 && damage.min[1] <= 8);
        assert!(damage.max[0] >= 22 && damage.max[1] >= 17);
        assert!(damage.max[0] <= 24 && damage.max[1] <= 19);

        let [w, h] = damage.size();
        let bytes = surface.region_pixels(damage);
        assert_eq!(bytes.len(), w * h * 4);
        let centre = ((10 - damage.min[1]) * w + (10 - damage.min[0])) * 4;
        assert_eq!(&bytes[centre..centre + 4], &[0, 0, 0, 255]);
    }

    #[test]
    fn painting_off_the_raster_is_not_damage() {
        let mut surface = RasterSurface::new(10.0, 10.0, 1.0).unwrap();
        surface.fill_circle(Point::new(-50.0, -50.0), 2.0, Rgb::BLACK, 1.0);
        assert_eq!(surface.take_damage(), None);
    }
}
