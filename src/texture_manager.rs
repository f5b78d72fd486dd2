use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::board::Board;
use crate::renderer::PixelRect;

/// Mirrors the board's raster into an egui texture. Only the region the
/// board repainted since the last frame is uploaded.
#[derive(Default)]
pub struct SurfaceTexture {
    handle: Option<TextureHandle>,
    size: [usize; 2],
}

impl SurfaceTexture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, ctx: &Context, board: &mut Board) -> TextureId {
        let damage = board.take_damage();
        let surface = board.surface();
        let size = surface.pixel_size();

        match &mut self.handle {
            Some(handle) if self.size == size => {
                if let Some(rect) = damage {
                    if covers(rect, size) {
                        handle.set(ColorImage::from_rgba_unmultiplied(size, surface.pixels()), TextureOptions::LINEAR);
                    } else {
                        let patch = ColorImage::from_rgba_unmultiplied(rect.size(), &surface.region_pixels(rect));
                        handle.set_partial(rect.min, patch, TextureOptions::LINEAR);
                    }
                }
                handle.id()
            }
            Some(handle) => {
                handle.set(ColorImage::from_rgba_unmultiplied(size, surface.pixels()), TextureOptions::LINEAR);
                self.size = size;
                handle.id()
            }
            None => {
                let image = ColorImage::from_rgba_unmultiplied(size, surface.pixels());
                let handle = ctx.load_texture("noodle_board_surface", image, TextureOptions::LINEAR);
                let id = handle.id();
                self.handle = Some(handle);
                self.size = size;
                id
            }
        }
    }
}

/// Whether `rect` is the whole raster of `size`
fn covers(rect: PixelRect, size: [usize; 2]) -> bool {
    rect.min == [0, 0] && rect.max == size
}
