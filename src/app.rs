use std::path::Path;

use egui::{Rect, TextureId};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::{BoardConfig, BoardMode};
use crate::error::BoardResult;
use crate::event::BoardEvent;
use crate::input::PlatformCapabilities;
use crate::panels::{self, CanvasInput};
use crate::texture_manager::SurfaceTexture;
use crate::tool::Tool;
use crate::util::time;

/// Toolbar choices restored on the next start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppSettings {
    pub tool: Tool,
    pub color: String,
    pub mode: BoardMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        let config = BoardConfig::default();
        Self {
            tool: config.initial_tool,
            color: config.initial_color,
            mode: config.mode,
        }
    }
}

pub struct NoodleApp {
    board: Board,
    texture: SurfaceTexture,
    canvas_input: CanvasInput,
}

impl NoodleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: BoardConfig) -> BoardResult<Self> {
        let settings: Option<AppSettings> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));

        let save_dir = config.save_dir.clone();
        // Laid out properly on the first frame
        let mut board = Board::new(config, platform(), 1.0, 1.0, cc.egui_ctx.pixels_per_point())?;
        if let Some(settings) = settings {
            info!("Restoring {} / {}", settings.tool, settings.color);
            board.select_color(&settings.color);
            board.select_tool(settings.tool);
            board.set_mode(settings.mode);
        }
        board.subscribe(Box::new(move |event: &BoardEvent| on_board_event(&save_dir, event)));

        Ok(Self {
            board,
            texture: SurfaceTexture::new(),
            canvas_input: CanvasInput::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Keeps the board the size of its on-screen rectangle.
    pub fn fit_board(&mut self, rect: Rect, pixels_per_point: f32) {
        if let Err(e) = self.board.resize(rect.width(), rect.height(), pixels_per_point) {
            warn!("Keeping previous surface: {}", e);
        }
    }

    pub fn handle_canvas_input(&mut self, events: &[egui::Event], rect: Rect) -> bool {
        self.canvas_input.process(events, rect, &mut self.board)
    }

    pub fn sync_texture(&mut self, ctx: &egui::Context) -> TextureId {
        self.texture.sync(ctx, &mut self.board)
    }

    /// Encodes the board; the `Saved` handler writes the file.
    pub fn save_drawing(&mut self) {
        if let Err(e) = self.board.save() {
            warn!("Save failed: {}", e);
        }
    }

    fn settings(&self) -> AppSettings {
        AppSettings {
            tool: self.board.tool(),
            color: self.board.color().to_owned(),
            mode: self.board.mode(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform() -> Box<dyn PlatformCapabilities> {
    Box::new(crate::input::StaticPlatform::desktop())
}

#[cfg(target_arch = "wasm32")]
fn platform() -> Box<dyn PlatformCapabilities> {
    match crate::input::UserAgentPlatform::from_browser() {
        Some(platform) => Box::new(platform),
        None => Box::new(crate::input::StaticPlatform::default()),
    }
}

fn on_board_event(save_dir: &Path, event: &BoardEvent) {
    match event {
        BoardEvent::Saved { png } => {
            let path = save_dir.join(format!("noodle-{}.png", time::timestamp_secs()));
            match std::fs::write(&path, png) {
                Ok(()) => info!("Wrote {}", path.display()),
                Err(e) => warn!("Could not write {}: {}", path.display(), e),
            }
        }
        BoardEvent::ProfileRequested => info!("Profile requested"),
        _ => {}
    }
}

impl eframe::App for NoodleApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::banner(self, ctx);
        panels::bottom_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
