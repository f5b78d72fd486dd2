use egui::{Button, Stroke, Vec2};

use crate::NoodleApp;
use crate::color::hex_to_rgb;
use crate::tool::Tool;
use crate::widgets::{color_wheel, to_color32};

const SWATCH_SIZE: f32 = 36.0;
const WHEEL_DIAMETER: f32 = 64.0;

pub fn tools_panel(app: &mut NoodleApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(WHEEL_DIAMETER + 24.0)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let active = app.board().tool();
                for tool in Tool::ALL {
                    if ui.selectable_label(active == tool, tool.label()).clicked() {
                        log::info!("Tool selected from UI: {}", tool);
                        app.board_mut().select_tool(tool);
                    }
                }

                ui.separator();

                let swatches = app.board().swatches().to_vec();
                for swatch in swatches {
                    let Some(rgb) = hex_to_rgb(&swatch.color) else {
                        log::warn!("Skipping swatch {} with bad colour {:?}", swatch.label, swatch.color);
                        continue;
                    };
                    let selected = app.board().color().eq_ignore_ascii_case(&swatch.color);
                    let outline = if selected {
                        Stroke::new(3.0, egui::Color32::BLACK)
                    } else {
                        Stroke::NONE
                    };
                    let button = Button::new("")
                        .fill(to_color32(rgb))
                        .stroke(outline)
                        .min_size(Vec2::splat(SWATCH_SIZE));
                    if ui.add(button).on_hover_text(&swatch.label).clicked() {
                        app.board_mut().select_color(&swatch.color);
                    }
                }

                ui.separator();
                color_wheel(ui, app.board_mut(), WHEEL_DIAMETER);
            });
        });
}
