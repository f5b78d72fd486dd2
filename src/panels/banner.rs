use egui::RichText;

use crate::NoodleApp;

const BANNER_YELLOW: egui::Color32 = egui::Color32::from_rgb(0xff, 0xd0, 0x00);

pub fn banner(app: &mut NoodleApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("banner")
        .frame(egui::Frame::none().fill(BANNER_YELLOW).inner_margin(12.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("noodle").size(36.0).color(egui::Color32::BLACK));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("My profile").clicked() {
                        app.board().request_profile();
                    }
                    let mode = app.board().mode();
                    if ui.button(mode.label()).on_hover_text("Switch mode").clicked() {
                        app.board_mut().toggle_mode();
                    }
                });
            });
        });
}

pub fn bottom_bar(app: &mut NoodleApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button(RichText::new("save").size(24.0)).clicked() {
                app.save_drawing();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(app.board().buddy_message()).size(20.0));
            });
        });
    });
}
