// src/gui/components/surface.rs
//
// The embedded page, drawn as a preview frame. Laid out at the reference
// width and shrunk to the panel on every frame, so window resizes rescale it.

use eframe::egui::{self, RichText, Vec2};
use crate::{gui::app::App, layout};

const BASE_TEXT: f32 = 14.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let viewport_h = ui.ctx().screen_rect().height();
    let fit = layout::fit_surface(ui.available_width(), viewport_h);
    let (w, h) = fit.scaled_size();
    let text_size = BASE_TEXT * fit.scale;

    let page = &app.page;

    ui.vertical_centered(|ui| {
        egui::Frame::canvas(ui.style()).show(ui, |ui| {
            ui.set_min_size(Vec2::new(w, h));
            ui.set_max_size(Vec2::new(w, h));

            ui.horizontal(|ui| {
                let state = if page.loading {
                    "loading"
                } else if app.bridge.is_ready() {
                    "ready"
                } else {
                    "idle"
                };
                ui.label(RichText::new(state).small().weak());
                ui.label(RichText::new(&page.source).monospace().size(text_size * 0.85));
            });

            if let Some(err) = &page.error {
                ui.colored_label(ui.visuals().error_fg_color, RichText::new(err).size(text_size));
            }

            if !page.title.is_empty() {
                ui.heading(RichText::new(&page.title).size(text_size * 1.4));
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("surface_outline")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if page.outline.is_empty() && !page.loading {
                        ui.label(RichText::new("(empty document)").weak().size(text_size));
                    }
                    for line in &page.outline {
                        ui.label(RichText::new(line).size(text_size));
                    }
                });
        });

        ui.label(
            RichText::new(format!("scale {:.2}", fit.scale))
                .small()
                .weak(),
        );
    });
}
