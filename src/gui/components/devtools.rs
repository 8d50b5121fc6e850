// src/gui/components/devtools.rs
//
// Floating dev tools window: selector hit counts for the current document
// plus a slice of its HTML. The report arrives asynchronously from the page
// context; "Refresh" asks for a new one.

use eframe::egui::{self, RichText};
use crate::gui::{actions, app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.state.gui.devtools_open {
        return;
    }

    let mut open = true;
    let mut refresh = false;

    egui::Window::new("Dev tools")
        .open(&mut open)
        .default_width(640.0)
        .default_height(480.0)
        .show(ctx, |ui| {
            let Some(report) = app.report.as_ref() else {
                ui.label(RichText::new("Waiting for the page…").weak());
                return;
            };

            ui.horizontal(|ui| {
                ui.label(format!("“{}”", report.title));
                ui.label(RichText::new(format!("{} bytes", report.html_bytes)).weak());
                refresh = ui.button("Refresh").clicked();
            });
            ui.separator();

            egui::Grid::new("devtools_hits").striped(true).show(ui, |ui| {
                ui.strong("Containers");
                ui.strong(format!("{}", report.container_total()));
                ui.end_row();
                for c in &report.containers {
                    ui.monospace(&c.selector);
                    ui.label(c.hits.to_string());
                    ui.end_row();
                }
                for (field, hits) in &report.fields {
                    ui.strong(*field);
                    ui.label("");
                    ui.end_row();
                    for h in hits {
                        ui.monospace(&h.selector);
                        ui.label(h.hits.to_string());
                        ui.end_row();
                    }
                }
            });

            ui.separator();
            egui::ScrollArea::vertical()
                .id_salt("devtools_html")
                .max_height(240.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(&report.html_preview).monospace().small());
                });
        });

    app.state.gui.devtools_open = open;
    if refresh {
        actions::open_devtools(app);
    }
}
