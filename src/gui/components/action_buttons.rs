// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Address bar ---
    let mut go = false;
    ui.horizontal(|ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.address_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(ui.available_width() - 60.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            go = true;
        }
        go |= ui.button("Go").clicked();
    });
    if go {
        actions::navigate(app);
    }

    // --- Output dir ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            logd!("UI: out_dir_text changed → {}", app.state.gui.out_dir_text);
        }
    });

    // --- Actions (Scrape / Export / Dev tools) ---
    let mut clicked: Option<fn(&mut App)> = None;
    ui.horizontal(|ui| {
        let pending = app.bridge.extraction_pending();
        let scrape_btn = ui.add_enabled(!pending, egui::Button::new("Scrape orders"));
        if scrape_btn.clicked() {
            clicked = Some(actions::scrape);
        }
        if pending {
            ui.add(egui::Spinner::new());
        }

        ui.separator();

        if ui.button("Export JSON").clicked() {
            clicked = Some(|app: &mut App| actions::export(app, ExportFormat::Json));
        }
        if ui.button("Export CSV").clicked() {
            clicked = Some(|app: &mut App| actions::export(app, ExportFormat::Csv));
        }

        ui.separator();

        if ui.button("Dev tools").clicked() {
            clicked = Some(actions::open_devtools);
        }
    });

    if let Some(action) = clicked {
        action(app);
    }
}
