// src/gui/components/tabs.rs
//
// Renders the two top tabs and performs the switch itself.
// Switching only changes which central view is drawn; the page context and
// the order table keep running behind whichever tab is hidden.

use eframe::egui;
use crate::{config::state::Tab, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_tab();
        for tab in Tab::ALL {
            let selected = tab == cur;
            let label = match tab {
                Tab::Catalog => format!("{} ({})", tab.title(), app.presenter.table().nrows()),
                Tab::Store => s!(tab.title()),
            };

            if ui.selectable_label(selected, label).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, tab);
                app.set_tab(tab);
            }
        }
    });
}
