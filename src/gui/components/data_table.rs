// src/gui/components/data_table.rs
//
// Draws the orders table. Purely a view over the presenter's table; the
// presenter rebuilds it wholesale on every render.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const COLUMN_WIDTHS: [f32; 3] = [320.0, 300.0, 200.0];
const COUNT_COL: usize = 3;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = app.presenter.table();

    if table.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No orders yet. Open the order list and press “Scrape orders”.").weak());
        });
        return;
    }

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for w in COLUMN_WIDTHS {
        builder = builder.column(Column::initial(w).at_least(40.0).clip(true));
    }
    builder = builder.column(Column::remainder().at_least(50.0));

    builder
        .header(24.0, |mut header| {
            for h in table.headers() {
                header.col(|ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.nrows(), |mut row| {
                let Some(cells) = table.rows().get(row.index()) else { return };
                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        match ci {
                            1 if !cell.is_empty() => {
                                ui.hyperlink_to(cell, cell);
                            }
                            COUNT_COL => {
                                ui.centered_and_justified(|ui| { ui.label(cell); });
                            }
                            _ => {
                                ui.label(cell);
                            }
                        }
                    });
                }
            });
        });
}
