// src/gui/actions/export.rs
use crate::{config::options::ExportFormat, gui::app::App};

pub fn export(app: &mut App, format: ExportFormat) {
    // apply the text field first; it's only mapped onto options on use
    app.state.options.export.set_dir(&app.state.gui.out_dir_text);

    if app.presenter.orders().is_empty() {
        logd!("Export: Clicked with no orders; writing an empty {:?}", format);
    }

    let status_msg = match app.presenter.export(&app.state.options.export, format) {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            format!("Exported {} order(s) → {}", app.presenter.orders().len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
