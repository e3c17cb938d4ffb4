// src/gui/components/attendance_list.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let entries: Vec<String> = app
        .section()
        .map(|s| app.ws.session.entries(s).to_vec())
        .unwrap_or_default();

    ui.heading(format!("In Attendance ({})", entries.len()));
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("attendance_scroll")
        .max_height((ui.available_height() - 40.0).max(0.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            for (i, name) in entries.iter().enumerate() {
                let selected = app.state.gui.selected_attendee == Some(i);
                if ui.selectable_label(selected, name).clicked() {
                    app.state.gui.selected_attendee = Some(i);
                }
            }
        });

    ui.separator();
    if ui
        .add_enabled(!entries.is_empty(), egui::Button::new("Remove Selected"))
        .clicked()
    {
        actions::remove_selected(app);
    }
}
