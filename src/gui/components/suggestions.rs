// src/gui/components/suggestions.rs
//
// Name entry with the roster ranked against it. Enter or double-click adds
// the highlighted name.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Student");

    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.name_query)
            .hint_text("Type a name")
            .desired_width(f32::INFINITY),
    );
    if resp.changed() {
        app.refresh_suggestions();
    }
    let mut add = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    let has_section = app.section().is_some();
    ui.label("Suggestions");
    egui::ScrollArea::vertical()
        .id_salt("suggestions_scroll")
        .max_height(220.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            for (i, name) in app.suggestions.iter().enumerate() {
                let selected = app.state.gui.selected_suggestion == Some(i);
                let r = ui.selectable_label(selected, name);
                if r.clicked() {
                    app.state.gui.selected_suggestion = Some(i);
                }
                if r.double_clicked() {
                    app.state.gui.selected_suggestion = Some(i);
                    add = true;
                }
            }
            if app.suggestions.is_empty() {
                ui.weak(if has_section { "No matches" } else { "Select a section" });
            }
        });

    if ui.button("Add to Attendance").clicked() {
        add = true;
    }
    if add {
        actions::add_selected(app);
    }
}
