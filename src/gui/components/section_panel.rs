// src/gui/components/section_panel.rs
//
// Left panel: section picker, roster add/remove, report mode and date, and
// the two gated buttons (save, frequency report).

use eframe::egui;

use crate::{
    config::{consts::DATE_HINT, state::ReportMode},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Section");

    let current = app.section().unwrap_or("Select a section").to_owned();
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("section_combo")
        .width(ui.available_width())
        .selected_text(current)
        .show_ui(ui, |ui| {
            for (name, roster) in &app.sections {
                let selected = app.section() == Some(name.as_str());
                let label = format!("{name} ({})", roster.len());
                if ui.selectable_label(selected, label).clicked() {
                    picked = Some(name.clone());
                }
            }
        });
    if let Some(section) = picked {
        actions::select_section(app, section);
    }

    let has_section = app.section().is_some();
    if ui
        .add_enabled(has_section, egui::Button::new("Remove Section's Roster"))
        .clicked()
    {
        if let Some(section) = app.section().map(str::to_owned) {
            actions::remove_roster(app, section, false);
        }
    }

    ui.separator();
    ui.label("Add New Section's Roster");
    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.new_roster_path)
            .hint_text("path/to/roster.txt"),
    );
    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.new_section_name)
            .hint_text("Section name"),
    );
    if ui.button("Add Roster").clicked() {
        actions::add_roster(app);
    }

    ui.separator();
    let mut mode = app.state.gui.mode;
    for m in [ReportMode::CreateNew, ReportMode::ModifyExisting] {
        ui.radio_value(&mut mode, m, m.label());
    }
    actions::set_mode(app, mode);

    match app.state.gui.mode {
        ReportMode::CreateNew => {
            ui.horizontal(|ui| {
                ui.label("Date:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.state.gui.date_text)
                        .hint_text(DATE_HINT)
                        .desired_width(120.0),
                );
            });
        }
        ReportMode::ModifyExisting => {
            let shown = app
                .state
                .gui
                .selected_report
                .clone()
                .unwrap_or_else(|| s!("Select a report"));
            let mut picked: Option<String> = None;
            ui.add_enabled_ui(has_section, |ui| {
                egui::ComboBox::from_id_salt("report_combo")
                    .selected_text(shown)
                    .show_ui(ui, |ui| {
                        for date in &app.reports {
                            let selected = app.state.gui.selected_report.as_ref() == Some(date);
                            if ui.selectable_label(selected, date).clicked() {
                                picked = Some(date.clone());
                            }
                        }
                    });
            });
            if has_section && app.reports.is_empty() {
                ui.weak("No saved reports for this section");
            }
            if let Some(date) = picked {
                actions::select_report(app, date);
            }
        }
    }

    ui.add_space(8.0);
    if ui.button("Save Attendance Report").clicked() {
        let section = app.section().unwrap_or_default().to_owned();
        let date = app.state.gui.date_text.clone();
        actions::save(app, section, date, false);
    }
    if ui.button("Generate Frequency Report").clicked() {
        match app.section().map(str::to_owned) {
            Some(section) => actions::frequency(app, section, false),
            None => app.notice("Warning", "Please select a section first."),
        }
    }
}
