// src/gui/actions/roster.rs
use std::path::Path;

use crate::gui::app::App;
use super::{gated, report_error, Pending};

pub fn add_roster(app: &mut App) {
    let source = app.state.gui.new_roster_path.trim().to_owned();
    let section = app.state.gui.new_section_name.trim().to_owned();
    if source.is_empty() {
        app.notice("Warning", "Please enter the path of a roster file.");
        return;
    }

    match app.ws.rosters.add_roster(Path::new(&source), &section) {
        Ok(names) => {
            logf!("UI: Added roster {:?} ({} names) from {}", section, names.len(), source);
            app.state.gui.new_roster_path.clear();
            app.state.gui.new_section_name.clear();
            app.reload_sections();
            super::select_section(app, section.clone());
            app.status(format!("Added {} ({} students)", section, names.len()));
        }
        Err(e) => report_error(app, &e),
    }
}

pub fn remove_roster(app: &mut App, section: String, confirmed: bool) {
    let pending = Pending::RemoveRoster(section.clone());
    let removed = gated(app, pending, confirmed, |ws, confirm| {
        ws.rosters.remove_roster(&section, confirm)
    });
    if removed.is_none() {
        return;
    }

    // reload_sections() drops the selection along with the roster
    app.ws.session.clear(&section);
    app.reload_sections();
    if app.last_report.as_ref().is_some_and(|r| r.section == section) {
        app.last_report = None;
    }
    app.status(format!("Removed {section}"));
}
