// src/gui/actions/attendance.rs
use crate::{config::state::ReportMode, gui::app::App};
use super::report_error;

pub fn select_section(app: &mut App, section: String) {
    if app.section() == Some(section.as_str()) {
        return;
    }
    logf!("UI: Section → {:?}", section);
    app.state.gui.reset_for_section(Some(section));
    if app.state.gui.mode == ReportMode::ModifyExisting {
        app.state.gui.date_text.clear();
    }
    app.refresh_reports();
    app.refresh_suggestions();
}

pub fn set_mode(app: &mut App, mode: ReportMode) {
    if app.state.gui.mode == mode {
        return;
    }
    logf!("UI: Mode → {:?}", mode);
    app.state.gui.mode = mode;
    app.state.gui.selected_report = None;
    app.state.gui.date_text.clear();
    app.refresh_reports();
}

/// Load a saved record into the list, replacing what was there.
pub fn select_report(app: &mut App, date: String) {
    let Some(section) = app.section().map(str::to_owned) else {
        app.notice("Warning", "Please select a section first.");
        return;
    };

    match app.ws.session.load(&section, &date) {
        Ok(true) => {
            app.state.gui.date_text = date.clone();
            app.state.gui.selected_report = Some(date.clone());
            app.state.gui.selected_attendee = None;
            app.status(format!(
                "Loaded {} on {} ({} present)",
                section,
                date,
                app.ws.session.entries(&section).len()
            ));
        }
        Ok(false) => {
            app.notice("Warning", format!("No saved report for {section} on {date}."));
            app.refresh_reports();
        }
        Err(e) => report_error(app, &e),
    }
}

pub fn add_selected(app: &mut App) {
    let Some(section) = app.section().map(str::to_owned) else {
        app.notice("Warning", "Please select a section first.");
        return;
    };
    let picked = app
        .state
        .gui
        .selected_suggestion
        .and_then(|i| app.suggestions.get(i))
        .cloned();
    let Some(name) = picked else {
        app.notice("Warning", "Please select a name from the suggestions.");
        return;
    };

    if app.ws.session.add(&section, &name) {
        app.status(format!("Added {name}"));
    } else {
        app.status(format!("{name} is already in attendance"));
    }
    app.state.gui.name_query.clear();
    app.refresh_suggestions();
}

pub fn remove_selected(app: &mut App) {
    let Some(section) = app.section().map(str::to_owned) else { return };
    let picked = app
        .state
        .gui
        .selected_attendee
        .and_then(|i| app.ws.session.entries(&section).get(i))
        .cloned();
    let Some(name) = picked else {
        app.notice("Warning", "Please select a name to remove.");
        return;
    };

    app.ws.session.remove(&section, &name);
    app.state.gui.selected_attendee = None;
    app.status(format!("Removed {name}"));
}
