// src/gui/actions/report.rs
use crate::gui::app::App;
use super::{gated, Pending};

pub fn save(app: &mut App, section: String, date: String, confirmed: bool) {
    let pending = Pending::Save { section: section.clone(), date: date.clone() };
    let Some(path) = gated(app, pending, confirmed, |ws, confirm| {
        ws.session.save(&section, &date, confirm)
    }) else {
        return;
    };

    app.state.gui.selected_attendee = None;
    app.refresh_reports();
    app.notice(
        "Success",
        format!("Attendance report saved to {}", path.display()),
    );
}

pub fn frequency(app: &mut App, section: String, confirmed: bool) {
    let pending = Pending::Frequency(section.clone());
    let Some((path, report)) = gated(app, pending, confirmed, |ws, confirm| {
        ws.frequency().export(&section, confirm)
    }) else {
        return;
    };

    let mut text = format!("Frequency report saved to {}", path.display());
    if !report.unmatched.is_empty() {
        text.push_str(&format!(
            "\n\nLeft out (not on the roster): {}",
            report.unmatched.join("; ")
        ));
    }
    app.last_report = Some(report);
    app.notice("Success", text);
}
