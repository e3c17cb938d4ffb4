// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{attendance,report,roster}.

mod attendance; // src/gui/actions/attendance.rs
mod report;     // src/gui/actions/report.rs
mod roster;     // src/gui/actions/roster.rs

pub use attendance::{add_selected, remove_selected, select_report, select_section, set_mode};
pub use report::{frequency, save};
pub use roster::{add_roster, remove_roster};

use crate::{
    confirm::{Always, Confirm, Outcome},
    error::{AttendanceError, Result},
    gui::{app::App, dialog::Dialog},
    Workspace,
};

/// An action waiting on a yes/no answer, with the inputs it was started with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pending {
    RemoveRoster(String),
    Save { section: String, date: String },
    Frequency(String),
}

/// Run a pending action again, this time with the user's answer.
pub fn perform(app: &mut App, pending: Pending, confirmed: bool) {
    match pending {
        Pending::RemoveRoster(section) => remove_roster(app, section, confirmed),
        Pending::Save { section, date } => save(app, section, date, confirmed),
        Pending::Frequency(section) => frequency(app, section, confirmed),
    }
}

/// Run `op` behind the yes/no gate. Does nothing while another dialog is
/// open, so a pending question is never replaced.
///
/// Unconfirmed, the gate answers no and keeps the question, so `op` still
/// validates its inputs but writes nothing; the question then goes up as a
/// dialog that re-runs `pending` on yes.
pub(super) fn gated<T>(
    app: &mut App,
    pending: Pending,
    confirmed: bool,
    op: impl FnOnce(&mut Workspace, &mut dyn Confirm) -> Result<Outcome<T>>,
) -> Option<T> {
    if app.dialog.is_some() {
        logd!("UI: {:?} ignored, a dialog is open", pending);
        return None;
    }

    let mut asked: Option<(String, String)> = None;
    let result = if confirmed {
        op(&mut app.ws, &mut Always(true))
    } else {
        let mut ask = |title: &str, question: &str| {
            asked = Some((s!(title), s!(question)));
            false
        };
        op(&mut app.ws, &mut ask)
    };

    match result {
        Ok(Outcome::Done(v)) => Some(v),
        Ok(Outcome::Declined) => {
            if let Some((title, question)) = asked {
                app.dialog = Some(Dialog::confirm(title, question, pending));
            }
            None
        }
        Err(e) => {
            report_error(app, &e);
            None
        }
    }
}

pub(super) fn report_error(app: &mut App, e: &AttendanceError) {
    let title = if e.is_user_input() || e.is_missing_resource() {
        logd!("UI: {}", e);
        "Warning"
    } else {
        loge!("UI: {}", e);
        "Error"
    };
    app.notice(title, e.to_string());
}
