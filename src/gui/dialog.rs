// src/gui/dialog.rs
//
// One dialog at a time, drawn over the panels. A confirm dialog carries the
// action it guards and replays it when the user answers yes.

use eframe::egui;

use crate::gui::{
    actions::{self, Pending},
    app::App,
};

#[derive(Clone, Debug)]
pub enum Dialog {
    Notice {
        title: String,
        text: String,
    },
    Confirm {
        title: String,
        question: String,
        pending: Pending,
    },
}

impl Dialog {
    pub fn notice(title: impl Into<String>, text: impl Into<String>) -> Self {
        Dialog::Notice { title: title.into(), text: text.into() }
    }

    pub fn confirm(title: impl Into<String>, question: impl Into<String>, pending: Pending) -> Self {
        Dialog::Confirm { title: title.into(), question: question.into(), pending }
    }

    fn title(&self) -> &str {
        match self {
            Dialog::Notice { title, .. } | Dialog::Confirm { title, .. } => title,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Answer { Ok, Yes, No }

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = app.dialog.take() else { return };

    let mut answer: Option<Answer> = None;
    egui::Window::new(dialog.title())
        .id(egui::Id::new("attendance_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            match &dialog {
                Dialog::Notice { text, .. } => {
                    ui.label(text);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        answer = Some(Answer::Ok);
                    }
                }
                Dialog::Confirm { question, .. } => {
                    ui.label(question);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            answer = Some(Answer::Yes);
                        }
                        if ui.button("No").clicked() {
                            answer = Some(Answer::No);
                        }
                    });
                }
            }
        });

    if answer.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        answer = Some(match dialog {
            Dialog::Notice { .. } => Answer::Ok,
            Dialog::Confirm { .. } => Answer::No,
        });
    }

    match (answer, dialog) {
        (None, dialog) => app.dialog = Some(dialog),
        (Some(Answer::Yes), Dialog::Confirm { pending, .. }) => {
            logf!("UI: Confirmed {:?}", pending);
            actions::perform(app, pending, true);
        }
        (Some(Answer::No), Dialog::Confirm { pending, .. }) => {
            logf!("UI: Declined {:?}", pending);
            app.status("Cancelled");
        }
        (Some(_), _) => {}
    }
}
