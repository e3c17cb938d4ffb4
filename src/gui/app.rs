// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::AppState},
    frequency::FrequencyReport,
    roster::Sections,
    suggest,
    Workspace,
};

use super::dialog::Dialog;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Attendance Marking",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(AppOptions::default()))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub ws: Workspace,

    // rosters as last read from disk
    pub sections: Sections,
    // saved dates for the selected section (Modify mode)
    pub reports: Vec<String>,
    // ranked roster for the current query
    pub suggestions: Vec<String>,

    pub last_report: Option<FrequencyReport>,
    pub dialog: Option<Dialog>,
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let ws = Workspace::from_options(&state.options);

        let mut app = Self {
            state,
            ws,
            sections: Sections::new(),
            reports: Vec::new(),
            suggestions: Vec::new(),
            last_report: None,
            dialog: None,
            status: s!("Idle"),
        };
        app.reload_sections();
        logf!("Init: sections={}", app.sections.len());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn section(&self) -> Option<&str> {
        self.state.gui.selected_section.as_deref()
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn notice(&mut self, title: &str, text: impl Into<String>) {
        let text = text.into();
        self.status(text.clone());
        self.dialog = Some(Dialog::notice(title, text));
    }

    pub fn roster(&self) -> &[String] {
        self.section()
            .and_then(|s| self.sections.get(s))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Re-read rosters/ and drop a selection that no longer exists.
    pub fn reload_sections(&mut self) {
        match self.ws.rosters.load_sections() {
            Ok(s) => self.sections = s,
            Err(e) => {
                loge!("Roster: load failed: {}", e);
                self.notice("Error", e.to_string());
            }
        }
        let gone = self.section().is_some_and(|s| !self.sections.contains_key(s));
        if gone {
            self.state.gui.reset_for_section(None);
        }
        self.refresh_reports();
        self.refresh_suggestions();
    }

    /// Saved dates for the current section.
    pub fn refresh_reports(&mut self) {
        self.reports = match self.section() {
            Some(s) => self.ws.session.list_reports(s).unwrap_or_else(|e| {
                loge!("Session: listing reports failed: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
    }

    pub fn refresh_suggestions(&mut self) {
        self.suggestions = suggest::suggest(
            &self.state.gui.name_query,
            self.roster(),
            self.state.options.suggest_limit,
        );
        self.state.gui.selected_suggestion = (!self.suggestions.is_empty()).then_some(0);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // panels are inert while a dialog waits for an answer
        let idle = self.dialog.is_none();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::SidePanel::left("sections")
            .resizable(false)
            .min_width(320.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(idle, |ui| super::components::section_panel::draw(ui, self));
            });

        egui::SidePanel::right("attendance")
            .resizable(false)
            .min_width(360.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(idle, |ui| super::components::attendance_list::draw(ui, self));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(idle, |ui| {
                super::components::suggestions::draw(ui, self);
                ui.separator();
                super::components::frequency_table::draw(ui, self);
            });
        });

        super::dialog::show(ctx, self);
    }
}
