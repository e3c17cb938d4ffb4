// src/gui/components/frequency_table.rs
//
// Preview of the last frequency report written this session.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{frequency::FrequencyReport, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(report) = &app.last_report else {
        ui.weak("Generate a frequency report to preview it here.");
        return;
    };

    ui.strong(format!(
        "Frequency: {} ({} report(s))",
        report.section, report.records
    ));

    let headers = FrequencyReport::headers();
    TableBuilder::new(ui)
        .id_salt("frequency_table")
        .striped(true)
        .resizable(true)
        .column(Column::initial(160.0).at_least(60.0))
        .column(Column::initial(160.0).at_least(60.0))
        .column(Column::remainder().at_least(60.0))
        .header(20.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, report.rows.len(), |mut row| {
                let r = &report.rows[row.index()];
                row.col(|ui| { ui.label(&r.last); });
                row.col(|ui| { ui.label(&r.first); });
                row.col(|ui| { ui.label(r.count.to_string()); });
            });
        });
}
