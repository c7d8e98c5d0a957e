use eframe::egui;

use crate::app::OceanGuardApp;
use crate::model::{Hazard, Severity};

pub fn report_form_page(ui: &mut egui::Ui, app: &mut OceanGuardApp) {
    ui.heading("Report Ocean Hazard");
    ui.label(
        egui::RichText::new("Help keep our oceans safe by reporting hazards in real-time").weak(),
    );
    ui.add_space(10.0);

    egui::Grid::new("report_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Type of Hazard *");
            egui::ComboBox::from_id_source("draft_category")
                .selected_text(
                    app.ui
                        .draft
                        .category
                        .map_or("Select hazard type", |c| c.label()),
                )
                .show_ui(ui, |ui| {
                    for hazard in Hazard::ALL {
                        ui.selectable_value(
                            &mut app.ui.draft.category,
                            Some(hazard),
                            hazard.label(),
                        );
                    }
                });
            ui.end_row();

            ui.label("Severity *");
            egui::ComboBox::from_id_source("draft_severity")
                .selected_text(
                    app.ui
                        .draft
                        .severity
                        .map_or("Select severity", |s| s.label()),
                )
                .show_ui(ui, |ui| {
                    for sev in Severity::ALL {
                        ui.selectable_value(&mut app.ui.draft.severity, Some(sev), sev.label());
                    }
                });
            ui.end_row();

            ui.label("Location *");
            ui.add(
                egui::TextEdit::singleline(&mut app.ui.draft.location)
                    .hint_text("e.g. Mumbai Coast"),
            );
            ui.end_row();

            ui.label("Coordinates *");
            ui.add(
                egui::TextEdit::singleline(&mut app.ui.draft.coordinates)
                    .hint_text("lat, lon  e.g. 19.0760, 72.8777"),
            );
            ui.end_row();

            ui.label("Description *");
            ui.add(
                egui::TextEdit::multiline(&mut app.ui.draft.description)
                    .hint_text("What did you observe?")
                    .desired_rows(4),
            );
            ui.end_row();

            ui.label("Your Name");
            ui.add(
                egui::TextEdit::singleline(&mut app.ui.draft.reporter)
                    .hint_text("left empty reports anonymously"),
            );
            ui.end_row();
        });

    ui.add_space(8.0);

    if let Some(err) = &app.ui.draft_error {
        ui.colored_label(egui::Color32::from_rgb(255, 70, 70), err);
        ui.add_space(4.0);
    }

    ui.horizontal(|ui| {
        if ui.button("Submit Report").clicked() {
            app.submit_draft();
        }
        if ui.button("Reset").clicked() {
            app.ui.draft = Default::default();
            app.ui.draft_error = None;
        }
    });

    ui.add_space(12.0);
    ui.separator();
    ui.label(
        egui::RichText::new(
            "Submitted reports enter the feed as active and unverified until reviewed.",
        )
        .small()
        .weak(),
    );
}
