use eframe::egui;

use crate::app::OceanGuardApp;
use crate::model::{Report, Status};

/// Unresolved reports, most urgent first.
pub fn alerts_page(ui: &mut egui::Ui, app: &mut OceanGuardApp) {
    ui.heading("Alert Center");
    ui.label(egui::RichText::new("Unresolved hazards from the report feed").weak());
    ui.add_space(8.0);

    let mut alerts: Vec<&Report> = app
        .reports
        .iter()
        .filter(|r| r.status != Status::Resolved)
        .collect();
    alerts.sort_by(|a, b| b.severity.cmp(&a.severity).then(b.timestamp.cmp(&a.timestamp)));

    if alerts.is_empty() {
        ui.add_space(30.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("All clear").strong().size(18.0));
            ui.label("No active alerts right now.");
        });
        return;
    }

    let now = app.now();
    let mut clicked = None;
    egui::ScrollArea::vertical()
        .id_source("alerts_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for report in &alerts {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(crate::ui::severity_color(report.severity), "▌");
                        ui.label(egui::RichText::new(report.category.label()).strong());
                        ui.colored_label(
                            crate::ui::severity_color(report.severity),
                            report.severity.label(),
                        );
                        ui.colored_label(
                            crate::ui::status_color(report.status),
                            report.status.label(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(crate::util::time::relative(
                                        now,
                                        report.timestamp,
                                    ))
                                    .small()
                                    .weak(),
                                );
                            },
                        );
                    });
                    ui.label(&report.description);
                    ui.horizontal(|ui| {
                        ui.label(format!("Location: {}", report.location));
                        if ui.small_button("View details").clicked() {
                            clicked = Some(report.id.clone());
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });

    if let Some(id) = clicked {
        app.selected = Some(id);
        app.ui.page = crate::app::Page::Reports;
    }
}
