use eframe::egui;
use time::OffsetDateTime;

use crate::model::Report;

/// Full details card for a selected report, shared by the history and map views.
pub fn report_card(ui: &mut egui::Ui, report: &Report, now: OffsetDateTime) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(report.category.label()).strong());
            ui.colored_label(
                crate::ui::severity_color(report.severity),
                report.severity.label(),
            );
            ui.colored_label(crate::ui::status_color(report.status), report.status.label());
            if report.verified {
                ui.label(egui::RichText::new("Verified").small());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(report.id.as_str());
            });
        });

        ui.add_space(4.0);
        ui.add(egui::Label::new(&report.description).wrap(true));
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            ui.label(format!("Location: {}", report.location));
            ui.separator();
            ui.monospace(report.coordinates.to_string());
            ui.separator();
            ui.label(format!("Reporter: {}", report.reporter));
        });
        ui.horizontal(|ui| {
            ui.label(crate::util::time::utc_string(report.timestamp));
            ui.label(
                egui::RichText::new(format!(
                    "({})",
                    crate::util::time::relative(now, report.timestamp)
                ))
                .weak(),
            );
        });
    });
}
