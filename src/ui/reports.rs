use eframe::egui;

use crate::app::OceanGuardApp;
use crate::model::{filter_reports, Report, ReportStats, Severity, Status};

pub fn reports_page(ui: &mut egui::Ui, app: &mut OceanGuardApp) {
    ui.heading("Reports History");
    ui.label(
        egui::RichText::new("Browse and analyze historical hazard reports and incidents").weak(),
    );
    ui.add_space(8.0);

    filter_row(ui, app);
    ui.add_space(8.0);

    let criteria = app.ui.reports_criteria();
    let visible = filter_reports(app.reports.as_slice(), &criteria);
    let stats = ReportStats::compute(visible.iter().copied());

    stats_row(ui, &stats);
    ui.add_space(6.0);
    ui.separator();

    if visible.is_empty() {
        empty_state(ui);
        return;
    }

    let now = app.now();
    let mut clicked = None;
    egui::ScrollArea::vertical()
        .id_source("reports_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for report in &visible {
                let selected = app.selected.as_ref() == Some(&report.id);
                if report_row(ui, report, selected) {
                    clicked = Some(report.id.clone());
                }
                ui.add_space(2.0);
            }

            if let Some(report) = app.selected_report() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Details").strong());
                crate::ui::report_card(ui, report, now);
            }
        });

    if let Some(id) = clicked {
        app.selected = Some(id);
    }
}

fn filter_row(ui: &mut egui::Ui, app: &mut OceanGuardApp) {
    ui.horizontal_wrapped(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.ui.query)
                .hint_text("type, location, reporter...")
                .desired_width(180.0),
        );

        egui::ComboBox::from_id_source("severity_filter")
            .selected_text(
                app.ui
                    .severity
                    .map_or("All Severities", |s| s.label()),
            )
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.ui.severity, None, "All Severities");
                for sev in Severity::ALL {
                    ui.selectable_value(&mut app.ui.severity, Some(sev), sev.label());
                }
            });

        egui::ComboBox::from_id_source("status_filter")
            .selected_text(app.ui.status.map_or("All Statuses", |s| s.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.ui.status, None, "All Statuses");
                for status in Status::ALL {
                    ui.selectable_value(&mut app.ui.status, Some(status), status.label());
                }
            });

        ui.label("Date:");
        let date_edit = ui.add(
            egui::TextEdit::singleline(&mut app.ui.date_input)
                .hint_text("YYYY-MM-DD")
                .desired_width(100.0),
        );
        if !app.ui.date_input.trim().is_empty()
            && crate::util::time::parse_day(&app.ui.date_input).is_none()
        {
            date_edit.on_hover_text("Not a valid date; ignored until it parses.");
        }

        if ui.button("Clear").clicked() {
            app.ui.clear_filters();
        }

        if ui.button("Export Data").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Reports", &["json"])
                .set_file_name("reports.json")
                .save_file()
            {
                if let Err(e) = app.export_filtered(&path) {
                    app.ui.last_error = Some(e.to_string());
                }
            }
        }
    });
}

fn stats_row(ui: &mut egui::Ui, stats: &ReportStats) {
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("Total Reports {}", stats.total));
        ui.colored_label(
            crate::ui::severity_color(Severity::Critical),
            format!("Critical {}", stats.critical),
        );
        ui.colored_label(
            egui::Color32::from_rgb(90, 160, 255),
            format!("Verified {}", stats.verified),
        );
        ui.colored_label(
            crate::ui::status_color(Status::Resolved),
            format!("Resolved {}", stats.resolved),
        );
    });
}

fn report_row(ui: &mut egui::Ui, report: &Report, selected: bool) -> bool {
    let label = format!(
        "{:<8}  {:<8}  {:<20}  {}",
        report.id,
        report.severity.label(),
        report.category.label(),
        report.location
    );
    let label = egui::RichText::new(label)
        .monospace()
        .color(crate::ui::severity_color(report.severity));

    ui.add_sized(
        [ui.available_width(), 0.0],
        egui::SelectableLabel::new(selected, label),
    )
    .on_hover_text(format!(
        "{}\nreporter={}  status={}",
        report.description,
        report.reporter,
        report.status.label()
    ))
    .clicked()
}

fn empty_state(ui: &mut egui::Ui) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("No Reports Found").strong().size(18.0));
        ui.label("Try adjusting your search criteria or filters to find more reports.");
    });
}
