use eframe::egui;

use crate::app::{OceanGuardApp, Page};
use crate::model::{Report, ReportStats, Severity, Status};

pub fn dashboard_page(ui: &mut egui::Ui, app: &mut OceanGuardApp) {
    ui.heading("Ocean Hazard Command Center");
    ui.label(
        egui::RichText::new("Real-time monitoring and reporting dashboard for ocean safety")
            .weak(),
    );
    ui.add_space(10.0);

    let stats = ReportStats::compute(app.reports.iter());
    let active = app
        .reports
        .iter()
        .filter(|r| r.status == Status::Active)
        .count();

    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Active Alerts", active, crate::ui::status_color(Status::Active));
        stat_card(
            ui,
            "Total Reports",
            stats.total,
            egui::Color32::from_rgb(90, 160, 255),
        );
        stat_card(
            ui,
            "Verified Reports",
            stats.verified,
            egui::Color32::from_rgb(80, 200, 120),
        );
        stat_card(
            ui,
            "Critical Issues",
            stats.critical,
            crate::ui::severity_color(Severity::Critical),
        );
    });

    ui.add_space(12.0);

    ui.columns(2, |cols| {
        recent_reports(&mut cols[0], app);
        quick_actions(&mut cols[1], &mut app.ui.page);
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: usize, color: egui::Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(150.0);
        ui.label(egui::RichText::new(title).small().weak());
        ui.label(egui::RichText::new(value.to_string()).size(26.0).color(color));
    });
}

fn recent_reports(ui: &mut egui::Ui, app: &OceanGuardApp) {
    ui.label(egui::RichText::new("Recent Reports").strong());
    ui.add_space(4.0);

    let now = app.now();
    let mut recent: Vec<&Report> = app.reports.iter().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    for report in recent.into_iter().take(3) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(crate::ui::severity_color(report.severity), "●");
                ui.label(egui::RichText::new(report.category.label()).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(crate::util::time::relative(now, report.timestamp))
                            .small()
                            .weak(),
                    );
                });
            });
            ui.horizontal(|ui| {
                ui.label(&report.location);
                ui.colored_label(
                    crate::ui::status_color(report.status),
                    report.status.label(),
                );
            });
        });
        ui.add_space(4.0);
    }
}

fn quick_actions(ui: &mut egui::Ui, page: &mut Page) {
    ui.label(egui::RichText::new("Quick Actions").strong());
    ui.add_space(4.0);

    let actions = [
        ("Emergency Report", Page::ReportForm),
        ("Live Ocean Map", Page::Map),
        ("Reports History", Page::Reports),
        ("View Alerts", Page::Alerts),
    ];
    for (label, target) in actions {
        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::new(label))
            .clicked()
        {
            *page = target;
        }
        ui.add_space(4.0);
    }
}
