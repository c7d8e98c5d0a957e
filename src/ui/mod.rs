mod alerts;
mod dashboard;
mod details;
mod map;
mod report_form;
mod reports;
mod settings;

use crate::app::{OceanGuardApp, Page};
use crate::model::{NoticeKind, Severity, Status};
use eframe::egui;

pub use details::report_card;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut OceanGuardApp) {
    // keep relative timestamps and the connection indicator ticking
    ctx.request_repaint_after(std::time::Duration::from_secs(1));

    top_bar(ctx, frame, app);

    egui::SidePanel::left("nav_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| nav_panel(ui, app));

    egui::CentralPanel::default().show(ctx, |ui| match app.ui.page {
        Page::Dashboard => dashboard::dashboard_page(ui, app),
        Page::Map => map::map_page(ui, app),
        Page::ReportForm => report_form::report_form_page(ui, app),
        Page::Reports => reports::reports_page(ui, app),
        Page::Alerts => alerts::alerts_page(ui, app),
        Page::Settings => settings::settings_page(ui, app),
    });

    notices_window(ctx, app);
    about_window(ctx, app);
    status_bar(ctx, app);
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut OceanGuardApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import reports...").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Reports", &["json"])
                        .pick_file()
                    {
                        if let Err(e) = app.load_reports(path) {
                            let now = app.now();
                            app.notices.push(
                                NoticeKind::Error,
                                "Import Failed",
                                e.to_string(),
                                now,
                            );
                            app.ui.last_error = Some(e.to_string());
                        }
                    }
                }
                if ui.button("Export filtered...").clicked() {
                    ui.close_menu();
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
                ui.separator();
                if ui.button("Quit").clicked() {
                    let _ = frame; // keep signature stable if we later use frame APIs
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let bell = if app.notices.is_empty() {
                    "Notifications".to_owned()
                } else {
                    format!("Notifications ({})", app.notices.len())
                };
                if ui.button(bell).clicked() {
                    app.ui.show_notices = !app.ui.show_notices;
                }
            });
        });
    });
}

fn nav_panel(ui: &mut egui::Ui, app: &mut OceanGuardApp) {
    ui.add_space(4.0);
    ui.heading("OceanGuard");
    ui.label(
        egui::RichText::new("Ocean hazard awareness")
            .small()
            .weak(),
    );
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    for page in Page::ALL {
        if ui
            .add_sized(
                [ui.available_width(), 0.0],
                egui::SelectableLabel::new(app.ui.page == page, page.label()),
            )
            .clicked()
        {
            app.ui.page = page;
        }
        ui.add_space(2.0);
    }
}

fn notices_window(ctx: &egui::Context, app: &mut OceanGuardApp) {
    if !app.ui.show_notices {
        return;
    }

    let now = app.now();
    egui::Window::new("Notifications")
        .open(&mut app.ui.show_notices)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 36.0])
        .default_width(320.0)
        .resizable(false)
        .show(ctx, |ui| {
            if app.notices.is_empty() {
                ui.label("No new notifications");
                return;
            }

            let mut dismissed = None;
            for notice in app.notices.iter() {
                ui.horizontal(|ui| {
                    ui.colored_label(notice_color(notice.kind), notice.kind.label());
                    ui.label(egui::RichText::new(&notice.title).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("x").clicked() {
                            dismissed = Some(notice.id);
                        }
                    });
                });
                ui.label(&notice.message);
                ui.label(
                    egui::RichText::new(crate::util::time::relative(now, notice.timestamp))
                        .small()
                        .weak(),
                );
                ui.separator();
            }
            if let Some(id) = dismissed {
                app.notices.dismiss(id);
            }

            if ui.button("Clear all").clicked() {
                app.notices.clear();
            }
        });
}

fn about_window(ctx: &egui::Context, app: &mut OceanGuardApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About OceanGuard")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Dashboard for ocean-hazard awareness and reporting.");
            ui.label("Reports are seeded in memory or imported from JSON; nothing leaves this machine.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut OceanGuardApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Reports: {}", app.reports.len()));
            ui.separator();
            if let Some(p) = &app.source_path {
                let name = p
                    .file_name()
                    .map(|s| s.to_string_lossy())
                    .unwrap_or_else(|| p.to_string_lossy());
                let label = ui.label(format!("Source: {name}"));
                if let Some(summary) = &app.import_summary {
                    label.on_hover_text(summary.pretty());
                }
                ui.separator();
            }
            if let Some(id) = &app.selected {
                if let Some(r) = app.reports.get(id) {
                    ui.label(format!("Selected: {} ({})", r.id, r.category.label()));
                } else {
                    ui.label("Selected: (missing)");
                }
            } else {
                ui.label("Selected: (none)");
            }
            ui.separator();
            connection_indicator(ui, app);
            if let Some(err) = &app.ui.last_error {
                ui.separator();
                ui.colored_label(
                    egui::Color32::from_rgb(255, 70, 70),
                    format!("Error: {err}"),
                );
            }
        });
    });
}

/// Stand-in for a live feed: flips to "reconnecting" for a moment each minute.
fn connection_indicator(ui: &mut egui::Ui, app: &OceanGuardApp) {
    let elapsed = app.started.elapsed().as_secs();
    if elapsed % 60 < 57 {
        ui.colored_label(egui::Color32::from_rgb(80, 200, 120), "● Live");
    } else {
        ui.colored_label(egui::Color32::from_rgb(255, 170, 0), "● Reconnecting");
    }
}

pub fn severity_color(sev: Severity) -> egui::Color32 {
    match sev {
        Severity::Low => egui::Color32::from_rgb(80, 200, 120),
        Severity::Medium => egui::Color32::from_rgb(90, 160, 255),
        Severity::High => egui::Color32::from_rgb(255, 170, 0),
        Severity::Critical => egui::Color32::from_rgb(255, 70, 70),
    }
}

pub fn status_color(status: Status) -> egui::Color32 {
    match status {
        Status::Active => egui::Color32::from_rgb(255, 70, 70),
        Status::UnderInvestigation => egui::Color32::from_rgb(255, 170, 0),
        Status::Resolved => egui::Color32::from_rgb(80, 200, 120),
    }
}

fn notice_color(kind: NoticeKind) -> egui::Color32 {
    match kind {
        NoticeKind::Info => egui::Color32::from_rgb(90, 160, 255),
        NoticeKind::Warning => egui::Color32::from_rgb(255, 170, 0),
        NoticeKind::Error => egui::Color32::from_rgb(255, 70, 70),
        NoticeKind::Success => egui::Color32::from_rgb(80, 200, 120),
    }
}
