use eframe::egui;

use crate::app::OceanGuardApp;
use crate::model::{filter_reports, Hazard, Report, ReportId, Severity};

/// Map categories offered as quick filter buttons, mirroring the hazard kinds
/// present in the seed feed.
const MAP_FILTERS: [Hazard; 4] = [
    Hazard::HighWaves,
    Hazard::OilSpill,
    Hazard::StrongCurrents,
    Hazard::RoughWeather,
];

pub fn map_page(ui: &mut egui::Ui, app: &mut OceanGuardApp) {
    ui.heading("Real-Time Ocean Map");
    ui.label(egui::RichText::new("Hazard markers from the current report feed").weak());
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.ui.map_search)
                .hint_text("location, type, reporter...")
                .desired_width(200.0),
        );

        ui.separator();
        if ui
            .selectable_label(app.ui.map_category.is_none(), "All Hazards")
            .clicked()
        {
            app.ui.map_category = None;
        }
        for hazard in MAP_FILTERS {
            if ui
                .selectable_label(app.ui.map_category == Some(hazard), hazard.label())
                .clicked()
            {
                app.ui.map_category = Some(hazard);
            }
        }
    });

    ui.add_space(8.0);

    let criteria = app.ui.map_criteria();
    let visible = filter_reports(app.reports.as_slice(), &criteria);

    let mut clicked = None;
    map_canvas(ui, &visible, app.selected.as_ref(), &mut clicked);

    ui.add_space(6.0);
    legend(ui);

    if visible.is_empty() {
        ui.add_space(8.0);
        ui.label("No hazards match the current map filters.");
    }

    let now = app.now();
    if let Some(report) = app.selected_report() {
        if criteria.matches(report) {
            ui.add_space(8.0);
            crate::ui::report_card(ui, report, now);
        }
    }

    if let Some(id) = clicked {
        app.selected = Some(id);
    }
}

/// Placeholder chart: a painted panel with one dot per visible report. Dots
/// are laid out from the report's index, not a geographic projection.
fn map_canvas(
    ui: &mut egui::Ui,
    visible: &[&Report],
    selected: Option<&ReportId>,
    clicked: &mut Option<ReportId>,
) {
    let w = ui.available_width().max(320.0);
    let h = (ui.available_height() - 140.0).clamp(260.0, 480.0);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::click());

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, egui::Color32::from_rgb(12, 32, 52));
    painter.rect_stroke(
        rect,
        6.0,
        egui::Stroke::new(1.0, ui.visuals().widgets.inactive.fg_stroke.color),
    );

    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Interactive Ocean Map\nlive chart integration planned",
        egui::FontId::proportional(15.0),
        egui::Color32::from_gray(120),
    );

    let mut points: Vec<(egui::Pos2, ReportId)> = Vec::new();
    for (index, report) in visible.iter().enumerate() {
        let p = marker_pos(rect, index);
        let r = if selected == Some(&report.id) { 7.0 } else { 5.0 };
        painter.circle_filled(p, r, crate::ui::severity_color(report.severity));
        if report.severity == Severity::Critical {
            painter.circle_stroke(
                p,
                r + 3.0,
                egui::Stroke::new(1.5, crate::ui::severity_color(Severity::Critical)),
            );
        }
        points.push((p, report.id.clone()));
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some((_, id)) = nearest_point(&points, pos, 12.0) {
                *clicked = Some(id.clone());
            }
        }
    }

    if response.hovered() {
        if let Some(pos) = response.hover_pos() {
            if let Some((d, id)) = nearest_point(&points, pos, 12.0) {
                if let Some(report) = visible.iter().find(|r| &r.id == id) {
                    egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("map_hover"), |ui| {
                        ui.label(egui::RichText::new(report.category.label()).strong());
                        ui.label(format!(
                            "{}  {}",
                            report.severity.label(),
                            report.location
                        ));
                        ui.monospace(report.coordinates.to_string());
                        let _ = d;
                    });
                }
            }
        }
    }
}

/// Index-derived placement (20% + 25% per marker across, 30% + 15% down),
/// wrapped to stay inside the panel.
fn marker_pos(rect: egui::Rect, index: usize) -> egui::Pos2 {
    let fx = (20 + (index * 25) % 70) as f32 / 100.0;
    let fy = (30 + (index * 15) % 55) as f32 / 100.0;
    egui::pos2(
        rect.left() + rect.width() * fx,
        rect.top() + rect.height() * fy,
    )
}

fn nearest_point<'a>(
    points: &'a [(egui::Pos2, ReportId)],
    pos: egui::Pos2,
    max_dist: f32,
) -> Option<(f32, &'a ReportId)> {
    points
        .iter()
        .map(|(p, id)| (p.distance(pos), id))
        .filter(|(d, _)| *d <= max_dist)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
}

fn legend(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Legend:").strong());
        for sev in Severity::ALL {
            ui.colored_label(crate::ui::severity_color(sev), "●");
            ui.label(sev.label());
        }
    });
}
