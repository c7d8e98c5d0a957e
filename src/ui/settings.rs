use eframe::egui;

use crate::app::OceanGuardApp;
use crate::model::NoticeKind;

/// Profile and notification preferences. Held in UI state for the session;
/// nothing is written to disk.
pub fn settings_page(ui: &mut egui::Ui, app: &mut OceanGuardApp) {
    ui.heading("Settings");
    ui.add_space(10.0);

    ui.label(egui::RichText::new("Profile").strong());
    egui::Grid::new("profile_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Display name");
            ui.text_edit_singleline(&mut app.ui.settings.display_name);
            ui.end_row();

            ui.label("Email");
            ui.text_edit_singleline(&mut app.ui.settings.email);
            ui.end_row();

            ui.label("Organization");
            ui.text_edit_singleline(&mut app.ui.settings.organization);
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.label(egui::RichText::new("Notifications").strong());
    ui.checkbox(
        &mut app.ui.settings.notify_critical,
        "Alert me on critical hazards",
    );
    ui.checkbox(
        &mut app.ui.settings.notify_updates,
        "Notify on system updates",
    );
    ui.checkbox(&mut app.ui.settings.sound_alerts, "Play a sound for alerts");

    ui.add_space(12.0);
    if ui.button("Save Settings").clicked() {
        let now = app.now();
        app.notices.push(
            NoticeKind::Success,
            "Settings Saved",
            "Your preferences apply for this session",
            now,
        );
    }
}
