use crate::app::OceanGuardApp;
use eframe::egui;

pub fn run() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("OceanGuard")
            .with_inner_size([1200.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "OceanGuard",
        native_options,
        Box::new(|_cc| Box::<OceanGuardApp>::default()),
    )
}
