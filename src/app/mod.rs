mod run;
mod ui_state;

use std::path::{Path, PathBuf};
use std::time::Instant;

use eframe::egui;
use time::OffsetDateTime;
use tracing::info;

use crate::ingest::reports::ImportSummary;
use crate::model::{
    filter_reports, NoticeCenter, NoticeKind, Report, ReportId, ReportStore,
};

pub use run::run;
pub use ui_state::{Page, ReportDraft, SettingsState, UiState};

pub struct OceanGuardApp {
    pub reports: ReportStore,
    pub notices: NoticeCenter,
    pub selected: Option<ReportId>,
    pub ui: UiState,
    pub source_path: Option<PathBuf>,
    pub import_summary: Option<ImportSummary>,
    pub started: Instant,
}

impl Default for OceanGuardApp {
    fn default() -> Self {
        let reports = ReportStore::seed();
        let selected = reports.first_id();
        Self {
            reports,
            notices: NoticeCenter::seed(OffsetDateTime::now_utc()),
            selected,
            ui: UiState::default(),
            source_path: None,
            import_summary: None,
            started: Instant::now(),
        }
    }
}

impl eframe::App for OceanGuardApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        crate::ui::render_app(ctx, frame, self);
    }
}

impl OceanGuardApp {
    pub fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    /// Replace the seeded collection with reports imported from a JSON file.
    pub fn load_reports(&mut self, path: PathBuf) -> anyhow::Result<()> {
        self.ui.last_error = None;
        let ingested = crate::ingest::reports::load(&path)?;

        let message = format!(
            "{} of {} records imported from {}",
            ingested.summary.imported, ingested.summary.total_records, ingested.summary.file_name
        );
        let kind = if ingested.summary.skipped.is_empty() {
            NoticeKind::Success
        } else {
            NoticeKind::Warning
        };

        self.reports = ingested.store;
        self.selected = self.reports.first_id();
        self.source_path = Some(path);
        self.import_summary = Some(ingested.summary);
        self.ui.clear_filters();
        self.notices
            .push(kind, "Reports Imported", message, self.now());
        Ok(())
    }

    /// Write the currently visible (filtered) subset of the history view.
    pub fn export_filtered(&mut self, path: &Path) -> anyhow::Result<()> {
        let criteria = self.ui.reports_criteria();
        let visible = filter_reports(self.reports.as_slice(), &criteria);
        crate::ingest::reports::save(path, &visible)?;
        self.notices.push(
            NoticeKind::Success,
            "Export Complete",
            format!("{} reports written to {}", visible.len(), path.display()),
            self.now(),
        );
        Ok(())
    }

    /// Validate the form draft and push it into the store.
    pub fn submit_draft(&mut self) {
        match self.ui.draft.build(self.now()) {
            Ok(report) => {
                let id = self.reports.push(report);
                info!(%id, "hazard report submitted");
                self.selected = Some(id.clone());
                self.ui.draft = ReportDraft::default();
                self.ui.draft_error = None;
                self.notices.push(
                    NoticeKind::Success,
                    "Report Submitted",
                    format!("Hazard report {id} has been received and queued for review"),
                    self.now(),
                );
            }
            Err(e) => {
                self.ui.draft_error = Some(e.to_string());
            }
        }
    }

    pub fn selected_report(&self) -> Option<&Report> {
        self.selected.as_ref().and_then(|id| self.reports.get(id))
    }
}
