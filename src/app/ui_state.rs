use anyhow::{anyhow, bail, Result};
use time::OffsetDateTime;

use crate::model::{Coordinates, FilterCriteria, Hazard, Report, ReportId, Severity, Status};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Map,
    ReportForm,
    Reports,
    Alerts,
    Settings,
}

impl Default for Page {
    fn default() -> Self {
        Self::Dashboard
    }
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Map,
        Page::ReportForm,
        Page::Reports,
        Page::Alerts,
        Page::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Map => "Ocean Map",
            Page::ReportForm => "Report Hazard",
            Page::Reports => "Reports History",
            Page::Alerts => "Alerts",
            Page::Settings => "Settings",
        }
    }
}

/// Form state for the hazard submission page.
#[derive(Clone, Debug, Default)]
pub struct ReportDraft {
    pub category: Option<Hazard>,
    pub severity: Option<Severity>,
    pub location: String,
    /// Free-text "lat, lon" pair, as one field like the form it mirrors.
    pub coordinates: String,
    pub description: String,
    pub reporter: String,
}

impl ReportDraft {
    /// Validate into a report ready for the store (id left empty for the
    /// store to assign). New submissions start active and unverified.
    pub fn build(&self, now: OffsetDateTime) -> Result<Report> {
        let category = self.category.ok_or_else(|| anyhow!("select a hazard type"))?;
        let severity = self.severity.ok_or_else(|| anyhow!("select a severity"))?;

        let location = self.location.trim();
        if location.is_empty() {
            bail!("location is required");
        }

        let coordinates = parse_coordinates(&self.coordinates)?;
        if !coordinates.in_range() {
            bail!("coordinates out of range");
        }

        let description = self.description.trim();
        if description.is_empty() {
            bail!("describe the hazard");
        }

        let reporter = self.reporter.trim();
        let reporter = if reporter.is_empty() { "Anonymous" } else { reporter };

        Ok(Report {
            id: ReportId(String::new()),
            category,
            location: location.into(),
            coordinates,
            severity,
            status: Status::Active,
            reporter: reporter.into(),
            timestamp: now,
            description: description.into(),
            verified: false,
        })
    }
}

fn parse_coordinates(s: &str) -> Result<Coordinates> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("coordinates must be \"lat, lon\""))?;
    let lat: f64 = lat.trim().parse().map_err(|_| anyhow!("invalid latitude"))?;
    let lon: f64 = lon.trim().parse().map_err(|_| anyhow!("invalid longitude"))?;
    Ok(Coordinates::new(lat, lon))
}

#[derive(Clone, Debug)]
pub struct SettingsState {
    pub display_name: String,
    pub email: String,
    pub organization: String,
    pub notify_critical: bool,
    pub notify_updates: bool,
    pub sound_alerts: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            email: String::new(),
            organization: String::new(),
            notify_critical: true,
            notify_updates: true,
            sound_alerts: false,
        }
    }
}

#[derive(Default)]
pub struct UiState {
    pub page: Page,
    pub show_about: bool,
    pub show_notices: bool,
    pub last_error: Option<String>,

    // reports-history filter inputs
    pub query: String,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
    pub date_input: String,

    // map view inputs
    pub map_search: String,
    pub map_category: Option<Hazard>,

    pub draft: ReportDraft,
    pub draft_error: Option<String>,
    pub settings: SettingsState,
}

impl UiState {
    pub fn reports_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            category: None,
            severity: self.severity,
            status: self.status,
            day: crate::util::time::parse_day(&self.date_input),
        }
    }

    pub fn map_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.map_search.clone(),
            category: self.map_category,
            ..Default::default()
        }
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.severity = None;
        self.status = None;
        self.date_input.clear();
        self.map_search.clear();
        self.map_category = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ReportDraft {
        ReportDraft {
            category: Some(Hazard::Pollution),
            severity: Some(Severity::Low),
            location: "Test Bay".into(),
            coordinates: "12.5, 74.25".into(),
            description: "discolored water near the jetty".into(),
            reporter: String::new(),
        }
    }

    #[test]
    fn draft_builds_active_unverified_report() {
        let report = filled_draft().build(OffsetDateTime::UNIX_EPOCH).unwrap();
        assert!(report.id.as_str().is_empty());
        assert_eq!(report.status, Status::Active);
        assert!(!report.verified);
        assert_eq!(report.reporter, "Anonymous");
        assert_eq!(report.coordinates, Coordinates::new(12.5, 74.25));
    }

    #[test]
    fn draft_rejects_missing_and_malformed_fields() {
        let mut d = filled_draft();
        d.category = None;
        assert!(d.build(OffsetDateTime::UNIX_EPOCH).is_err());

        let mut d = filled_draft();
        d.coordinates = "somewhere off goa".into();
        assert!(d.build(OffsetDateTime::UNIX_EPOCH).is_err());

        let mut d = filled_draft();
        d.coordinates = "95.0, 10.0".into();
        assert!(d.build(OffsetDateTime::UNIX_EPOCH).is_err());
    }

    #[test]
    fn default_criteria_match_everything() {
        let ui = UiState::default();
        assert_eq!(ui.reports_criteria(), FilterCriteria::default());
        assert_eq!(ui.map_criteria(), FilterCriteria::default());
    }

    #[test]
    fn date_input_feeds_day_criterion() {
        let mut ui = UiState::default();
        ui.date_input = "2024-01-15".into();
        assert!(ui.reports_criteria().day.is_some());
        ui.date_input = "not a date".into();
        assert!(ui.reports_criteria().day.is_none());
    }
}
