use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::model::{Coordinates, Hazard, Report, ReportId, ReportStore, Severity, Status};

/// Raw wire shape of one imported record. Enum-valued fields stay strings here
/// so a single bad record degrades to a skip instead of failing the file.
#[derive(Debug, Deserialize)]
struct RawReport {
    #[serde(default)]
    id: String,
    category: String,
    location: String,
    coordinates: Coordinates,
    severity: String,
    status: String,
    reporter: String,
    timestamp: String,
    description: String,
    #[serde(default)]
    verified: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ImportSummary {
    pub file_name: String,
    pub file_size: u64,
    pub total_records: usize,
    pub imported: usize,
    pub skipped: Vec<String>,
}

impl ImportSummary {
    pub fn pretty(&self) -> String {
        let mut lines = vec![
            format!("File: {} ({} bytes)", self.file_name, self.file_size),
            format!("Records: {}", self.total_records),
            format!("Imported: {}", self.imported),
        ];
        if !self.skipped.is_empty() {
            lines.push(format!("Skipped: {}", self.skipped.len()));
            for reason in &self.skipped {
                lines.push(format!("- {reason}"));
            }
        }
        lines.join("\n")
    }
}

pub struct IngestedReports {
    pub summary: ImportSummary,
    pub store: ReportStore,
}

/// Read a JSON array of reports. Malformed records are skipped with a reason;
/// only an unreadable file or non-array payload is an error.
pub fn load(path: &Path) -> Result<IngestedReports> {
    let data = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let raw: Vec<RawReport> =
        serde_json::from_slice(&data).context("parse report collection")?;

    let mut summary = ImportSummary {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        file_size: data.len() as u64,
        total_records: raw.len(),
        ..Default::default()
    };

    let mut store = ReportStore::default();
    for (index, raw) in raw.into_iter().enumerate() {
        match validate(raw, &store) {
            Ok(report) => {
                store.push(report);
                summary.imported += 1;
            }
            Err(reason) => {
                warn!(index, %reason, "skipping report record");
                summary.skipped.push(format!("record {index}: {reason}"));
            }
        }
    }

    info!(
        imported = summary.imported,
        skipped = summary.skipped.len(),
        "loaded report collection"
    );
    Ok(IngestedReports { summary, store })
}

fn validate(raw: RawReport, store: &ReportStore) -> std::result::Result<Report, String> {
    let category = Hazard::parse(&raw.category)
        .ok_or_else(|| format!("unknown category {:?}", raw.category))?;
    let severity = Severity::parse(&raw.severity)
        .ok_or_else(|| format!("unknown severity {:?}", raw.severity))?;
    let status =
        Status::parse(&raw.status).ok_or_else(|| format!("unknown status {:?}", raw.status))?;
    let timestamp = crate::util::time::parse_rfc3339(&raw.timestamp)
        .ok_or_else(|| format!("bad timestamp {:?}", raw.timestamp))?;

    if !raw.coordinates.in_range() {
        return Err(format!(
            "coordinates out of range ({}, {})",
            raw.coordinates.lat, raw.coordinates.lon
        ));
    }

    let id = ReportId(raw.id);
    if !id.as_str().is_empty() && store.contains(&id) {
        return Err(format!("duplicate id {id}"));
    }

    Ok(Report {
        id,
        category,
        location: raw.location,
        coordinates: raw.coordinates,
        severity,
        status,
        reporter: raw.reporter,
        timestamp,
        description: raw.description,
        verified: raw.verified,
    })
}

/// Write `reports` (normally the currently filtered subset) as a JSON array in
/// the canonical serialization.
pub fn save(path: &Path, reports: &[&Report]) -> Result<()> {
    let json = serde_json::to_vec_pretty(reports).context("serialize reports")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(count = reports.len(), path = %path.display(), "exported reports");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, severity: &str, status: &str) -> RawReport {
        RawReport {
            id: id.into(),
            category: "Oil Spill".into(),
            location: "Chennai Harbor".into(),
            coordinates: Coordinates::new(13.0827, 80.2707),
            severity: severity.into(),
            status: status.into(),
            reporter: "Marine Patrol Unit".into(),
            timestamp: "2024-01-15T09:15:00Z".into(),
            description: String::new(),
            verified: true,
        }
    }

    #[test]
    fn validate_accepts_mixed_case_labels() {
        let store = ReportStore::default();
        let report = validate(raw("RPT-100", "Critical", "Under Investigation"), &store).unwrap();
        assert_eq!(report.severity, Severity::Critical);
        assert_eq!(report.status, Status::UnderInvestigation);
        assert_eq!(report.category, Hazard::OilSpill);
    }

    #[test]
    fn validate_rejects_unknown_enums_without_panicking() {
        let store = ReportStore::default();
        assert!(validate(raw("RPT-100", "apocalyptic", "active"), &store)
            .unwrap_err()
            .contains("unknown severity"));
        assert!(validate(raw("RPT-100", "high", "abandoned"), &store)
            .unwrap_err()
            .contains("unknown status"));
    }

    #[test]
    fn validate_rejects_out_of_range_coordinates() {
        let store = ReportStore::default();
        let mut bad = raw("RPT-100", "high", "active");
        bad.coordinates = Coordinates::new(95.0, 10.0);
        assert!(validate(bad, &store).unwrap_err().contains("out of range"));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let store = ReportStore::seed();
        assert!(validate(raw("RPT-001", "high", "active"), &store)
            .unwrap_err()
            .contains("duplicate id"));
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let json = r#"[
            {
                "id": "RPT-201",
                "category": "high-waves",
                "location": "Mumbai Coast",
                "coordinates": {"lat": 19.076, "lon": 72.8777},
                "severity": "high",
                "status": "active",
                "reporter": "Captain Sharma",
                "timestamp": "2024-01-15T10:30:00Z",
                "description": "seed",
                "verified": true
            },
            {
                "id": "RPT-202",
                "category": "sea-monster",
                "location": "Nowhere",
                "coordinates": {"lat": 0.0, "lon": 0.0},
                "severity": "high",
                "status": "active",
                "reporter": "",
                "timestamp": "2024-01-15T10:30:00Z",
                "description": "",
                "verified": false
            }
        ]"#;

        let dir = std::env::temp_dir().join("ocean-guard-ingest-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("reports.json");
        std::fs::write(&path, json).unwrap();

        let ingested = load(&path).unwrap();
        assert_eq!(ingested.summary.total_records, 2);
        assert_eq!(ingested.summary.imported, 1);
        assert_eq!(ingested.summary.skipped.len(), 1);
        assert!(ingested.summary.skipped[0].contains("unknown category"));
        assert_eq!(ingested.store.len(), 1);
    }

    #[test]
    fn export_round_trips_through_canonical_form() {
        let store = ReportStore::seed();
        let reports: Vec<&Report> = store.iter().collect();

        let dir = std::env::temp_dir().join("ocean-guard-export-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("export.json");
        save(&path, &reports).unwrap();

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded.store.len(), store.len());
        assert!(reloaded.summary.skipped.is_empty());
    }
}
