use time::macros::datetime;

use crate::model::{Coordinates, Hazard, Report, ReportId, Severity, Status};

/// Ordered, append-only collection of reports. The filter engine reads it as a
/// slice and never mutates it.
#[derive(Default)]
pub struct ReportStore {
    reports: Vec<Report>,
    next_seq: u32,
}

impl ReportStore {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn as_slice(&self) -> &[Report] {
        &self.reports
    }

    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    pub fn get(&self, id: &ReportId) -> Option<&Report> {
        self.reports.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &ReportId) -> bool {
        self.get(id).is_some()
    }

    pub fn first_id(&self) -> Option<ReportId> {
        self.reports.first().map(|r| r.id.clone())
    }

    /// Append a report, assigning the next free `RPT-NNN` id if the record
    /// comes in without one.
    pub fn push(&mut self, mut report: Report) -> ReportId {
        if report.id.as_str().is_empty() {
            report.id = ReportId(format!("RPT-{:03}", self.next_seq.max(1)));
        }
        if let Some(n) = numeric_suffix(report.id.as_str()) {
            self.next_seq = self.next_seq.max(n + 1);
        }
        let id = report.id.clone();
        self.reports.push(report);
        id
    }

    /// In-memory seed collection standing in for a real ingestion backend.
    pub fn seed() -> Self {
        let mut s = Self::default();

        s.push(Report {
            id: ReportId("RPT-001".into()),
            category: Hazard::HighWaves,
            location: "Mumbai Coast".into(),
            coordinates: Coordinates::new(19.0760, 72.8777),
            severity: Severity::High,
            status: Status::Active,
            reporter: "Captain Sharma".into(),
            timestamp: datetime!(2024-01-15 10:30 UTC),
            description: "Waves reaching 4-5 meters with strong westerly winds".into(),
            verified: true,
        });

        s.push(Report {
            id: ReportId("RPT-002".into()),
            category: Hazard::OilSpill,
            location: "Chennai Harbor".into(),
            coordinates: Coordinates::new(13.0827, 80.2707),
            severity: Severity::Critical,
            status: Status::UnderInvestigation,
            reporter: "Marine Patrol Unit".into(),
            timestamp: datetime!(2024-01-15 09:15 UTC),
            description: "Large oil spill detected near major shipping lane".into(),
            verified: true,
        });

        s.push(Report {
            id: ReportId("RPT-003".into()),
            category: Hazard::Debris,
            location: "Kochi Port".into(),
            coordinates: Coordinates::new(9.9312, 76.2673),
            severity: Severity::Medium,
            status: Status::Resolved,
            reporter: "Local Fisherman".into(),
            timestamp: datetime!(2024-01-14 16:45 UTC),
            description: "Floating debris from recent storm activity".into(),
            verified: false,
        });

        s.push(Report {
            id: ReportId("RPT-004".into()),
            category: Hazard::StrongCurrents,
            location: "Goa Coast".into(),
            coordinates: Coordinates::new(15.2993, 74.1240),
            severity: Severity::Medium,
            status: Status::Active,
            reporter: "Coastal Observer".into(),
            timestamp: datetime!(2024-01-15 08:45 UTC),
            description: "Unusual current patterns observed".into(),
            verified: true,
        });

        s.push(Report {
            id: ReportId("RPT-005".into()),
            category: Hazard::RoughWeather,
            location: "Goa Beaches".into(),
            coordinates: Coordinates::new(15.5491, 73.7539),
            severity: Severity::Medium,
            status: Status::Active,
            reporter: "Beach Patrol".into(),
            timestamp: datetime!(2024-01-15 07:30 UTC),
            description: "Rough seas with reduced visibility near the shore".into(),
            verified: false,
        });

        s
    }
}

fn numeric_suffix(id: &str) -> Option<u32> {
    id.rsplit('-').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn blank_report() -> Report {
        Report {
            id: ReportId(String::new()),
            category: Hazard::Other,
            location: "Test Bay".into(),
            coordinates: Coordinates::new(0.0, 0.0),
            severity: Severity::Low,
            status: Status::Active,
            reporter: "tester".into(),
            timestamp: OffsetDateTime::UNIX_EPOCH,
            description: String::new(),
            verified: false,
        }
    }

    #[test]
    fn push_assigns_sequential_ids() {
        let mut s = ReportStore::default();
        let a = s.push(blank_report());
        let b = s.push(blank_report());
        assert_eq!(a.as_str(), "RPT-001");
        assert_eq!(b.as_str(), "RPT-002");
    }

    #[test]
    fn push_continues_after_explicit_ids() {
        let mut s = ReportStore::seed();
        let id = s.push(blank_report());
        assert_eq!(id.as_str(), "RPT-006");
        assert!(s.get(&id).is_some());
    }

    #[test]
    fn seed_ids_are_unique_and_coordinates_in_range() {
        let s = ReportStore::seed();
        let mut seen = std::collections::HashSet::new();
        for r in s.iter() {
            assert!(seen.insert(r.id.clone()), "duplicate id {}", r.id);
            assert!(r.coordinates.in_range(), "{} out of range", r.id);
        }
        assert_eq!(s.len(), 5);
    }
}
