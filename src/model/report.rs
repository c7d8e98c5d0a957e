use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub String);

impl ReportId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The nine hazard kinds the report form offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hazard {
    HighWaves,
    OilSpill,
    Debris,
    StrongCurrents,
    RoughWeather,
    MarineAccident,
    CoastalErosion,
    Pollution,
    Other,
}

impl Hazard {
    pub const ALL: [Hazard; 9] = [
        Hazard::HighWaves,
        Hazard::OilSpill,
        Hazard::Debris,
        Hazard::StrongCurrents,
        Hazard::RoughWeather,
        Hazard::MarineAccident,
        Hazard::CoastalErosion,
        Hazard::Pollution,
        Hazard::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Hazard::HighWaves => "High Waves",
            Hazard::OilSpill => "Oil Spill",
            Hazard::Debris => "Debris",
            Hazard::StrongCurrents => "Strong Currents",
            Hazard::RoughWeather => "Rough Weather",
            Hazard::MarineAccident => "Marine Accident",
            Hazard::CoastalErosion => "Coastal Erosion",
            Hazard::Pollution => "Pollution",
            Hazard::Other => "Other",
        }
    }

    /// Lenient parse for human or imported input ("Oil Spill", "oil-spill", "OIL_SPILL").
    pub fn parse(s: &str) -> Option<Hazard> {
        match normalize(s).as_str() {
            "high-waves" => Some(Hazard::HighWaves),
            "oil-spill" => Some(Hazard::OilSpill),
            "debris" | "debris-field" => Some(Hazard::Debris),
            "strong-currents" => Some(Hazard::StrongCurrents),
            "rough-weather" | "rough-seas" => Some(Hazard::RoughWeather),
            "marine-accident" => Some(Hazard::MarineAccident),
            "coastal-erosion" => Some(Hazard::CoastalErosion),
            "pollution" => Some(Hazard::Pollution),
            "other" => Some(Hazard::Other),
            _ => None,
        }
    }
}

/// Risk level, ordered from least to most urgent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn parse(s: &str) -> Option<Severity> {
        match normalize(s).as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

/// Handling state of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Active,
    UnderInvestigation,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::UnderInvestigation, Status::Resolved];

    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::UnderInvestigation => "Under Investigation",
            Status::Resolved => "Resolved",
        }
    }

    pub fn parse(s: &str) -> Option<Status> {
        match normalize(s).as_str() {
            "active" => Some(Status::Active),
            "under-investigation" | "investigating" => Some(Status::UnderInvestigation),
            "resolved" => Some(Status::Resolved),
            _ => None,
        }
    }
}

/// Lowercase, with runs of whitespace/underscores collapsed to a single hyphen.
fn normalize(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .split(|c: char| c.is_ascii_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// A single hazard observation. Immutable once in the store; views only
/// derive subsets from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub category: Hazard,
    pub location: String,
    pub coordinates: Coordinates,
    pub severity: Severity,
    pub status: Status,
    pub reporter: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub description: String,
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_labels_and_slugs() {
        assert_eq!(Hazard::parse("Oil Spill"), Some(Hazard::OilSpill));
        assert_eq!(Hazard::parse("oil-spill"), Some(Hazard::OilSpill));
        assert_eq!(Severity::parse("CRITICAL"), Some(Severity::Critical));
        assert_eq!(
            Status::parse("Under Investigation"),
            Some(Status::UnderInvestigation)
        );
        assert_eq!(Status::parse("under-investigation"), Some(Status::UnderInvestigation));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Hazard::parse("kraken"), None);
        assert_eq!(Severity::parse("extreme"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn canonical_serialization_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Status::UnderInvestigation).unwrap(),
            "\"under-investigation\""
        );
        assert_eq!(serde_json::to_string(&Hazard::HighWaves).unwrap(), "\"high-waves\"");
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"critical\"");
    }

    #[test]
    fn coordinate_ranges() {
        assert!(Coordinates::new(19.076, 72.8777).in_range());
        assert!(!Coordinates::new(-91.0, 0.0).in_range());
        assert!(!Coordinates::new(0.0, 181.0).in_range());
    }
}
