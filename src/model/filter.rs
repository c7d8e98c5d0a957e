use time::Date;

use crate::model::{Hazard, Report, Severity, Status};

/// User-chosen predicates for the reports-history and map views. Every field
/// defaults to "match everything"; the default value is the identity filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring over category label, location, and reporter.
    pub query: String,
    pub category: Option<Hazard>,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
    /// Matches reports whose timestamp falls on this UTC calendar day.
    pub day: Option<Date>,
}

impl FilterCriteria {
    pub fn matches(&self, report: &Report) -> bool {
        self.matches_query(report)
            && self.category.map_or(true, |c| report.category == c)
            && self.severity.map_or(true, |s| report.severity == s)
            && self.status.map_or(true, |s| report.status == s)
            && self.day.map_or(true, |d| report.timestamp.date() == d)
    }

    fn matches_query(&self, report: &Report) -> bool {
        let q = self.query.trim();
        if q.is_empty() {
            return true;
        }

        let q = q.to_lowercase();
        report.category.label().to_lowercase().contains(&q)
            || report.location.to_lowercase().contains(&q)
            || report.reporter.to_lowercase().contains(&q)
    }
}

/// Derive the visible subset: the stable-order subsequence of `reports`
/// satisfying all active criteria. Pure; never mutates the input.
pub fn filter_reports<'a>(reports: &'a [Report], criteria: &FilterCriteria) -> Vec<&'a Report> {
    reports.iter().filter(|r| criteria.matches(r)).collect()
}

/// Summary counters over a (usually already filtered) collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub critical: usize,
    pub verified: usize,
    pub resolved: usize,
}

impl ReportStats {
    pub fn compute<'a, I>(reports: I) -> Self
    where
        I: IntoIterator<Item = &'a Report>,
    {
        let mut stats = Self::default();
        for r in reports {
            stats.total += 1;
            if r.severity == Severity::Critical {
                stats.critical += 1;
            }
            if r.verified {
                stats.verified += 1;
            }
            if r.status == Status::Resolved {
                stats.resolved += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReportStore;
    use time::macros::date;

    fn seed() -> Vec<Report> {
        ReportStore::seed().as_slice().to_vec()
    }

    fn ids(reports: &[&Report]) -> Vec<String> {
        reports.iter().map(|r| r.id.as_str().to_owned()).collect()
    }

    #[test]
    fn default_criteria_is_identity() {
        let reports = seed();
        let visible = filter_reports(&reports, &FilterCriteria::default());
        assert_eq!(visible.len(), reports.len());
        assert_eq!(
            ids(&visible),
            reports.iter().map(|r| r.id.as_str().to_owned()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn output_is_stable_order_subsequence() {
        let reports = seed();
        let criteria = FilterCriteria {
            status: Some(Status::Active),
            ..Default::default()
        };
        let visible = filter_reports(&reports, &criteria);
        assert!(visible.len() <= reports.len());

        // every output record appears in the input, in the same relative order
        let mut last_pos = 0;
        for v in &visible {
            let pos = reports
                .iter()
                .position(|r| r.id == v.id)
                .expect("output record missing from input");
            assert!(pos >= last_pos);
            last_pos = pos;
        }
    }

    #[test]
    fn filtering_is_idempotent_and_composable() {
        let reports = seed();
        let c1 = FilterCriteria {
            status: Some(Status::Active),
            ..Default::default()
        };
        let c2 = FilterCriteria {
            severity: Some(Severity::Medium),
            ..Default::default()
        };
        let both = FilterCriteria {
            status: Some(Status::Active),
            severity: Some(Severity::Medium),
            ..Default::default()
        };

        assert_eq!(
            ids(&filter_reports(&reports, &c1)),
            ids(&filter_reports(&reports, &c1))
        );

        let staged: Vec<&Report> = filter_reports(&reports, &c1)
            .into_iter()
            .filter(|r| c2.matches(r))
            .collect();
        assert_eq!(ids(&staged), ids(&filter_reports(&reports, &both)));
    }

    #[test]
    fn query_is_case_insensitive() {
        let reports = seed();
        let lower = FilterCriteria {
            query: "oil".into(),
            ..Default::default()
        };
        let upper = FilterCriteria {
            query: "OIL".into(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_reports(&reports, &lower)),
            ids(&filter_reports(&reports, &upper))
        );
        assert_eq!(ids(&filter_reports(&reports, &lower)), vec!["RPT-002"]);
    }

    #[test]
    fn query_matches_location_and_reporter() {
        let reports = seed();
        let by_location = FilterCriteria {
            query: "chennai".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reports(&reports, &by_location)), vec!["RPT-002"]);

        let by_reporter = FilterCriteria {
            query: "sharma".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reports(&reports, &by_reporter)), vec!["RPT-001"]);
    }

    #[test]
    fn severity_and_status_selectors() {
        let reports = seed();
        let critical = FilterCriteria {
            severity: Some(Severity::Critical),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reports(&reports, &critical)), vec!["RPT-002"]);

        let resolved = FilterCriteria {
            status: Some(Status::Resolved),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reports(&reports, &resolved)), vec!["RPT-003"]);
    }

    #[test]
    fn category_selector() {
        let reports = seed();
        let criteria = FilterCriteria {
            category: Some(Hazard::StrongCurrents),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reports(&reports, &criteria)), vec!["RPT-004"]);
    }

    #[test]
    fn day_selector_matches_utc_calendar_day() {
        let reports = seed();
        let criteria = FilterCriteria {
            day: Some(date!(2024 - 01 - 14)),
            ..Default::default()
        };
        assert_eq!(ids(&filter_reports(&reports, &criteria)), vec!["RPT-003"]);

        let empty_day = FilterCriteria {
            day: Some(date!(2023 - 06 - 01)),
            ..Default::default()
        };
        assert!(filter_reports(&reports, &empty_day).is_empty());
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let reports = seed();
        let criteria = FilterCriteria {
            query: "atlantis".into(),
            ..Default::default()
        };
        assert!(filter_reports(&reports, &criteria).is_empty());
    }

    #[test]
    fn stats_over_first_three_seed_reports() {
        let reports = seed();
        let stats = ReportStats::compute(reports.iter().take(3));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.verified, 2);
        assert_eq!(stats.resolved, 1);
    }

    #[test]
    fn stats_follow_the_filtered_subset() {
        let reports = seed();
        let criteria = FilterCriteria {
            status: Some(Status::Active),
            ..Default::default()
        };
        let visible = filter_reports(&reports, &criteria);
        let stats = ReportStats::compute(visible.iter().copied());
        assert_eq!(stats.total, visible.len());
        assert_eq!(stats.resolved, 0);
    }
}
