use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

pub fn parse_rfc3339(s: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(s.trim(), &Rfc3339).ok()
}

/// Parse a `YYYY-MM-DD` day as typed into the date filter field.
pub fn parse_day(s: &str) -> Option<Date> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]")).ok()
}

pub fn utc_string(dt: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02} UTC",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute()
    )
}

/// Coarse "how long ago" label for alert rows and notices.
pub fn relative(now: OffsetDateTime, then: OffsetDateTime) -> String {
    let elapsed = now - then;
    let minutes = elapsed.whole_minutes();
    if minutes < 1 {
        return "Just now".into();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.whole_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    utc_string(then)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};
    use time::Duration;

    #[test]
    fn rfc3339_round_trip() {
        let dt = parse_rfc3339("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(dt, datetime!(2024-01-15 10:30 UTC));
        assert_eq!(dt.date(), date!(2024 - 01 - 15));
        assert!(parse_rfc3339("yesterday-ish").is_none());
    }

    #[test]
    fn day_parsing() {
        assert_eq!(parse_day("2024-01-15"), Some(date!(2024 - 01 - 15)));
        assert_eq!(parse_day(" 2024-01-15 "), Some(date!(2024 - 01 - 15)));
        assert_eq!(parse_day("15/01/2024"), None);
        assert_eq!(parse_day(""), None);
    }

    #[test]
    fn relative_labels() {
        let now = datetime!(2024-01-15 12:00 UTC);
        assert_eq!(relative(now, now - Duration::seconds(20)), "Just now");
        assert_eq!(relative(now, now - Duration::minutes(2)), "2m ago");
        assert_eq!(relative(now, now - Duration::hours(3)), "3h ago");
        assert_eq!(relative(now, now - Duration::days(2)), "2024-01-13 12:00 UTC");
    }
}
