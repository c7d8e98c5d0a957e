use time::{Duration, OffsetDateTime};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
    Success,
}

impl NoticeKind {
    pub fn label(self) -> &'static str {
        match self {
            NoticeKind::Info => "INFO",
            NoticeKind::Warning => "WARN",
            NoticeKind::Error => "ERROR",
            NoticeKind::Success => "OK",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub timestamp: OffsetDateTime,
}

/// Small in-memory notification list: arrival order, dismiss by id, clear all.
/// No delivery guarantees or persistence; it only feeds the bell popup.
#[derive(Default)]
pub struct NoticeCenter {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeCenter {
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn push(
        &mut self,
        kind: NoticeKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: OffsetDateTime,
    ) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        self.notices.push(Notice {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            timestamp,
        });
        id
    }

    pub fn dismiss(&mut self, id: NoticeId) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    pub fn seed(now: OffsetDateTime) -> Self {
        let mut c = Self::default();
        c.push(
            NoticeKind::Warning,
            "High Wave Alert",
            "Waves reaching 4-5 meters detected near Mumbai coast",
            now - Duration::minutes(2),
        );
        c.push(
            NoticeKind::Info,
            "System Update",
            "New weather data integration available",
            now - Duration::minutes(5),
        );
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let mut c = NoticeCenter::default();
        let a = c.push(NoticeKind::Info, "a", "first", now);
        let b = c.push(NoticeKind::Error, "b", "second", now);
        assert_eq!(c.len(), 2);

        c.dismiss(a);
        assert_eq!(c.len(), 1);
        assert_eq!(c.iter().next().map(|n| n.id), Some(b));

        c.clear();
        assert!(c.is_empty());
    }

    #[test]
    fn seed_is_ordered_newest_last() {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::hours(1);
        let c = NoticeCenter::seed(now);
        let times: Vec<_> = c.iter().map(|n| n.timestamp).collect();
        assert_eq!(times.len(), 2);
        assert!(times[0] > times[1]);
    }
}
