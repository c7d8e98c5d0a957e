mod filter;
mod notice;
mod report;
mod store;

pub use filter::{filter_reports, FilterCriteria, ReportStats};
pub use notice::{Notice, NoticeCenter, NoticeId, NoticeKind};
pub use report::{Coordinates, Hazard, Report, ReportId, Severity, Status};
pub use store::ReportStore;
