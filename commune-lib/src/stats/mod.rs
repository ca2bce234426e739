//! Derived statistics for the attendance page and the overview dashboard.

mod attendance;
mod overview;

pub use attendance::ABSENCE_THRESHOLD;
pub use attendance::AttendanceStats;
pub use attendance::AttendanceTotals;
pub use attendance::absence_percent;
pub use attendance::is_flagged;
pub use attendance::stats;
pub use attendance::totals;
pub use attendance::totals_by;
pub use overview::Overview;
