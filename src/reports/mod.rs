pub mod aggregate;
pub mod chart;
pub mod period;

pub use aggregate::{AccountStats, GroupSummary, SystemOverview, Totals, account_stats, group_by_category, group_by_owner, percentage_of, system_overview, totals};
pub use chart::{PALETTE, category_chart_svg};
pub use period::{MonthSelection, PeriodKind, ReportPeriod};
