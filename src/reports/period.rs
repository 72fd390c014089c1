use chrono::{Datelike, Months, NaiveDate};
use crate::errors::{StoreError, StoreResult};
use crate::models::Expense;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSelection {
    first_day: NaiveDate,
}

impl MonthSelection {
    pub fn parse(raw: &str) -> StoreResult<Self> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
            .map(|first_day| Self { first_day })
            .map_err(|_| StoreError::InvalidMonth(raw.to_string()))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    // first of month <= date < first of next month
    pub fn contains(&self, date: &NaiveDate) -> bool {
        let end = self.first_day.checked_add_months(Months::new(1));
        *date >= self.first_day && end.map_or(true, |end| *date < end)
    }

    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    pub fn input_value(&self) -> String {
        self.first_day.format("%Y-%m").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Monthly,
    Yearly,
}

impl PeriodKind {
    pub fn from_query(period: Option<&str>) -> Self {
        match period {
            Some("yearly") => PeriodKind::Yearly,
            _ => PeriodKind::Monthly,
        }
    }
}

// Yearly reports use the year of the selected month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub kind: PeriodKind,
    pub month: MonthSelection,
}

impl ReportPeriod {
    pub fn from_query(period: Option<&str>, month: Option<&str>, fallback: MonthSelection) -> StoreResult<Self> {
        let kind = PeriodKind::from_query(period);
        let month = match month.filter(|m| !m.trim().is_empty()) {
            Some(raw) => MonthSelection::parse(raw)?,
            None => fallback,
        };
        Ok(Self { kind, month })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        match self.kind {
            PeriodKind::Monthly => self.month.contains(date),
            PeriodKind::Yearly => date.year() == self.month.year(),
        }
    }

    pub fn filter<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.contains(&e.date)).collect()
    }

    pub fn title(&self) -> String {
        match self.kind {
            PeriodKind::Monthly => self.month.label(),
            PeriodKind::Yearly => format!("Year {}", self.month.year()),
        }
    }

    pub fn is_yearly(&self) -> bool {
        self.kind == PeriodKind::Yearly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_month() {
        let august = MonthSelection::parse("2025-08").unwrap();
        assert_eq!(august.label(), "August 2025");
        assert_eq!(august.input_value(), "2025-08");

        assert!(matches!(MonthSelection::parse("2025-13"), Err(StoreError::InvalidMonth(_))));
        assert!(MonthSelection::parse("August").is_err());
    }

    #[test]
    fn test_month_is_a_range_not_a_substring() {
        let august = MonthSelection::parse("2025-08").unwrap();

        assert!(august.contains(&date(2025, 8, 1)));
        assert!(august.contains(&date(2025, 8, 31)));
        assert!(!august.contains(&date(2025, 9, 1)));
        assert!(!august.contains(&date(2025, 7, 31)));
        // Day 08 of another month used to match the "08" segment
        assert!(!august.contains(&date(2025, 3, 8)));
        assert!(!august.contains(&date(2024, 8, 16)));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let december = MonthSelection::parse("2024-12").unwrap();
        assert!(december.contains(&date(2024, 12, 31)));
        assert!(!december.contains(&date(2025, 1, 1)));
    }

    #[test]
    fn test_period_from_query() {
        let fallback = MonthSelection::containing(date(2025, 8, 16));

        let monthly = ReportPeriod::from_query(None, None, fallback).unwrap();
        assert_eq!(monthly.kind, PeriodKind::Monthly);
        assert_eq!(monthly.title(), "August 2025");

        let yearly = ReportPeriod::from_query(Some("yearly"), Some("2024-02"), fallback).unwrap();
        assert!(yearly.is_yearly());
        assert_eq!(yearly.title(), "Year 2024");
        assert!(yearly.contains(&date(2024, 11, 5)));
        assert!(!yearly.contains(&date(2025, 1, 5)));

        assert!(ReportPeriod::from_query(Some("monthly"), Some("bad"), fallback).is_err());
    }
}
