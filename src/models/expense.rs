use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::errors::{StoreError, StoreResult};

pub const DEFAULT_CATEGORY: &str = "Other";
pub const UNKNOWN_OWNER: &str = "Unknown User";

// Date-picker value and the display form shown in tables
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d %b, %Y";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub user_id: u64,
    pub user_name: String,   // copied from the owner at creation
    pub user_email: String,
    pub name: String,
    pub category: String,
    pub budget: f64,
    pub spent: f64,
    pub balance: f64,        // budget - spent at creation, never recomputed
    pub date: NaiveDate,
}

impl Expense {
    pub fn category_label(&self) -> &str {
        if self.category.trim().is_empty() {
            DEFAULT_CATEGORY
        } else {
            &self.category
        }
    }

    pub fn owner_label(&self) -> &str {
        if self.user_name.trim().is_empty() {
            UNKNOWN_OWNER
        } else {
            &self.user_name
        }
    }
}

// Accepts `2025-08-16` or `16 Aug, 2025`
pub fn parse_expense_date(raw: &str) -> StoreResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, DISPLAY_DATE_FORMAT))
        .map_err(|_| StoreError::InvalidDate(raw.to_string()))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

fn parse_amount(raw: &str) -> StoreResult<f64> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| StoreError::InvalidAmount(raw.to_string()))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(StoreError::InvalidAmount(raw.to_string()));
    }
    Ok(amount)
}

fn all_present(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn parse(name: &str, amount: &str, category: &str, date: &str) -> StoreResult<Self> {
        if !all_present(&[name, amount, category, date]) {
            return Err(StoreError::MissingFields);
        }

        Ok(Self {
            name: name.trim().to_string(),
            amount: parse_amount(amount)?,
            category: category.trim().to_string(),
            date: parse_expense_date(date)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpensePatch {
    pub name: String,
    pub category: String,
    pub spent: f64,
    pub date: NaiveDate,
}

impl ExpensePatch {
    pub fn parse(name: &str, category: &str, spent: &str, date: &str) -> StoreResult<Self> {
        if !all_present(&[name, category, spent, date]) {
            return Err(StoreError::MissingFields);
        }

        Ok(Self {
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            spent: parse_amount(spent)?,
            date: parse_expense_date(date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_date_formats_normalize_to_same_day() {
        let picker = parse_expense_date("2025-08-16").unwrap();
        let display = parse_expense_date("16 Aug, 2025").unwrap();

        assert_eq!(picker, display);
        assert_eq!(picker, NaiveDate::from_ymd_opt(2025, 8, 16).unwrap());
        assert_eq!(format_date(&picker), "16 Aug, 2025");
        assert_eq!(format_iso_date(&picker), "2025-08-16");
    }

    #[test]
    fn test_unparsable_date_rejected() {
        assert_eq!(
            parse_expense_date("yesterday"),
            Err(StoreError::InvalidDate("yesterday".into()))
        );
    }

    #[test]
    fn test_draft_requires_every_field() {
        assert_eq!(
            ExpenseDraft::parse("Lunch", "", "Food", "2025-08-15"),
            Err(StoreError::MissingFields)
        );
        assert_eq!(
            ExpenseDraft::parse("  ", "10", "Food", "2025-08-15"),
            Err(StoreError::MissingFields)
        );
    }

    #[test]
    fn test_draft_parses_amount_as_float() {
        let draft = ExpenseDraft::parse("Lunch", "12.5", "Food", "2025-08-15").unwrap();
        assert_eq!(draft.amount, 12.5);

        assert!(matches!(
            ExpenseDraft::parse("Lunch", "twelve", "Food", "2025-08-15"),
            Err(StoreError::InvalidAmount(_))
        ));
        assert!(matches!(
            ExpenseDraft::parse("Lunch", "-3", "Food", "2025-08-15"),
            Err(StoreError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_patch_requires_every_field() {
        assert_eq!(
            ExpensePatch::parse("Taxi", "Travel", "40", ""),
            Err(StoreError::MissingFields)
        );
        let patch = ExpensePatch::parse("Taxi", "Travel", "40", "16 Aug, 2025").unwrap();
        assert_eq!(patch.spent, 40.0);
    }

    #[test]
    fn test_blank_labels_fall_back() {
        let expense = Expense {
            id: 1,
            user_id: 2,
            user_name: String::new(),
            user_email: String::new(),
            name: "Misc".into(),
            category: " ".into(),
            budget: 1.0,
            spent: 1.0,
            balance: 0.0,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(expense.category_label(), "Other");
        assert_eq!(expense.owner_label(), "Unknown User");
    }
}
