use serde::Deserialize;
use crate::errors::{StoreError, StoreResult};
use super::{ExpenseDraft, ExpensePatch, NewAccount};

// Missing fields deserialize as empty strings so they surface as
// validation messages instead of extractor rejections.

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn into_new_account(self) -> StoreResult<NewAccount> {
        let required = [&self.first_name, &self.last_name, &self.email, &self.password];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(StoreError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(StoreError::PasswordMismatch);
        }

        Ok(NewAccount {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
        })
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ExpenseForm {
    pub expense_name: String,
    pub amount: String,
    pub category: String,
    pub expense_date: String,
}

impl ExpenseForm {
    pub fn to_draft(&self) -> StoreResult<ExpenseDraft> {
        ExpenseDraft::parse(&self.expense_name, &self.amount, &self.category, &self.expense_date)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct EditExpenseForm {
    pub name: String,
    pub category: String,
    pub spent: String,
    pub date: String,
    pub back: String,   // page the edit was opened from
}

impl EditExpenseForm {
    // Only the two owner pages qualify
    pub fn return_path(&self) -> &'static str {
        match self.back.as_str() {
            "/dashboard" => "/dashboard",
            _ => "/expense-list",
        }
    }

    pub fn to_patch(&self) -> StoreResult<ExpensePatch> {
        ExpensePatch::parse(&self.name, &self.category, &self.spent, &self.date)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct DeleteForm {
    pub confirm: Option<String>,
}

impl DeleteForm {
    pub fn is_confirmed(&self) -> bool {
        self.confirm.as_deref() == Some("yes")
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PageQuery {
    pub error: Option<String>,
    pub form: Option<String>,   // "signup" switches the login page
    pub edit: Option<u64>,      // expense row opened for inline edit
    pub user: Option<String>,   // admin filter by owner name
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ReportQuery {
    pub period: Option<String>, // "monthly" or "yearly"
    pub month: Option<String>,  // "YYYY-MM"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            first_name: "Ravi".into(),
            last_name: "Shah".into(),
            email: "ravi@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_signup_password_mismatch() {
        assert_eq!(
            signup("abc", "abd").into_new_account().unwrap_err(),
            StoreError::PasswordMismatch
        );
    }

    #[test]
    fn test_signup_missing_field() {
        let mut form = signup("abc", "abc");
        form.last_name.clear();
        assert_eq!(form.into_new_account().unwrap_err(), StoreError::MissingFields);
    }

    #[test]
    fn test_signup_builds_new_account() {
        let account = signup("abc", "abc").into_new_account().unwrap();
        assert_eq!(account.display_name(), "Ravi Shah");
        assert_eq!(account.username(), "ravi");
    }

    #[test]
    fn test_edit_returns_to_known_pages_only() {
        let mut form = EditExpenseForm { back: "/dashboard".into(), ..Default::default() };
        assert_eq!(form.return_path(), "/dashboard");
        form.back = "https://elsewhere.example".into();
        assert_eq!(form.return_path(), "/expense-list");
    }

    #[test]
    fn test_delete_requires_explicit_yes() {
        assert!(!DeleteForm::default().is_confirmed());
        assert!(!DeleteForm { confirm: Some("no".into()) }.is_confirmed());
        assert!(DeleteForm { confirm: Some("yes".into()) }.is_confirmed());
    }
}
