use chrono::NaiveDate;
use crate::errors::{StoreError, StoreResult};
use crate::models::{Account, Expense, ExpenseDraft, ExpensePatch, NewAccount, Role};

#[derive(Debug, Clone)]
pub struct TrackerStore {
    accounts: Vec<Account>,
    expenses: Vec<Expense>,
    // Ids come from counters, never from list length, so they are not
    // reused after deletions
    next_account_id: u64,
    next_expense_id: u64,
}

impl Default for TrackerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerStore {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            expenses: Vec::new(),
            next_account_id: 1,
            next_expense_id: 1,
        }
    }

    pub fn seeded() -> Self {
        let mut store = Self::new();

        store.insert_account("admin", "admin123", "admin@example.com", Role::Admin, "Admin User");
        let owner = store.insert_account("user1", "user123", "user1@example.com", Role::User, "Meet Patel");

        let seeds = [
            ("Bus Ticket", "Travel", 150.00, (2025, 8, 16)),
            ("Lunch", "Food", 750.00, (2025, 8, 15)),
        ];
        for (name, category, amount, (y, m, d)) in seeds {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                store.push_expense(&owner, ExpenseDraft {
                    name: name.to_string(),
                    amount,
                    category: category.to_string(),
                    date,
                });
            }
        }

        store
    }

    fn insert_account(&mut self, username: &str, password: &str, email: &str, role: Role, name: &str) -> Account {
        let account = Account {
            id: self.next_account_id,
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            role,
            name: name.to_string(),
        };
        self.next_account_id += 1;
        self.accounts.push(account.clone());
        account
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: u64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    // Emails are not checked for uniqueness
    pub fn signup(&mut self, new_account: NewAccount) -> &Account {
        let username = new_account.username();
        let name = new_account.display_name();
        self.insert_account(&username, &new_account.password, &new_account.email, Role::User, &name);
        &self.accounts[self.accounts.len() - 1]
    }

    pub fn authenticate(&self, email: &str, password: &str) -> StoreResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .ok_or(StoreError::InvalidCredentials)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn expenses_for(&self, account_id: u64) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| e.user_id == account_id).collect()
    }

    pub fn expenses_by_owner_name(&self, owner: Option<&str>) -> Vec<&Expense> {
        match owner {
            Some(name) => self.expenses.iter().filter(|e| e.user_name == name).collect(),
            None => self.expenses.iter().collect(),
        }
    }

    pub fn owner_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for expense in &self.expenses {
            if !names.iter().any(|n| n == &expense.user_name) {
                names.push(expense.user_name.clone());
            }
        }
        names
    }

    pub fn create_expense(&mut self, owner_id: u64, draft: ExpenseDraft) -> StoreResult<&Expense> {
        let owner = self
            .account(owner_id)
            .cloned()
            .ok_or(StoreError::UnknownAccount(owner_id))?;

        Ok(self.push_expense(&owner, draft))
    }

    fn push_expense(&mut self, owner: &Account, draft: ExpenseDraft) -> &Expense {
        let id = self.next_expense_id;
        self.next_expense_id += 1;

        let budget = draft.amount;
        let spent = draft.amount;
        self.expenses.push(Expense {
            id,
            user_id: owner.id,
            user_name: owner.name.clone(),
            user_email: owner.email.clone(),
            name: draft.name,
            category: draft.category,
            budget,
            spent,
            balance: budget - spent,
            date: draft.date,
        });

        &self.expenses[self.expenses.len() - 1]
    }

    // Balance keeps its creation value
    pub fn update_expense(&mut self, id: u64, patch: ExpensePatch) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == id) {
            Some(expense) => {
                expense.name = patch.name;
                expense.category = patch.category;
                expense.spent = patch.spent;
                expense.budget = patch.spent;
                expense.date = patch.date;
                true
            }
            None => false,
        }
    }

    pub fn delete_expense(&mut self, id: u64) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, amount: f64) -> ExpenseDraft {
        ExpenseDraft {
            name: name.to_string(),
            amount,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        }
    }

    fn patch(name: &str, spent: f64) -> ExpensePatch {
        ExpensePatch {
            name: name.to_string(),
            category: "Travel".to_string(),
            spent,
            date: NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
        }
    }

    #[test]
    fn test_seed_data() {
        let store = TrackerStore::seeded();

        assert_eq!(store.accounts().len(), 2);
        assert_eq!(store.accounts()[0].role, Role::Admin);
        assert_eq!(store.expenses().len(), 2);
        assert!(store.expenses().iter().all(|e| e.user_name == "Meet Patel"));
        assert_eq!(store.expenses().iter().map(|e| e.spent).sum::<f64>(), 900.0);
    }

    #[test]
    fn test_signup_appends_user_account() {
        let mut store = TrackerStore::seeded();
        let before = store.accounts().len();

        let account = store.signup(NewAccount {
            first_name: "Priya".into(),
            last_name: "Nair".into(),
            email: "priya@example.com".into(),
            password: "pw".into(),
        });
        assert_eq!(account.role, Role::User);
        assert_eq!(account.username, "priya");
        assert_eq!(account.name, "Priya Nair");
        assert_eq!(account.id, 3);
        assert_eq!(store.accounts().len(), before + 1);
    }

    #[test]
    fn test_signup_does_not_reject_duplicate_email() {
        let mut store = TrackerStore::seeded();
        store.signup(NewAccount {
            first_name: "Second".into(),
            last_name: "User".into(),
            email: "user1@example.com".into(),
            password: "other".into(),
        });
        assert_eq!(store.accounts().len(), 3);
    }

    #[test]
    fn test_authenticate_exact_match_only() {
        let store = TrackerStore::seeded();

        let admin = store.authenticate("admin@example.com", "admin123").unwrap();
        assert_eq!(admin.role, Role::Admin);

        assert_eq!(
            store.authenticate("ADMIN@example.com", "admin123").unwrap_err(),
            StoreError::InvalidCredentials
        );
        assert!(store.authenticate("user1@example.com", "wrong").is_err());
        assert!(!StoreError::InvalidCredentials.to_string().is_empty());
    }

    #[test]
    fn test_create_expense_copies_owner_and_zero_balance() {
        let mut store = TrackerStore::seeded();

        let expense = store.create_expense(2, draft("Coffee", 80.0)).unwrap().clone();
        assert_eq!(expense.id, 3);
        assert_eq!(expense.user_id, 2);
        assert_eq!(expense.user_name, "Meet Patel");
        assert_eq!(expense.user_email, "user1@example.com");
        assert_eq!(expense.budget, 80.0);
        assert_eq!(expense.spent, 80.0);
        assert_eq!(expense.balance, 0.0);
    }

    #[test]
    fn test_create_expense_for_unknown_owner() {
        let mut store = TrackerStore::new();
        assert_eq!(
            store.create_expense(7, draft("Orphan", 1.0)).unwrap_err(),
            StoreError::UnknownAccount(7)
        );
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = TrackerStore::seeded();

        store.delete_expense(1).unwrap();
        let id = store.create_expense(2, draft("Snacks", 10.0)).unwrap().id;
        assert_eq!(id, 3);
        assert_eq!(store.expenses().iter().filter(|e| e.id == 2).count(), 1);
    }

    #[test]
    fn test_update_changes_only_target() {
        let mut store = TrackerStore::seeded();
        let untouched = store.expense(2).unwrap().clone();

        assert!(store.update_expense(1, patch("Train", 200.0)));

        let updated = store.expense(1).unwrap();
        assert_eq!(updated.name, "Train");
        assert_eq!(updated.category, "Travel");
        assert_eq!(updated.spent, 200.0);
        assert_eq!(updated.budget, 200.0);
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2025, 9, 2).unwrap());
        assert_eq!(updated.balance, 0.0);
        assert_eq!(store.expense(2).unwrap(), &untouched);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = TrackerStore::seeded();
        let before = store.expenses().to_vec();

        assert!(!store.update_expense(42, patch("Ghost", 1.0)));
        assert_eq!(store.expenses(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = TrackerStore::seeded();

        let removed = store.delete_expense(2).unwrap();
        assert_eq!(removed.name, "Lunch");
        assert_eq!(store.expenses().len(), 1);

        assert!(store.delete_expense(2).is_none());
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn test_ownership_and_owner_name_filters() {
        let mut store = TrackerStore::seeded();
        store.create_expense(1, draft("Paper", 5.0)).unwrap();

        assert_eq!(store.expenses_for(2).len(), 2);
        assert_eq!(store.expenses_for(1).len(), 1);
        assert_eq!(store.expenses_by_owner_name(None).len(), 3);
        assert_eq!(store.expenses_by_owner_name(Some("Admin User")).len(), 1);
        assert_eq!(store.expenses_by_owner_name(Some("admin user")).len(), 0);
        assert_eq!(store.owner_names(), vec!["Meet Patel", "Admin User"]);
    }
}
