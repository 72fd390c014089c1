use std::sync::Arc;
use tokio::sync::RwLock;
use crate::errors::StoreResult;
use crate::models::{Account, Expense, ExpenseDraft, ExpensePatch, NewAccount};
use super::TrackerStore;

// Reads copy out what they need; no lock is held across a render
pub struct StoreService {
    store: Arc<RwLock<TrackerStore>>,
}

impl StoreService {
    pub fn new(store: TrackerStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn signup(&self, new_account: NewAccount) -> Account {
        let mut store = self.store.write().await;
        let account = store.signup(new_account).clone();
        tracing::info!("Registered account {} ({})", account.id, account.email);
        account
    }

    pub async fn login(&self, email: &str, password: &str) -> StoreResult<Account> {
        let store = self.store.read().await;
        store.authenticate(email, password).cloned()
    }

    pub async fn get_account(&self, id: u64) -> Option<Account> {
        self.store.read().await.account(id).cloned()
    }

    pub async fn accounts(&self) -> Vec<Account> {
        self.store.read().await.accounts().to_vec()
    }

    pub async fn all_expenses(&self) -> Vec<Expense> {
        self.store.read().await.expenses().to_vec()
    }

    pub async fn get_expense(&self, id: u64) -> Option<Expense> {
        self.store.read().await.expense(id).cloned()
    }

    pub async fn expenses_for(&self, account_id: u64) -> Vec<Expense> {
        let store = self.store.read().await;
        store.expenses_for(account_id).into_iter().cloned().collect()
    }

    pub async fn expenses_by_owner_name(&self, owner: Option<&str>) -> Vec<Expense> {
        let store = self.store.read().await;
        store.expenses_by_owner_name(owner).into_iter().cloned().collect()
    }

    pub async fn owner_names(&self) -> Vec<String> {
        self.store.read().await.owner_names()
    }

    pub async fn create_expense(&self, owner_id: u64, draft: ExpenseDraft) -> StoreResult<Expense> {
        let mut store = self.store.write().await;
        let expense = store.create_expense(owner_id, draft)?.clone();
        tracing::info!("Created expense {} for account {}", expense.id, owner_id);
        Ok(expense)
    }

    pub async fn update_owned_expense(&self, owner_id: u64, id: u64, patch: ExpensePatch) -> bool {
        let mut store = self.store.write().await;
        if !owns(&store, owner_id, id) {
            tracing::warn!("Account {} cannot edit expense {}", owner_id, id);
            return false;
        }

        let updated = store.update_expense(id, patch);
        tracing::info!("Updated expense {}", id);
        updated
    }

    pub async fn delete_owned_expense(&self, owner_id: u64, id: u64) -> Option<Expense> {
        let mut store = self.store.write().await;
        if !owns(&store, owner_id, id) {
            tracing::warn!("Account {} cannot delete expense {}", owner_id, id);
            return None;
        }

        let removed = store.delete_expense(id);
        tracing::info!("Deleted expense {}", id);
        removed
    }
}

fn owns(store: &TrackerStore, owner_id: u64, expense_id: u64) -> bool {
    store
        .expense(expense_id)
        .map_or(false, |e| e.user_id == owner_id)
}

impl Clone for StoreService {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn patch() -> ExpensePatch {
        ExpensePatch {
            name: "Cab".into(),
            category: "Travel".into(),
            spent: 99.0,
            date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_clones_share_one_store() {
        let service = StoreService::new(TrackerStore::seeded());
        let other = service.clone();

        other
            .signup(NewAccount {
                first_name: "Dev".into(),
                last_name: "Kumar".into(),
                email: "dev@example.com".into(),
                password: "pw".into(),
            })
            .await;

        assert_eq!(service.accounts().await.len(), 3);
        assert_eq!(service.login("dev@example.com", "pw").await.unwrap().name, "Dev Kumar");
    }

    #[tokio::test]
    async fn test_edit_and_delete_require_ownership() {
        let service = StoreService::new(TrackerStore::seeded());

        // Expense 1 belongs to account 2, not the admin
        assert!(!service.update_owned_expense(1, 1, patch()).await);
        assert!(service.delete_owned_expense(1, 1).await.is_none());
        assert_eq!(service.get_expense(1).await.unwrap().name, "Bus Ticket");

        assert!(service.update_owned_expense(2, 1, patch()).await);
        assert_eq!(service.get_expense(1).await.unwrap().name, "Cab");
        assert!(service.delete_owned_expense(2, 1).await.is_some());
        assert_eq!(service.all_expenses().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_expense_is_noop() {
        let service = StoreService::new(TrackerStore::seeded());

        assert!(!service.update_owned_expense(2, 99, patch()).await);
        assert!(service.delete_owned_expense(2, 99).await.is_none());
        assert_eq!(service.all_expenses().await.len(), 2);
    }
}
