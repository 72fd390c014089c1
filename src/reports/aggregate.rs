use std::collections::HashMap;
use serde::Serialize;
use crate::models::{Account, Expense, Role};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub spent: f64,
    pub budget: f64,
    pub entries: usize,
}

impl Totals {
    pub fn utilization(&self) -> String {
        if self.budget > 0.0 {
            format!("{:.2}", self.spent / self.budget * 100.0)
        } else {
            "0.00".to_string()
        }
    }
}

pub fn totals<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Totals {
    expenses.into_iter().fold(Totals::default(), |acc, e| Totals {
        spent: acc.spent + e.spent,
        budget: acc.budget + e.budget,
        entries: acc.entries + 1,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub key: String,
    pub total_spent: f64,
    pub entries: usize,
    pub percentage: f64,
}

pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

// Groups keep the order in which their key was first seen
fn group_by<'a, F>(expenses: &[&'a Expense], key: F) -> Vec<GroupSummary>
where
    F: Fn(&'a Expense) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupSummary> = Vec::new();

    for &expense in expenses {
        let k = key(expense);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push(GroupSummary {
                key: k.to_string(),
                total_spent: 0.0,
                entries: 0,
                percentage: 0.0,
            });
            groups.len() - 1
        });
        groups[slot].total_spent += expense.spent;
        groups[slot].entries += 1;
    }

    let grand_total: f64 = expenses.iter().map(|e| e.spent).sum();
    for group in &mut groups {
        group.percentage = percentage_of(group.total_spent, grand_total);
    }
    groups
}

pub fn group_by_category(expenses: &[&Expense]) -> Vec<GroupSummary> {
    group_by(expenses, Expense::category_label)
}

pub fn group_by_owner(expenses: &[&Expense]) -> Vec<GroupSummary> {
    group_by(expenses, Expense::owner_label)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountStats {
    pub account_id: u64,
    pub totals: Totals,
}

pub fn account_stats(accounts: &[Account], expenses: &[Expense]) -> Vec<AccountStats> {
    accounts
        .iter()
        .map(|account| AccountStats {
            account_id: account.id,
            totals: totals(expenses.iter().filter(|e| e.user_id == account.id)),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SystemOverview {
    pub total_users: usize,
    pub admin_users: usize,
    pub regular_users: usize,
    pub total_expenses: usize,
}

pub fn system_overview(accounts: &[Account], expenses: &[Expense]) -> SystemOverview {
    let admin_users = accounts.iter().filter(|a| a.role == Role::Admin).count();
    SystemOverview {
        total_users: accounts.len(),
        admin_users,
        regular_users: accounts.len() - admin_users,
        total_expenses: expenses.len(),
    }
}
