mod account;
mod expense;
mod forms;
mod session;

pub use account::{Account, NewAccount, Role};
pub use expense::{Expense, ExpenseDraft, ExpensePatch, format_date, format_iso_date, parse_expense_date};
pub use forms::{LoginForm, SignupForm, ExpenseForm, EditExpenseForm, DeleteForm, PageQuery, ReportQuery};
pub use session::SessionIdentity;
