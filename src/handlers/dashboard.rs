use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;
use crate::AppState;
use crate::errors::AppResult;
use crate::models::{Expense, PageQuery};
use crate::reports::{account_stats, system_overview, totals};
use crate::views::{self, error_block, format_currency, load_template, render_header, render_sidebar, tables};
use super::{banner_html, current_account, take_flash};

const NO_EXPENSES: &str = r#"<div class="no-expenses">
    <div class="no-expenses-icon">📝</div>
    <h3>No Expenses Yet</h3>
    <p>You haven't added any expenses yet. Click "Add New Expense" to get started!</p>
</div>"#;

// Newest date first, later ids first within a day
fn newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
}

fn owned_table(rows: &str) -> String {
    format!(
        r#"<div class="table-container">
    <table class="table">
        <thead>
            <tr><th>EXPENSE NAME</th><th>CATEGORY</th><th>AMOUNT</th><th>DATE</th><th>ACTIONS</th></tr>
        </thead>
        <tbody>
{}
        </tbody>
    </table>
</div>"#,
        rows
    )
}

pub async fn serve_user_dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;
    tracing::info!("Accessing user dashboard for account {}", account.id);

    let view = &state.config.view;
    let mut expenses = state.store.expenses_for(account.id).await;
    let stats = totals(&expenses);
    newest_first(&mut expenses);

    let limit = view.recent_expense_limit;
    let recent: Vec<&Expense> = expenses.iter().take(limit).collect();

    let content = if expenses.is_empty() {
        NO_EXPENSES.to_string()
    } else {
        let mut table = owned_table(&tables::own_expense_rows(&recent, &view.currency_symbol, query.edit, "/dashboard"));
        if expenses.len() > limit {
            table.push_str(&format!(
                r#"<div class="view-more"><a href="/expense-list" class="btn btn-outline-primary">View All {} Expenses</a></div>"#,
                expenses.len()
            ));
        }
        table
    };

    let banner = banner_html(take_flash(&session).await, view.banner_dismiss_ms);
    let html = load_template(view, "user_dashboard.html")?
        .replace("{{sidebar}}", &render_sidebar(&account, "/dashboard"))
        .replace("{{header}}", &render_header(&account))
        .replace("{{banner}}", &banner)
        .replace("{{error}}", &error_block(query.error.as_deref()))
        .replace("{{total_spent}}", &format_currency(&view.currency_symbol, stats.spent))
        .replace("{{total_entries}}", &stats.entries.to_string())
        .replace("{{expenses}}", &content);

    Ok(Html(html).into_response())
}

pub async fn serve_expense_list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;
    tracing::info!("Accessing expense list for account {}", account.id);

    let view = &state.config.view;
    let mut expenses = state.store.expenses_for(account.id).await;
    newest_first(&mut expenses);

    let content = if expenses.is_empty() {
        NO_EXPENSES.to_string()
    } else {
        let refs: Vec<&Expense> = expenses.iter().collect();
        owned_table(&tables::own_expense_rows(&refs, &view.currency_symbol, query.edit, "/expense-list"))
    };

    let html = load_template(view, "expense_list.html")?
        .replace("{{sidebar}}", &render_sidebar(&account, "/expense-list"))
        .replace("{{header}}", &render_header(&account))
        .replace("{{error}}", &error_block(query.error.as_deref()))
        .replace("{{expenses}}", &content);

    Ok(Html(html).into_response())
}

pub async fn serve_admin_dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;
    tracing::info!("Accessing admin dashboard");

    let view = &state.config.view;
    let all = state.store.all_expenses().await;
    let stats = totals(&all);

    // "all" and an empty value both mean no filter
    let selected = query.user.as_deref().filter(|u| !u.is_empty() && *u != "all");
    let filtered = state.store.expenses_by_owner_name(selected).await;
    let rows: Vec<&Expense> = filtered.iter().collect();
    tracing::debug!("Admin filter {:?} matched {} expenses", selected, rows.len());

    let owners = state.store.owner_names().await;
    let all_option = format!(
        r#"<option value="all"{}>All Users</option>"#,
        if selected.is_none() { " selected" } else { "" }
    );

    let html = load_template(view, "admin_dashboard.html")?
        .replace("{{sidebar}}", &render_sidebar(&account, "/admin"))
        .replace("{{header}}", &render_header(&account))
        .replace("{{user_options}}", &format!("{}\n{}", all_option, views::select_options(&owners, selected)))
        .replace("{{total_spent}}", &format_currency(&view.currency_symbol, stats.spent))
        .replace("{{total_budget}}", &format_currency(&view.currency_symbol, stats.budget))
        .replace("{{total_entries}}", &stats.entries.to_string())
        .replace("{{utilization}}", &stats.utilization())
        .replace("{{expenses}}", &tables::owner_expense_rows(&rows, &view.currency_symbol));

    Ok(Html(html).into_response())
}

pub async fn serve_user_management(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;
    tracing::info!("Accessing user management");

    let view = &state.config.view;
    let accounts = state.store.accounts().await;
    let expenses = state.store.all_expenses().await;
    let stats = account_stats(&accounts, &expenses);
    let overview = system_overview(&accounts, &expenses);

    let html = load_template(view, "user_management.html")?
        .replace("{{sidebar}}", &render_sidebar(&account, "/admin/user-management"))
        .replace("{{header}}", &render_header(&account))
        .replace("{{accounts}}", &tables::account_rows(&accounts, &stats, &view.currency_symbol))
        .replace("{{total_users}}", &overview.total_users.to_string())
        .replace("{{admin_users}}", &overview.admin_users.to_string())
        .replace("{{regular_users}}", &overview.regular_users.to_string())
        .replace("{{total_expenses}}", &overview.total_expenses.to_string());

    Ok(Html(html).into_response())
}
