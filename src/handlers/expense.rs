use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::{format_date, DeleteForm, EditExpenseForm, ExpenseForm, PageQuery};
use crate::views::{error_block, escape_html, format_currency, load_template, render_header, render_sidebar, select_options, CATEGORIES};
use super::{current_account, set_flash, with_error};

pub async fn serve_create_expense(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;

    let category_options = format!(
        "<option value=\"\">Select a category</option>\n{}",
        select_options(&CATEGORIES, None)
    );
    let html = load_template(&state.config.view, "create_expense.html")?
        .replace("{{sidebar}}", &render_sidebar(&account, "/create-expense"))
        .replace("{{header}}", &render_header(&account))
        .replace("{{error}}", &error_block(query.error.as_deref()))
        .replace("{{currency}}", &state.config.view.currency_symbol)
        .replace("{{category_options}}", &category_options);

    Ok(Html(html).into_response())
}

pub async fn handle_create_expense(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ExpenseForm>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;

    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!("Expense form rejected for account {}: {}", account.id, e);
            return Ok(Redirect::to(&with_error("/create-expense", &e.to_string())).into_response());
        }
    };

    state.store.create_expense(account.id, draft).await?;
    set_flash(&session, "Expense added successfully!").await;

    Ok(Redirect::to("/dashboard").into_response())
}

pub async fn handle_update_expense(
    State(state): State<AppState>,
    session: Session,
    Path(expense_id): Path<u64>,
    Form(form): Form<EditExpenseForm>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;
    let back = form.return_path();

    let patch = match form.to_patch() {
        Ok(patch) => patch,
        Err(e) => {
            tracing::debug!("Edit of expense {} rejected: {}", expense_id, e);
            let retry = format!("{}?edit={}", back, expense_id);
            return Ok(Redirect::to(&with_error(&retry, &e.to_string())).into_response());
        }
    };

    if !state.store.update_owned_expense(account.id, expense_id, patch).await {
        tracing::warn!("Expense {} not updated for account {}", expense_id, account.id);
    }

    Ok(Redirect::to(back).into_response())
}

pub async fn serve_delete_confirmation(
    State(state): State<AppState>,
    session: Session,
    Path(expense_id): Path<u64>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;

    let expense = state
        .store
        .get_expense(expense_id)
        .await
        .filter(|e| e.user_id == account.id)
        .ok_or_else(|| AppError::NotFound(format!("expense {}", expense_id)))?;

    let html = load_template(&state.config.view, "delete_expense.html")?
        .replace("{{sidebar}}", &render_sidebar(&account, "/expense-list"))
        .replace("{{header}}", &render_header(&account))
        .replace("{{expense_id}}", &expense.id.to_string())
        .replace("{{expense_name}}", &escape_html(&expense.name))
        .replace("{{expense_amount}}", &format_currency(&state.config.view.currency_symbol, expense.spent))
        .replace("{{expense_date}}", &format_date(&expense.date));

    Ok(Html(html).into_response())
}

pub async fn handle_delete_expense(
    State(state): State<AppState>,
    session: Session,
    Path(expense_id): Path<u64>,
    Form(form): Form<DeleteForm>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;

    if !form.is_confirmed() {
        tracing::debug!("Delete of expense {} cancelled", expense_id);
        return Ok(Redirect::to("/expense-list").into_response());
    }

    if state.store.delete_owned_expense(account.id, expense_id).await.is_none() {
        tracing::warn!("Expense {} not deleted for account {}", expense_id, account.id);
    }

    Ok(Redirect::to("/expense-list").into_response())
}
