use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response, Json},
    http::header,
};
use chrono::Local;
use serde_json::json;
use tower_sessions::Session;
use crate::AppState;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Expense, ReportQuery};
use crate::reports::{category_chart_svg, group_by_category, group_by_owner, totals, MonthSelection, PeriodKind, ReportPeriod};
use crate::views::{error_block, format_currency, load_template, render_header, render_sidebar, tables};
use super::current_account;

// Configured default month, else the current one
fn default_month(config: &Config) -> MonthSelection {
    config
        .reports
        .default_month
        .as_deref()
        .and_then(|m| MonthSelection::parse(m).ok())
        .unwrap_or_else(|| MonthSelection::containing(Local::now().date_naive()))
}

// An unparsable month falls back to the default and is reported inline
fn resolve_period(config: &Config, query: &ReportQuery) -> (ReportPeriod, Option<String>) {
    let fallback = default_month(config);
    match ReportPeriod::from_query(query.period.as_deref(), query.month.as_deref(), fallback) {
        Ok(period) => (period, None),
        Err(e) => {
            tracing::debug!("Report period rejected: {}", e);
            let period = ReportPeriod {
                kind: PeriodKind::from_query(query.period.as_deref()),
                month: fallback,
            };
            (period, Some(e.to_string()))
        }
    }
}

fn period_options(period: &ReportPeriod) -> String {
    let (monthly, yearly) = if period.is_yearly() { ("", " selected") } else { (" selected", "") };
    format!(
        r#"<option value="monthly"{}>Monthly</option>
<option value="yearly"{}>Yearly</option>"#,
        monthly, yearly
    )
}

pub async fn serve_category_reports(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;
    tracing::info!("Accessing category reports");

    let view = &state.config.view;
    let (period, period_error) = resolve_period(&state.config, &query);

    let all = state.store.all_expenses().await;
    let stats = totals(&all);
    let refs: Vec<&Expense> = all.iter().collect();
    let groups = group_by_category(&refs);
    let report = period.filter(&all);

    let html = load_template(view, "admin_reports.html")?
        .replace("{{sidebar}}", &render_sidebar(&account, "/admin/reports"))
        .replace("{{header}}", &render_header(&account))
        .replace("{{error}}", &error_block(period_error.as_deref()))
        .replace("{{total_spent}}", &format_currency(&view.currency_symbol, stats.spent))
        .replace("{{total_entries}}", &stats.entries.to_string())
        .replace("{{category_cards}}", &tables::group_cards(&groups, &view.currency_symbol, true))
        .replace("{{legend}}", &tables::chart_legend(&groups))
        .replace("{{period_options}}", &period_options(&period))
        .replace("{{month}}", &period.month.input_value())
        .replace("{{report_title}}", &period.title())
        .replace("{{expenses}}", &tables::owner_expense_rows(&report, &view.currency_symbol));

    Ok(Html(html).into_response())
}

pub async fn serve_category_chart(
    State(state): State<AppState>,
) -> AppResult<Response> {
    let all = state.store.all_expenses().await;
    let refs: Vec<&Expense> = all.iter().collect();
    let svg = category_chart_svg(&group_by_category(&refs))?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

pub async fn serve_category_summary(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    let (period, _) = resolve_period(&state.config, &query);

    // Same scope as the report page: totals and groups over everything,
    // the period only narrows the details
    let all = state.store.all_expenses().await;
    let stats = totals(&all);
    let refs: Vec<&Expense> = all.iter().collect();
    let report = period.filter(&all);
    let period_stats = totals(report.iter().copied());

    Ok(Json(json!({
        "total_spent": stats.spent,
        "total_budget": stats.budget,
        "total_entries": stats.entries,
        "budget_utilization": stats.utilization(),
        "categories": group_by_category(&refs),
        "period": {
            "title": period.title(),
            "entries": period_stats.entries,
            "spent": period_stats.spent,
        },
    })).into_response())
}

pub async fn serve_user_reports(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    let account = current_account(&state.store, &session).await?;
    tracing::info!("Accessing users reports");

    let view = &state.config.view;
    let (period, period_error) = resolve_period(&state.config, &query);

    let all = state.store.all_expenses().await;
    let stats = totals(&all);
    let refs: Vec<&Expense> = all.iter().collect();
    let groups = group_by_owner(&refs);
    let report = period.filter(&all);

    let html = load_template(view, "user_reports.html")?
        .replace("{{sidebar}}", &render_sidebar(&account, "/admin/users"))
        .replace("{{header}}", &render_header(&account))
        .replace("{{error}}", &error_block(period_error.as_deref()))
        .replace("{{total_users}}", &groups.len().to_string())
        .replace("{{total_entries}}", &stats.entries.to_string())
        .replace("{{total_spent}}", &format_currency(&view.currency_symbol, stats.spent))
        .replace("{{user_cards}}", &tables::group_cards(&groups, &view.currency_symbol, false))
        .replace("{{period_options}}", &period_options(&period))
        .replace("{{month}}", &period.month.input_value())
        .replace("{{report_title}}", &period.title())
        .replace("{{expenses}}", &tables::owner_expense_rows(&report, &view.currency_symbol));

    Ok(Html(html).into_response())
}
