// Table rows and summary cards for the expense pages.
use crate::models::{format_date, format_iso_date, Account, Expense};
use crate::reports::{AccountStats, GroupSummary, PALETTE};
use super::{escape_html, format_currency, select_options, CATEGORIES};

// Admin views
pub fn owner_expense_rows(expenses: &[&Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return r#"<tr><td colspan="5" class="empty-row">No expenses for this selection.</td></tr>"#.to_string();
    }

    expenses
        .iter()
        .map(|e| {
            format!(
                r#"<tr>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
    <td class="amount-cell">{}</td>
    <td>{}</td>
</tr>"#,
                escape_html(e.owner_label()),
                escape_html(&e.name),
                escape_html(e.category_label()),
                format_currency(symbol, e.spent),
                format_date(&e.date)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// The row whose id equals `editing` becomes an inline edit form
pub fn own_expense_rows(expenses: &[&Expense], symbol: &str, editing: Option<u64>, back: &str) -> String {
    expenses
        .iter()
        .map(|e| {
            if editing == Some(e.id) {
                edit_row(e, back)
            } else {
                format!(
                    r#"<tr>
    <td>{}</td>
    <td>{}</td>
    <td><span class="amount-cell">{}</span></td>
    <td>{}</td>
    <td>
        <a href="{}?edit={}" class="btn btn-warning btn-sm">Edit</a>
        <a href="/expenses/{}/delete" class="btn btn-danger btn-sm">Delete</a>
    </td>
</tr>"#,
                    escape_html(&e.name),
                    escape_html(e.category_label()),
                    format_currency(symbol, e.spent),
                    format_date(&e.date),
                    back,
                    e.id,
                    e.id
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn edit_row(e: &Expense, back: &str) -> String {
    let form_id = format!("edit-{}", e.id);
    format!(
        r#"<tr class="editing">
    <td><input type="text" name="name" form="{form}" value="{name}" class="edit-input" required></td>
    <td><select name="category" form="{form}" class="edit-select">{options}</select></td>
    <td><input type="number" name="spent" form="{form}" value="{spent:.2}" class="edit-input" step="0.01" min="0" required></td>
    <td><input type="date" name="date" form="{form}" value="{date}" class="edit-input" required></td>
    <td>
        <form id="{form}" method="post" action="/expenses/{id}/edit" class="inline-form" onsubmit="this.querySelector('button[type=submit]').disabled = true">
            <input type="hidden" name="back" value="{back}">
            <button type="submit" class="btn btn-success btn-sm">Save</button>
        </form>
        <a href="{back}" class="btn btn-secondary btn-sm">Cancel</a>
    </td>
</tr>"#,
        form = form_id,
        name = escape_html(&e.name),
        options = select_options(&CATEGORIES, Some(e.category_label())),
        spent = e.spent,
        date = format_iso_date(&e.date),
        id = e.id,
        back = back,
    )
}

pub fn group_cards(groups: &[GroupSummary], symbol: &str, with_percentage: bool) -> String {
    groups
        .iter()
        .map(|g| {
            let percentage = if with_percentage {
                format!(
                    r#"
        <div class="stat-item"><span class="stat-label">Percentage:</span><span class="stat-value">{:.1}%</span></div>"#,
                    g.percentage
                )
            } else {
                String::new()
            };
            format!(
                r#"<div class="group-card">
    <h4 class="group-name">{}</h4>
    <div class="group-stats">
        <div class="stat-item"><span class="stat-label">Total Spent:</span><span class="stat-value">{}</span></div>
        <div class="stat-item"><span class="stat-label">Total Entries:</span><span class="stat-value">{}</span></div>{}
    </div>
</div>"#,
                escape_html(&g.key),
                format_currency(symbol, g.total_spent),
                g.entries,
                percentage
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn chart_legend(groups: &[GroupSummary]) -> String {
    groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            format!(
                r#"<div class="legend-item"><div class="legend-color" style="background-color: {}"></div><span class="legend-label">{}</span></div>"#,
                PALETTE[i % PALETTE.len()],
                escape_html(&g.key)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn account_rows(accounts: &[Account], stats: &[AccountStats], symbol: &str) -> String {
    accounts
        .iter()
        .map(|a| {
            let totals = stats
                .iter()
                .find(|s| s.account_id == a.id)
                .map(|s| s.totals)
                .unwrap_or_default();
            format!(
                r#"<tr>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
    <td class="amount-cell">{}</td>
    <td>{}%</td>
</tr>"#,
                a.id,
                escape_html(&a.name),
                escape_html(&a.email),
                a.role,
                totals.entries,
                format_currency(symbol, totals.spent),
                totals.utilization()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
