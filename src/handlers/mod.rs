mod auth;
mod dashboard;
mod expense;
mod reports;

pub use auth::{serve_login_page, handle_login, handle_signup, handle_logout};
pub use dashboard::{serve_user_dashboard, serve_expense_list, serve_admin_dashboard, serve_user_management};
pub use expense::{serve_create_expense, handle_create_expense, handle_update_expense, serve_delete_confirmation, handle_delete_expense};
pub use reports::{serve_category_reports, serve_category_chart, serve_category_summary, serve_user_reports};

use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{Account, SessionIdentity};
use crate::services::StoreService;
use crate::views::escape_html;

// One-shot message shown on the next rendered page
const FLASH_KEY: &str = "flash";

// Resolves the logged-in account from the session
async fn current_account(store: &StoreService, session: &Session) -> AppResult<Account> {
    let identity = session
        .get::<SessionIdentity>(SessionIdentity::KEY)
        .await
        .map_err(|e| AppError::Session(e.to_string()))?
        .ok_or_else(|| AppError::Auth("Not authenticated".into()))?;

    store
        .get_account(identity.account_id)
        .await
        .ok_or_else(|| AppError::Auth("Account not found".into()))
}

async fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message).await {
        tracing::warn!("Failed to store flash message: {}", e);
    }
}

async fn take_flash(session: &Session) -> Option<String> {
    match session.remove::<String>(FLASH_KEY).await {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Failed to read flash message: {}", e);
            None
        }
    }
}

// Success banner that removes itself after `dismiss_ms`
fn banner_html(message: Option<String>, dismiss_ms: u64) -> String {
    match message {
        Some(msg) => format!(
            r#"<div class="success-message" data-dismiss-after="{ms}">{msg}</div>
<script>setTimeout(function () {{ document.querySelectorAll('[data-dismiss-after]').forEach(function (el) {{ el.remove(); }}); }}, {ms});</script>"#,
            ms = dismiss_ms,
            msg = escape_html(&msg)
        ),
        None => String::new(),
    }
}

// Redirect target carrying an error message in the query string
fn with_error(path: &str, message: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}error={}", path, separator, urlencoding::encode(message))
}
