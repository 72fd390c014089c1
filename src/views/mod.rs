pub mod sidebar;
pub mod tables;

use std::path::Path;
use crate::config::ViewConfig;
use crate::errors::{AppError, AppResult};

pub use sidebar::{nav_items, render_header, render_sidebar, NavItem};

pub const CATEGORIES: [&str; 6] = ["Food", "Travel", "Shopping", "Entertainment", "Utilities", "Other"];

pub fn load_template(config: &ViewConfig, name: &str) -> AppResult<String> {
    let path = Path::new(&config.templates_dir).join(name);
    std::fs::read_to_string(&path).map_err(|e| {
        tracing::error!("Failed to read template {}: {}", path.display(), e);
        AppError::Template(e)
    })
}

pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

// Braces are encoded too, so user text can never form a `{{placeholder}}`
// that a later fill step would replace
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn error_block(error: Option<&str>) -> String {
    match error.filter(|e| !e.is_empty()) {
        Some(msg) => format!(r#"<div class="error-message">{}</div>"#, escape_html(msg)),
        None => String::new(),
    }
}

pub fn select_options<S: AsRef<str>>(values: &[S], selected: Option<&str>) -> String {
    values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            let mark = if Some(v) == selected { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, escape_html(v), mark)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", 900.0), "₹900.00");
        assert_eq!(format_currency("$", 1234.5), "$1234.50");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_escape_html_neutralizes_placeholders() {
        let escaped = escape_html("{{total_spent}} X");
        assert_eq!(escaped, "&#123;&#123;total_spent&#125;&#125; X");

        let page = "<b>{{name}}</b> {{total_spent}}"
            .replace("{{name}}", &escaped)
            .replace("{{total_spent}}", "₹900.00");
        assert_eq!(page, "<b>&#123;&#123;total_spent&#125;&#125; X</b> ₹900.00");
    }

    #[test]
    fn test_error_block() {
        assert_eq!(error_block(None), "");
        assert_eq!(error_block(Some("")), "");
        assert!(error_block(Some("Invalid email or password")).contains("Invalid email or password"));
    }

    #[test]
    fn test_select_options_marks_selected() {
        let html = select_options(&CATEGORIES, Some("Travel"));
        assert!(html.contains(r#"<option value="Travel" selected>Travel</option>"#));
        assert!(html.contains(r#"<option value="Food">Food</option>"#));
    }

    #[test]
    fn test_every_template_loads() {
        let config = ViewConfig::default();
        for name in [
            "login.html",
            "signup.html",
            "user_dashboard.html",
            "expense_list.html",
            "create_expense.html",
            "delete_expense.html",
            "admin_dashboard.html",
            "admin_reports.html",
            "user_reports.html",
            "user_management.html",
        ] {
            assert!(load_template(&config, name).is_ok(), "{}", name);
        }
        assert!(matches!(load_template(&config, "missing.html"), Err(AppError::Template(_))));
    }
}
