use crate::models::{Account, Role};
use super::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const USER_NAV: [NavItem; 3] = [
    NavItem { path: "/dashboard", label: "Dashboard", icon: "🏠" },
    NavItem { path: "/expense-list", label: "Expense List", icon: "📋" },
    NavItem { path: "/create-expense", label: "Create Expense", icon: "➕" },
];

const ADMIN_NAV: [NavItem; 4] = [
    NavItem { path: "/admin", label: "Admin Dashboard", icon: "📊" },
    NavItem { path: "/admin/reports", label: "Category Reports", icon: "📈" },
    NavItem { path: "/admin/users", label: "Users Reports", icon: "👥" },
    NavItem { path: "/admin/user-management", label: "User Management", icon: "⚙️" },
];

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::User => &USER_NAV,
        Role::Admin => &ADMIN_NAV,
    }
}

pub fn render_sidebar(account: &Account, current_path: &str) -> String {
    let links = nav_items(account.role)
        .iter()
        .map(|item| {
            let active = if item.path == current_path { " active" } else { "" };
            format!(
                r#"<a href="{}" class="nav-item{}"><span class="nav-icon">{}</span><span class="nav-label">{}</span></a>"#,
                item.path, active, item.icon, item.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="sidebar">
    <div class="sidebar-header"><h1 class="sidebar-title">Expense Tracker</h1></div>
    <div class="user-profile">
        <div class="user-avatar"><span class="user-icon">👤</span></div>
        <div class="user-name">{}</div>
        <div class="user-role">({})</div>
    </div>
    <nav class="sidebar-nav">
{}
    </nav>
    <div class="sidebar-footer">
        <a href="/logout" class="logout-btn"><span class="nav-icon">🚪</span><span class="nav-label">Logout</span></a>
    </div>
</div>"#,
        escape_html(&account.name),
        account.role,
        links
    )
}

pub fn render_header(account: &Account) -> String {
    let title = match account.role {
        Role::User => "User Dashboard",
        Role::Admin => "Admin Panel",
    };
    format!(
        r#"<div class="header">
    <h1 class="page-title">{}</h1>
    <div class="user-welcome">Welcome, {}! <a href="/logout" class="logout-link">Logout</a></div>
</div>"#,
        title,
        escape_html(&account.name)
    )
}
