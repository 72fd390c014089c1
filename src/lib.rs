pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod reports;
pub mod services;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
    middleware::from_fn,
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::SameSite;
use crate::{
    config::Config,
    services::{StoreService, TrackerStore},
};

// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: StoreService,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = if config.seed.enabled {
            TrackerStore::seeded()
        } else {
            TrackerStore::new()
        };
        tracing::info!("Store initialized with {} accounts", store.accounts().len());

        Self {
            store: StoreService::new(store),
            config,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    // Session store setup
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(state.config.session.secure)
        .with_same_site(SameSite::Lax)
        .with_name("session");

    let static_dir = ServeDir::new(&state.config.view.static_dir);
    let max_body_bytes = state.config.server.max_body_bytes;

    Router::new()
        // Auth routes
        .route("/", get(handlers::serve_login_page))
        .route("/login", post(handlers::handle_login))
        .route("/signup", post(handlers::handle_signup))
        .route("/logout", get(handlers::handle_logout))

        // User routes
        .route("/dashboard", get(handlers::serve_user_dashboard))
        .route("/expense-list", get(handlers::serve_expense_list))
        .route("/create-expense", get(handlers::serve_create_expense))
        .route("/expenses", post(handlers::handle_create_expense))
        .route("/expenses/:id/edit", post(handlers::handle_update_expense))
        .route(
            "/expenses/:id/delete",
            get(handlers::serve_delete_confirmation).post(handlers::handle_delete_expense),
        )

        // Admin routes
        .route("/admin", get(handlers::serve_admin_dashboard))
        .route("/admin/reports", get(handlers::serve_category_reports))
        .route("/admin/reports/chart.svg", get(handlers::serve_category_chart))
        .route("/admin/reports/summary", get(handlers::serve_category_summary))
        .route("/admin/users", get(handlers::serve_user_reports))
        .route("/admin/user-management", get(handlers::serve_user_management))

        // Static files
        .nest_service("/static", static_dir)

        // Route guard runs inside the session layer
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
        .with_state(state)
}
