use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::AppState;
use crate::errors::AppResult;
use crate::middleware::guard::home_for;
use crate::models::{LoginForm, PageQuery, SessionIdentity, SignupForm};
use crate::views::{error_block, load_template};
use super::{banner_html, set_flash, take_flash, with_error};

const SIGNUP_SUCCESS: &str = "Account created successfully! Please login with your credentials.";

pub async fn serve_login_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let error = error_block(query.error.as_deref());

    if query.form.as_deref() == Some("signup") {
        let html = load_template(&state.config.view, "signup.html")?
            .replace("{{error}}", &error);
        return Ok(Html(html).into_response());
    }

    let banner = banner_html(take_flash(&session).await, state.config.view.banner_dismiss_ms);
    let html = load_template(&state.config.view, "login.html")?
        .replace("{{banner}}", &banner)
        .replace("{{error}}", &error);
    Ok(Html(html).into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> Response {
    tracing::info!("Login attempt for {}", login_form.email);

    match state.store.login(&login_form.email, &login_form.password).await {
        Ok(account) => {
            if let Err(e) = session.insert(SessionIdentity::KEY, SessionIdentity::from(&account)).await {
                tracing::error!("Session error: {}", e);
                return Redirect::to(&with_error("/", "Server error")).into_response();
            }
            tracing::info!("Logged in account {} as {}", account.id, account.role);
            Redirect::to(home_for(account.role)).into_response()
        }
        Err(e) => {
            tracing::warn!("Login rejected for {}", login_form.email);
            Redirect::to(&with_error("/", &e.to_string())).into_response()
        }
    }
}

pub async fn handle_signup(
    State(state): State<AppState>,
    session: Session,
    Form(signup_form): Form<SignupForm>,
) -> Response {
    let new_account = match signup_form.into_new_account() {
        Ok(new_account) => new_account,
        Err(e) => {
            tracing::debug!("Signup rejected: {}", e);
            return Redirect::to(&with_error("/?form=signup", &e.to_string())).into_response();
        }
    };

    state.store.signup(new_account).await;
    set_flash(&session, SIGNUP_SUCCESS).await;

    Redirect::to("/").into_response()
}

#[axum::debug_handler]
pub async fn handle_logout(
    session: Session,
) -> Response {
    if let Err(e) = session.remove::<SessionIdentity>(SessionIdentity::KEY).await {
        tracing::warn!("Session removal error: {}", e);
    }
    Redirect::to("/").into_response()
}
