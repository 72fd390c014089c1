use axum::{
    response::{IntoResponse, Response, Redirect},
    http::StatusCode,
};
use crate::errors::{AppError, StoreError};

// Converts AppError into the response shown to the browser.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authentication errors go back to the login page
            AppError::Auth(msg) => {
                Redirect::to(&format!("/?error={}", urlencoding::encode(&msg)))
                    .into_response()
            }

            AppError::Store(err) => convert_store_error(err),

            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                format!("Not found: {}", what)
            ).into_response(),

            AppError::Session(msg) => {
                tracing::error!("Session failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Session error").into_response()
            }

            AppError::Template(e) => {
                tracing::error!("Template failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }

            AppError::Chart(msg) => {
                tracing::error!("Chart failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render chart").into_response()
            }
        }
    }
}

fn convert_store_error(err: StoreError) -> Response {
    if err.is_validation() {
        return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
    }

    // Credential and stale-account errors send the browser back to login
    Redirect::to(&format!("/?error={}", urlencoding::encode(&err.to_string())))
        .into_response()
}
