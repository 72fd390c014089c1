use axum::{
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    extract::Request,
    body::Body,
};
use tower_sessions::Session;
use crate::models::SessionIdentity;
use super::guard::{self, AuthState, Decision};

pub async fn require_auth(
    session: Session,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    let identity = match session.get::<SessionIdentity>(SessionIdentity::KEY).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::error!("Session read failed for {}: {}", path, e);
            None
        }
    };

    let state = AuthState::from_identity(identity.as_ref());
    match guard::decide(state, guard::access_for(&path)) {
        Decision::Allow => next.run(req).await,
        Decision::Redirect(target) => {
            tracing::debug!("Guard redirected {:?} from {} to {}", state, path, target);
            Redirect::to(target).into_response()
        }
    }
}
