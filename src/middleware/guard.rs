use crate::models::{Role, SessionIdentity};

pub const LOGIN_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated(Role),
}

impl AuthState {
    pub fn from_identity(identity: Option<&SessionIdentity>) -> Self {
        match identity {
            Some(identity) => AuthState::Authenticated(identity.role),
            None => AuthState::Anonymous,
        }
    }
}

// Access class declared by a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    AnonymousOnly,
    Requires(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

pub fn home_for(role: Role) -> &'static str {
    match role {
        Role::User => "/dashboard",
        Role::Admin => "/admin",
    }
}

pub fn access_for(path: &str) -> Access {
    match path {
        "/" | "/signup" => Access::AnonymousOnly,
        "/login" | "/logout" => Access::Public,
        "/admin" => Access::Requires(Role::Admin),
        "/dashboard" | "/expense-list" | "/create-expense" | "/expenses" => Access::Requires(Role::User),
        p if p.starts_with("/admin/") => Access::Requires(Role::Admin),
        p if p.starts_with("/expenses/") => Access::Requires(Role::User),
        // Static files and unknown paths; the router answers 404 for the latter
        _ => Access::Public,
    }
}

pub fn decide(state: AuthState, access: Access) -> Decision {
    match (state, access) {
        (_, Access::Public) => Decision::Allow,
        (AuthState::Anonymous, Access::AnonymousOnly) => Decision::Allow,
        (AuthState::Authenticated(role), Access::AnonymousOnly) => Decision::Redirect(home_for(role)),
        (AuthState::Anonymous, Access::Requires(_)) => Decision::Redirect(LOGIN_PATH),
        (AuthState::Authenticated(role), Access::Requires(required)) if role == required => Decision::Allow,
        (AuthState::Authenticated(role), Access::Requires(_)) => Decision::Redirect(home_for(role)),
    }
}
