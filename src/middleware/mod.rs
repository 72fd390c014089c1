mod auth;
pub mod guard;

pub use auth::require_auth;
