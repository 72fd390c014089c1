// Application-level error type and result alias, built on thiserror.
use thiserror::Error;

pub mod response;
pub mod store;

pub use store::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Session error: {0}")]
    Session(String),

    // Page templates are read from disk on every request
    #[error("Template error: {0}")]
    Template(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

pub type AppResult<T> = Result<T, AppError>;
