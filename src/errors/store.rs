use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("Unknown account: {0}")]
    UnknownAccount(u64),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, StoreError::InvalidCredentials | StoreError::UnknownAccount(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
