use serde::{Deserialize, Serialize};
use super::{Account, Role};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SessionIdentity {
    pub account_id: u64,
    pub role: Role,
}

impl SessionIdentity {
    pub const KEY: &'static str = "identity";
}

impl From<&Account> for SessionIdentity {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id,
            role: account.role,
        }
    }
}
