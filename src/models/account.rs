use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Account {
    pub id: u64,
    pub username: String,
    pub password: String,  // plaintext, compared as-is at login
    pub email: String,
    pub role: Role,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewAccount {
    pub fn username(&self) -> String {
        self.email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: email.into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn test_username_is_email_local_part() {
        assert_eq!(new_account("asha.rao@example.com").username(), "asha.rao");
        assert_eq!(new_account("no-at-sign").username(), "no-at-sign");
    }

    #[test]
    fn test_display_name_joins_first_and_last() {
        assert_eq!(new_account("a@b.c").display_name(), "Asha Rao");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::User.to_string(), "user");
    }
}
