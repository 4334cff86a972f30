use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed role enumeration; the backend rejects anything else, so an
/// unknown value in a response is a decode error rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Reader,
    Guest,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Reader => "READER",
            Role::Guest => "GUEST",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id_user: String,
    pub name: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_session_user() {
        let body = r#"{"idUser": "u1", "name": "Ada", "username": "ada", "role": "ADMIN"}"#;
        let user: SessionUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.role.is_admin());
    }

    #[test]
    fn rejects_unknown_role() {
        let body = r#"{"idUser": "u1", "name": "Ada", "username": "ada", "role": "WIZARD"}"#;
        assert!(serde_json::from_str::<SessionUser>(body).is_err());
    }
}
