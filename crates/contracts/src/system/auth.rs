use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Access role carried inside the token. Unknown roles degrade to the
/// least-privileged one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    #[default]
    #[serde(other)]
    Employee,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Superadmin | Role::Admin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Superadmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Employee => "Employee",
        }
    }
}

/// Identity persisted client-side alongside the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

/// JWT payload decoded (never verified) client-side, only to extract
/// display fields. The server remains the authority on validity.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    #[serde(default)]
    pub role: Role,
    pub iat: u64,
    pub exp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_form() {
        assert_eq!(serde_json::to_string(&Role::Superadmin).unwrap(), "\"superadmin\"");
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"employee\"");
    }

    #[test]
    fn test_unknown_role_falls_back_to_employee() {
        let role: Role = serde_json::from_str("\"intern\"").unwrap();
        assert_eq!(role, Role::Employee);
    }

    #[test]
    fn test_claims_parse() {
        let claims: TokenClaims = serde_json::from_str(
            r#"{"id":"u-1","role":"admin","iat":1700000000,"exp":1700003600}"#,
        )
        .unwrap();
        assert_eq!(claims.id, "u-1");
        assert!(claims.role.is_admin());
    }
}
