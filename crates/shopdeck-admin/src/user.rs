//! The users table's record shape.

use shopdeck_listing::{Tabular, Timestamp, Value};

/// A registered account as the admin users screen sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub provider: Provider,
    pub role: Role,
    pub created_at: Timestamp,
}

/// Which sign-in provider the account uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Credentials,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Credentials => "credentials",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Tabular for User {
    const FIELDS: &'static [&'static str] =
        &["id", "name", "email", "provider", "role", "createdAt"];

    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "id" => Value::Str(&self.id),
            "name" => Value::Str(&self.name),
            "email" => Value::Str(&self.email),
            "provider" => Value::Str(self.provider.as_str()),
            "role" => Value::Str(self.role.as_str()),
            "createdAt" => Value::Timestamp(self.created_at),
            _ => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn fields_resolve() {
        let users = fixtures::sample_users();
        let user = &users[0];

        assert_eq!(user.field("name"), Value::Str("John Doe"));
        assert_eq!(user.field("provider"), Value::Str("google"));
        assert_eq!(user.field("role"), Value::Str("admin"));
        assert!(user.field("password").is_none());
    }
}
