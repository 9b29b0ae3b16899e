//! User domain entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// Identity is assigned by the caller (or the storage collaborator), never
/// generated here. Fields are private so a value cannot change once built;
/// no validation is applied to either field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: i64,
    name: String,
}

impl User {
    /// Create a new user
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// User identifier
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the user, keeping only its name
    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User({}, {:?})", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accessors() {
        let user = User::new(1, "Alice");

        assert_eq!(user.id(), 1);
        assert_eq!(user.name(), "Alice");
    }

    #[test]
    fn test_user_accepts_any_id_and_name() {
        // No validation: negative ids and empty names are stored as given
        let user = User::new(-7, "");

        assert_eq!(user.id(), -7);
        assert_eq!(user.name(), "");
    }

    #[test]
    fn test_user_equality() {
        assert_eq!(User::new(2, "Bob"), User::new(2, String::from("Bob")));
        assert_ne!(User::new(2, "Bob"), User::new(3, "Bob"));
        assert_ne!(User::new(2, "Bob"), User::new(2, "Robert"));
    }

    #[test]
    fn test_user_into_name() {
        assert_eq!(User::new(1, "Alice").into_name(), "Alice");
    }

    #[test]
    fn test_user_display() {
        assert_eq!(User::new(2, "Bob").to_string(), "User(2, \"Bob\")");
    }

    #[test]
    fn test_user_serde_shape() {
        let json = serde_json::to_value(User::new(1, "Alice")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Alice" }));

        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user, User::new(1, "Alice"));
    }
}
