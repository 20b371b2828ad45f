//! User entity - people allowed to save base sizes

use serde::{Deserialize, Serialize};

/// Entry of `users.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Operating system logon name
    pub logon: String,
    pub id: String,
    pub name: String,
    pub mail: String,
}

impl User {
    /// Field names usable as `%key%` in the modifier template
    pub const KEYS: [&'static str; 4] = ["logon", "id", "name", "mail"];

    /// Look up a field by its key
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "logon" => Some(&self.logon),
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "mail" => Some(&self.mail),
            _ => None,
        }
    }
}
