//! User table, logon detection and the modifier stamp

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::core::config::ConfigError;
use crate::entities::user::User;

/// Users allowed to save base sizes (`users.yaml`)
#[derive(Debug, Clone, Default)]
pub struct UserTable {
    users: Vec<User>,
}

impl UserTable {
    /// Build the table; logons have to be unique
    pub fn new(users: Vec<User>) -> Result<Self, ConfigError> {
        for (i, user) in users.iter().enumerate() {
            if users[..i].iter().any(|u| u.logon == user.logon) {
                return Err(ConfigError::InvalidSetting {
                    key: "users".to_string(),
                    message: format!("duplicate logon '{}'", user.logon),
                });
            }
        }
        Ok(Self { users })
    }

    pub fn user_exists(&self, logon: &str) -> bool {
        self.get_user_by_logon(logon).is_some()
    }

    pub fn get_user_by_logon(&self, logon: &str) -> Option<&User> {
        self.users.iter().find(|u| u.logon == logon)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether the logon may only look at results, not save them
    pub fn is_read_only(&self, logon: &str, allow_all_users: bool) -> bool {
        !self.user_exists(logon) && !allow_all_users
    }

    /// Build the modifier value for a logon
    ///
    /// Every `%key%` in the template is replaced by the user's field. Falls
    /// back to the plain logon when the user is unknown or the template asks
    /// for a field users don't have.
    pub fn modifier_for(&self, logon: &str, template: &str) -> String {
        let Some(user) = self.get_user_by_logon(logon) else {
            warn!(logon, "Current user is not in the user table, saving the logon name");
            return logon.to_string();
        };

        match fill_template(template, user) {
            Some(modifier) => modifier,
            None => {
                warn!(
                    template,
                    logon,
                    known_keys = User::KEYS.join(", ").as_str(),
                    "Cannot build modifier from template, saving the logon name"
                );
                logon.to_string()
            }
        }
    }
}

static TEMPLATE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(.*?)%").expect("invalid regex pattern"));

/// Keys referenced as `%key%` in a template, in order of appearance
pub fn template_keys(template: &str) -> Vec<&str> {
    TEMPLATE_KEY
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|key| key.as_str())
        .collect()
}

fn fill_template(template: &str, user: &User) -> Option<String> {
    let keys = template_keys(template);
    let mut out = template.to_string();
    for key in keys {
        let value = user.field(key)?;
        out = out.replace(&format!("%{}%", key), value);
    }
    Some(out)
}

/// Logon name of the current operator
///
/// An explicit name wins; otherwise `USERNAME` (Windows) then `USER`.
pub fn current_logon(explicit: Option<&str>) -> Option<String> {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var("USERNAME").ok())
        .or_else(|| std::env::var("USER").ok())
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> UserTable {
        UserTable::new(vec![User {
            logon: "jdoe".into(),
            id: "0042".into(),
            name: "Jane Doe".into(),
            mail: "jane.doe@example.com".into(),
        }])
        .unwrap()
    }

    #[test]
    fn test_template_keys() {
        assert_eq!(template_keys("%name% (%id%)"), vec!["name", "id"]);
        assert!(template_keys("plain").is_empty());
        assert_eq!(template_keys("%open"), Vec::<&str>::new());
        // pairs are taken left to right, a stray third marker is ignored
        assert_eq!(template_keys("%a%b%"), vec!["a"]);
        assert_eq!(template_keys("%%"), vec![""]);
        assert_eq!(template_keys("x %name%, y %mail%"), vec!["name", "mail"]);
    }

    #[test]
    fn test_modifier_from_template() {
        assert_eq!(table().modifier_for("jdoe", "%name% (%id%)"), "Jane Doe (0042)");
        assert_eq!(table().modifier_for("jdoe", "%mail%"), "jane.doe@example.com");
    }

    #[test]
    fn test_modifier_falls_back_to_logon() {
        assert_eq!(table().modifier_for("guest", "%name%"), "guest");
        assert_eq!(table().modifier_for("jdoe", "%phone%"), "jdoe");
    }

    #[test]
    fn test_read_only() {
        let t = table();
        assert!(!t.is_read_only("jdoe", false));
        assert!(t.is_read_only("guest", false));
        assert!(!t.is_read_only("guest", true));
    }

    #[test]
    fn test_duplicate_logons_rejected() {
        let user = table().get_user_by_logon("jdoe").cloned().unwrap();
        assert!(UserTable::new(vec![user.clone(), user]).is_err());
    }

    #[test]
    fn test_explicit_logon_wins() {
        assert_eq!(current_logon(Some("cad01")).as_deref(), Some("cad01"));
    }
}
