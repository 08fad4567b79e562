use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Partial update for a [`User`]. Absent fields leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    pub id: Option<i64>,
    pub username: Option<String>,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }

    /// Shallow merge: every field set in `patch` overrides the current one.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let mut user = User::new(1, "meriem");
        user.apply(UserPatch {
            username: Some("sara".to_string()),
            ..Default::default()
        });
        assert_eq!(user, User::new(1, "sara"));

        user.apply(UserPatch::default());
        assert_eq!(user, User::new(1, "sara"));
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let parsed: Result<UserPatch, _> = serde_json::from_str(r#"{"email":"a@b.c"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_user_requires_both_fields() {
        let parsed: Result<User, _> = serde_json::from_str(r#"{"id":3}"#);
        assert!(parsed.is_err());

        let parsed: User = serde_json::from_str(r#"{"id":3,"username":"ahmed"}"#).unwrap();
        assert_eq!(parsed, User::new(3, "ahmed"));
    }
}
