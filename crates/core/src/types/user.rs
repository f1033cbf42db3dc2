//! Session user records.

use serde::{Deserialize, Serialize};

use super::UserId;

/// The signed-in customer.
///
/// Produced by the authentication flow (out of scope here); this core only
/// stores the resulting record. Absence means anonymous/guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Apply a partial-field patch, leaving unset fields unchanged.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// Partial update to a [`User`]'s profile fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut user = User {
            id: UserId::new("u1"),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
        };

        user.apply(UserPatch {
            name: Some("Ada Lovelace".to_owned()),
            email: None,
        });

        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut user = User {
            id: UserId::new("u1"),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
        };
        let before = user.clone();

        user.apply(UserPatch::default());
        assert_eq!(user, before);
    }
}
