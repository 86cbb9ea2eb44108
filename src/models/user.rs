use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{ListResponse, Resource};

/// A panel user. The panel never returns passwords.
pub type User = Resource<UserAttributes>;

/// A page of users.
pub type UserList = ListResponse<UserAttributes>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAttributes {
    pub id: u64,
    pub external_id: Option<String>,
    pub uuid: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub language: String,
    pub root_admin: bool,
    #[serde(rename = "2fa")]
    pub two_factor: bool,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl fmt::Display for UserAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}

/// Payload for creating or updating a user.
///
/// Ids and timestamps are assigned by the panel and cannot be sent.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_admin: Option<bool>,
}

impl fmt::Debug for UserChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserChange")
            .field("external_id", &self.external_id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("language", &self.language)
            .field("root_admin", &self.root_admin)
            .finish()
    }
}

impl UserChange {
    /// Create a new user change builder.
    pub fn builder() -> UserChangeBuilder {
        UserChangeBuilder::default()
    }
}

/// Builder for [`UserChange`].
#[derive(Debug, Default)]
pub struct UserChangeBuilder {
    change: UserChange,
}

impl UserChangeBuilder {
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.change.external_id = Some(external_id.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.change.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.change.email = Some(email.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.change.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.change.last_name = Some(last_name.into());
        self
    }

    /// Set a new password. Omit to leave the current one untouched.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.change.password = Some(password.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.change.language = Some(language.into());
        self
    }

    pub fn root_admin(mut self, root_admin: bool) -> Self {
        self.change.root_admin = Some(root_admin);
        self
    }

    pub fn build(self) -> UserChange {
        self.change
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_user_with_two_factor_key() {
        let user: User = serde_json::from_value(json!({
            "object": "user",
            "attributes": {
                "id": 7,
                "external_id": null,
                "uuid": "c4022c6c-9bf1-4a23-bff9-519cceb38335",
                "username": "codeco",
                "email": "codeco@file.properties",
                "first_name": "Rihan",
                "last_name": "Arfan",
                "language": "en",
                "root_admin": true,
                "2fa": true,
                "created_at": "2020-03-07T14:22:25+00:00",
                "updated_at": "2020-03-07T14:22:25+00:00"
            }
        }))
        .unwrap();

        assert_eq!(user.attributes.id, 7);
        assert!(user.attributes.two_factor);
        assert!(user.attributes.root_admin);
        assert_eq!(user.attributes.external_id, None);
        assert_eq!(user.attributes.to_string(), "codeco <codeco@file.properties>");
    }

    #[test]
    fn change_serializes_only_set_fields() {
        let change = UserChange::builder()
            .username("codeco")
            .email("codeco@file.properties")
            .first_name("Rihan")
            .last_name("Arfan")
            .root_admin(false)
            .build();

        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({
                "username": "codeco",
                "email": "codeco@file.properties",
                "first_name": "Rihan",
                "last_name": "Arfan",
                "root_admin": false
            })
        );
    }

    #[test]
    fn debug_redacts_password() {
        let change = UserChange::builder().password("hunter2").build();
        let rendered = format!("{change:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
