//! User entity - an account on the site

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Site role, controlling access to moderation and catalog management
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// User entity (password hash is stored separately, never on the entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            avatar: None,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
