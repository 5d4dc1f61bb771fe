//! # User model as served by the backend
//!
//! [`User`] mirrors the `/auth/me` payload. The backend stores company
//! administrators enrolled through `/enroll` with a combined name of the form
//! `"<person>@<company>"`; [`User::display_name`] and [`User::company_name`]
//! split it back apart.
//!
//! [`LoginRequest`] and [`RegisterRequest`] are the request bodies for
//! `POST auth/login` and `POST auth/register`. Both answer with an
//! [`AuthSession`] carrying the bearer credential.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// User information returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name without the enrolled company suffix, falling back to email.
    pub fn display_name(&self) -> &str {
        let person = self.name.split('@').next().unwrap_or_default().trim();
        if person.is_empty() {
            &self.email
        } else {
            person
        }
    }

    /// Company an enrolled administrator belongs to.
    pub fn company_name(&self) -> Option<&str> {
        self.name
            .split_once('@')
            .map(|(_, company)| company.trim())
            .filter(|company| !company.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub tel: String,
    pub role: Role,
    pub password: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Successful login / registration response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}
