use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::role::Role;

/// Body of `POST /auth/login`.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

/// Association profile created together with its owner account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssociationData {
    pub name: String,
    pub description: String,
}

/// Body of `POST /auth/register`.
///
/// Signup is reserved for association owners; [`RegisterRequest::association_owner`]
/// pins the role so callers cannot register any other identity.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub country: String,
    pub role: Role,
    pub city: String,
    #[serde(default)]
    pub profile_picture: String,
    pub association_data: AssociationData,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("association", &self.association_data.name)
            .finish_non_exhaustive()
    }
}

impl RegisterRequest {
    /// Build an association-owner registration.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn association_owner(
        email: String,
        password: String,
        name: String,
        age: u32,
        gender: Gender,
        country: String,
        city: String,
        association_data: AssociationData,
    ) -> Self {
        Self {
            email,
            password,
            name,
            age,
            gender,
            country,
            role: Role::AssociationOwner,
            city,
            profile_picture: String::new(),
            association_data,
        }
    }

    #[must_use]
    pub fn with_profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = url.into();
        self
    }

    /// Check the fields the signup form marks as required.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first missing or invalid field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("country", &self.country),
            ("city", &self.city),
            ("association name", &self.association_data.name),
            ("association description", &self.association_data.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} is required")));
            }
        }
        if !self.email.contains('@') {
            return Err(CoreError::Validation(format!(
                "'{}' is not an email address",
                self.email
            )));
        }
        if self.role != Role::AssociationOwner {
            return Err(CoreError::Validation(
                "signup is only available to association owners".into(),
            ));
        }
        Ok(())
    }
}

/// User profile returned in the login envelope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "owner_id", default)]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

/// Payload of a successful registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignupReceipt {
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}
