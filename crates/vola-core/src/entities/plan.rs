use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A volunteering plan published by an association.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub volunteer_number: u32,
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(rename = "category_id", default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub association_id: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row-level action offered in the plans table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanAction {
    Delete,
    Update,
}

impl PlanAction {
    /// Actions the table offers for a given role.
    ///
    /// Every dashboard member may delete; only association owners update.
    #[must_use]
    pub fn available_for(role: Option<&Role>) -> Vec<Self> {
        let mut actions = vec![Self::Delete];
        if role.is_some_and(Role::manages_plans) {
            actions.push(Self::Update);
        }
        actions
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Update => "update",
        }
    }
}
