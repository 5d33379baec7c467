//! Platform roles carried in the session credential's `role` claim.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// Identity class of a signed-in user.
///
/// Only [`Role::Admin`] and [`Role::AssociationOwner`] may see dashboard
/// content. Any other claim value is preserved verbatim in [`Role::Other`] so
/// status output can show what the backend issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    AssociationOwner,
    Other(String),
}

impl Role {
    /// Wire representation used by the backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::AssociationOwner => "associationOwner",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this role may see protected dashboard content.
    #[must_use]
    pub const fn is_dashboard_member(&self) -> bool {
        matches!(self, Self::Admin | Self::AssociationOwner)
    }

    /// Association owners manage their own plans (create and update).
    #[must_use]
    pub const fn manages_plans(&self) -> bool {
        matches!(self, Self::AssociationOwner)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Self::Admin,
            "associationOwner" => Self::AssociationOwner,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for Role {
    fn schema_name() -> Cow<'static, str> {
        "Role".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::Role;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("associationOwner", Role::AssociationOwner)]
    #[case("volunteer", Role::Other("volunteer".into()))]
    #[case("Admin", Role::Other("Admin".into()))]
    fn parses_wire_values(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(raw.parse::<Role>().unwrap(), expected);
    }

    #[test]
    fn only_admin_and_owner_are_dashboard_members() {
        assert!(Role::Admin.is_dashboard_member());
        assert!(Role::AssociationOwner.is_dashboard_member());
        assert!(!Role::Other("volunteer".into()).is_dashboard_member());
        assert!(!Role::Other(String::new()).is_dashboard_member());
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&Role::AssociationOwner).unwrap();
        assert_eq!(json, r#""associationOwner""#);
        let other: Role = serde_json::from_str(r#""volunteer""#).unwrap();
        assert_eq!(other, Role::Other("volunteer".into()));
        assert_eq!(serde_json::to_string(&other).unwrap(), r#""volunteer""#);
    }

    #[test]
    fn only_owner_manages_plans() {
        assert!(Role::AssociationOwner.manages_plans());
        assert!(!Role::Admin.manages_plans());
    }
}
