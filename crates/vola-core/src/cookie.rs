//! Cookie attribute policy shared by configuration and the token store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cross-site sending policy of the session cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl SameSite {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SameSite;

    #[test]
    fn default_is_strict() {
        assert_eq!(SameSite::default(), SameSite::Strict);
    }

    #[test]
    fn config_values_are_lowercase() {
        let parsed: SameSite = serde_json::from_str(r#""lax""#).unwrap();
        assert_eq!(parsed, SameSite::Lax);
        assert_eq!(parsed.to_string(), "Lax");
    }
}
