//! Statistics endpoint paths.

use serde::{Deserialize, Serialize};

fn default_general_path() -> String {
    "/stats/general".into()
}

fn default_association_path() -> String {
    "/stats/association".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    /// Platform-wide stats, read by admins.
    #[serde(default = "default_general_path")]
    pub general_path: String,

    /// Per-association stats, read by association owners.
    #[serde(default = "default_association_path")]
    pub association_path: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            general_path: default_general_path(),
            association_path: default_association_path(),
        }
    }
}
