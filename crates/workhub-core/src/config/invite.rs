//! Invite lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Tenant invite configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteConfig {
    /// How long a pending invite stays acceptable, in hours.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_ttl_hours() -> u64 {
    168
}
