//! List query configuration.

use serde::{Deserialize, Serialize};

/// Defaults and bounds for paginated document listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Page size used when a request omits `limit` or sends a value below 1.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Upper bound applied to `limit`.
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u64 {
    20
}

fn default_max_limit() -> u64 {
    100
}
