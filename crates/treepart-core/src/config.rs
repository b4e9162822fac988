//! Planner configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

/// Partition count used when the caller does not specify one.
pub const DEFAULT_NPARTITIONS: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Number of partitions to request when planning.
    pub npartitions: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            npartitions: DEFAULT_NPARTITIONS,
        }
    }
}

impl PlannerConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `TREEPART_NPARTITIONS`: requested partition count
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("TREEPART_NPARTITIONS") {
            if let Ok(v) = s.parse::<u32>() {
                cfg.npartitions = v;
            }
        }

        cfg
    }
}
