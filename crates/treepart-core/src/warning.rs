//! Non-fatal planning warnings.
//!
//! Warnings accompany a fully valid plan; they are collected in the plan
//! outcome so the caller can log or surface them. A warning is never a
//! substitute for an error: fatal conditions abort planning with no plan.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanWarning {
    /// The requested partition count exceeded the available units (entries
    /// or clusters) and was clamped; planning continued with `effective`.
    PartitionCountReduced {
        requested: u32,
        effective: u32,
        available: u64,
    },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::PartitionCountReduced {
                requested,
                effective,
                available,
            } => write!(
                f,
                "requested {} partitions but only {} units are available; \
                 reduced the partition count to {}",
                requested, available, effective
            ),
        }
    }
}
