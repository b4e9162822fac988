//! Partition count policy: clamp a request that exceeds the available units.

use std::fmt;

use treepart_core::error::{Error, Result};
use treepart_core::warning::PlanWarning;

/// What the available unit count was measured in, for warning/trace text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUnit {
    Entries,
    Clusters,
}

impl fmt::Display for CountUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountUnit::Entries => write!(f, "entries"),
            CountUnit::Clusters => write!(f, "clusters"),
        }
    }
}

/// Reduce `requested` to `available` when it exceeds it.
///
/// A partition must cover at least one unit, so a request beyond the unit
/// count is clamped and reported as a non-fatal `PartitionCountReduced`
/// warning; planning continues with the reduced count. Zero available units
/// is fatal: an empty dataset cannot be distributed.
pub fn advise(
    requested: u32,
    available: u64,
    unit: CountUnit,
) -> Result<(u32, Option<PlanWarning>)> {
    if available == 0 {
        return Err(Error::EmptyDataset);
    }

    if requested as u64 > available {
        // available < requested <= u32::MAX, so the cast is lossless.
        let effective = available as u32;

        #[cfg(feature = "tracing")]
        tracing::warn!(
            requested,
            effective,
            available,
            unit = %unit,
            "reducing partition count"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = unit;

        return Ok((
            effective,
            Some(PlanWarning::PartitionCountReduced {
                requested,
                effective,
                available,
            }),
        ));
    }

    Ok((requested, None))
}
