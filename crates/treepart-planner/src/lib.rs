#![forbid(unsafe_code)]
//! treepart-planner: from a dataset descriptor → disjoint, balanced ranges.
//!
//! Design:
//! - `balanced`: arithmetic slicing when no clustering information exists.
//! - `clustered`: chunk the scanned cluster sequence into contiguous groups,
//!   never splitting a cluster, and rebase each group into the coordinate
//!   space of the first file it touches.
//! - `advisor`: clamp a partition count that exceeds the available units,
//!   surfacing a non-fatal warning; zero units is fatal.
//! - `plan`: the top-level decision (balanced vs clustered vs unsupported)
//!   resolved once from the descriptor's shape.
//!
//! Planning is synchronous and read-only: one sequential scan per call, no
//! caching, no partial results. A call either returns a complete, exhaustive,
//! non-overlapping partition of the dataset or an error.

pub mod advisor;
pub mod balanced;
pub mod clustered;
pub mod plan;

pub use advisor::{advise, CountUnit};
pub use balanced::balanced_ranges;
pub use clustered::{clustered_ranges, rebase};
pub use plan::{build_ranges, PlanOutcome};
