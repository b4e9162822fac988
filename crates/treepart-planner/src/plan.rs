//! Top-level planning: descriptor shape → balanced or clustered ranges.

use serde::{Deserialize, Serialize};

use treepart_core::dataset::{DatasetDescriptor, SourceShape};
use treepart_core::error::{Error, Result};
use treepart_core::hash::{hash_serde, Hash256};
use treepart_core::range::Range;
use treepart_core::warning::PlanWarning;

use treepart_scan::scanner::scan_clusters;
use treepart_scan::source::FileOpener;

use crate::advisor::{advise, CountUnit};
use crate::balanced::balanced_ranges;
use crate::clustered::clustered_ranges;

/// The complete result of one planning call.
///
/// The effective partition count is returned here instead of being written
/// back into the descriptor; the descriptor is immutable input. Warnings
/// accompany a fully valid plan and must be surfaced by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Partition count the plan was actually built with (after clamping).
    pub npartitions: u32,
    /// Disjoint work units, in partition order. One executor task each.
    pub ranges: Vec<Range>,
    /// Non-fatal planning warnings, in emission order.
    pub warnings: Vec<PlanWarning>,
}

impl PlanOutcome {
    /// Stable content hash of the range list, for caching/provenance.
    pub fn fingerprint(&self) -> Result<Hash256> {
        hash_serde(&self.ranges)
    }

    /// Total entries covered by the plan's ranges.
    pub fn total_entries(&self) -> u64 {
        self.ranges.iter().map(|r| r.len()).sum()
    }
}

/// Build the ordered range list for `descriptor`, requesting `requested`
/// partitions.
///
/// Decision order:
/// 1. Zero requested partitions is caller misuse (`Error::Plan`).
/// 2. Zero entries is fatal (`Error::EmptyDataset`).
/// 3. The request is clamped against the entry count; a partition can never
///    cover less than one entry.
/// 4. The descriptor's shape picks the path: no tree name → balanced split;
///    tree without files → `Error::InMemoryTree`; tree with files → scan
///    clusters, clamp against the cluster count, chunk on cluster boundaries.
///
/// All-or-nothing: a fatal error returns no partial range list.
pub fn build_ranges(
    descriptor: &DatasetDescriptor,
    requested: u32,
    opener: &dyn FileOpener,
) -> Result<PlanOutcome> {
    if requested == 0 {
        return Err(Error::Plan(
            "requested partition count must be positive".into(),
        ));
    }
    if descriptor.nentries == 0 {
        return Err(Error::EmptyDataset);
    }

    let mut warnings = Vec::new();

    let (mut npartitions, reduced) = advise(requested, descriptor.nentries, CountUnit::Entries)?;
    warnings.extend(reduced);

    let ranges = match descriptor.shape() {
        SourceShape::Balanced => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                nentries = descriptor.nentries,
                npartitions,
                "building balanced ranges"
            );

            balanced_ranges(descriptor.nentries, npartitions)
                .into_iter()
                .map(Range::Balanced)
                .collect()
        }

        SourceShape::InMemory { treename } => {
            return Err(Error::InMemoryTree(treename.to_string()));
        }

        SourceShape::Clustered { treename, files } => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                tree = %treename,
                files = files.len(),
                npartitions,
                "building clustered ranges"
            );

            let clusters = scan_clusters(opener, treename, files)?;

            let (effective, reduced) =
                advise(npartitions, clusters.len() as u64, CountUnit::Clusters)?;
            npartitions = effective;
            warnings.extend(reduced);

            clustered_ranges(&clusters, npartitions, treename, descriptor.friends.as_ref())?
                .into_iter()
                .map(Range::Clustered)
                .collect()
        }
    };

    Ok(PlanOutcome {
        npartitions,
        ranges,
        warnings,
    })
}
