//! Cluster scanner: ordered cluster boundaries for one tree across files.

use treepart_core::cluster::{Cluster, FileAndIndex};
use treepart_core::error::Result;

use crate::source::{DataFile, FileOpener};

/// Extract the ordered cluster boundary list for `treename` across `files`.
///
/// Files are scanned in list order with a running entry `offset` and a
/// per-occurrence `index` (a filename repeated in the list is scanned again
/// and gets a fresh index). For each file the tree's boundary iterator is
/// consumed until a cluster starts at or past the file's entry count; each
/// boundary pair is shifted by `offset` into global coordinates.
///
/// The result is ordered by `(file index, start)` by construction. Any open
/// failure or missing tree aborts the scan with `Error::Storage`.
pub fn scan_clusters(
    opener: &dyn FileOpener,
    treename: &str,
    files: &[String],
) -> Result<Vec<Cluster>> {
    let mut clusters = Vec::new();
    let mut offset: u64 = 0;

    for (index, filename) in files.iter().enumerate() {
        let file = opener.open(filename)?;
        let entries = file.entry_count(treename)?;
        let boundaries = file.cluster_boundaries(treename, 0)?;

        for (start, end) in boundaries {
            if start >= entries {
                break;
            }
            clusters.push(Cluster {
                start: start + offset,
                end: end + offset,
                offset,
                file: FileAndIndex::new(filename.clone(), index as u32),
            });
        }

        offset += entries;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        tree = %treename,
        files = files.len(),
        clusters = clusters.len(),
        total_entries = offset,
        "scanned cluster boundaries"
    );

    Ok(clusters)
}
