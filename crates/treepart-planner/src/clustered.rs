//! Clustered planning: chunk the cluster sequence, never splitting a cluster.

use treepart_core::cluster::{Cluster, FileSet};
use treepart_core::dataset::FriendInfo;
use treepart_core::error::{Error, Result};
use treepart_core::range::TreeRange;

/// Re-express a global entry coordinate in the local space of the file whose
/// cumulative offset is `first_offset`.
///
/// A consuming task opens a range's files independently of the rest of the
/// dataset, so its entry indices must be relative to the first file it opens,
/// not to the global dataset. Inverse: `local + first_offset == global`.
pub fn rebase(entry: u64, first_offset: u64) -> u64 {
    entry - first_offset
}

/// Chunk boundary indices for splitting `len` items into `n_chunks` groups
/// as evenly as possible: chunk `i` (1-indexed) ends at `round(i * len / n)`.
///
/// Boundaries are monotone, so chunks are contiguous; they can still differ
/// in size by one item. Chunking counts clusters, not entries, so the
/// resulting partitions may be uneven in entry count. That is accepted
/// behavior: cluster boundaries are never split.
fn chunk_bounds(len: usize, n_chunks: u32) -> Vec<(usize, usize)> {
    let per_chunk = len as f64 / n_chunks as f64;

    let mut bounds = Vec::with_capacity(n_chunks as usize);
    let mut last = 0;
    for i in 1..=n_chunks as u64 {
        let cur = (i as f64 * per_chunk).round() as usize;
        bounds.push((last, cur));
        last = cur;
    }
    bounds
}

/// Group the ordered cluster sequence into `npartitions` contiguous chunks
/// and build one `TreeRange` per chunk.
///
/// Per chunk: `start`/`end` are the first cluster's start and the last
/// cluster's end, rebased by the first cluster's offset; `filelist` is the
/// chunk's files deduplicated by `(filename, index)` identity and restored
/// to original input order; `treename` and `friends` pass through verbatim.
///
/// Callers must have clamped `npartitions` to `1..=clusters.len()` first.
/// The chunk-boundary rounding can in principle still produce an empty chunk
/// for pathological inputs; that is reported as `Error::Invariant` rather
/// than silently emitting an empty range.
pub fn clustered_ranges(
    clusters: &[Cluster],
    npartitions: u32,
    treename: &str,
    friends: Option<&FriendInfo>,
) -> Result<Vec<TreeRange>> {
    let mut ranges = Vec::with_capacity(npartitions as usize);

    for (lo, hi) in chunk_bounds(clusters.len(), npartitions) {
        let chunk = &clusters[lo..hi];

        // Clusters are ordered by (file index, start), so the chunk's entry
        // span is first.start..last.end.
        let (first, last) = match (chunk.first(), chunk.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(Error::Invariant(format!(
                    "empty chunk [{lo}, {hi}) while splitting {} clusters into {} partitions",
                    clusters.len(),
                    npartitions
                )))
            }
        };

        let filelist: FileSet = chunk.iter().map(|c| &c.file).collect();

        ranges.push(TreeRange {
            start: rebase(first.start, first.offset),
            end: rebase(last.end, first.offset),
            treename: treename.to_string(),
            filelist: filelist.into_filenames(),
            friends: friends.cloned(),
        });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        tree = %treename,
        clusters = clusters.len(),
        partitions = ranges.len(),
        "created clustered ranges"
    );

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::chunk_bounds;

    #[test]
    fn chunk_bounds_cover_all_indices_contiguously() {
        for len in 1..=40usize {
            for n in 1..=len as u32 {
                let bounds = chunk_bounds(len, n);
                assert_eq!(bounds.len(), n as usize);
                assert_eq!(bounds[0].0, 0);
                assert_eq!(bounds[n as usize - 1].1, len);
                for w in bounds.windows(2) {
                    assert_eq!(w[0].1, w[1].0);
                }
            }
        }
    }

    #[test]
    fn chunk_sizes_differ_by_at_most_one_for_even_splits() {
        let bounds = chunk_bounds(10, 4);
        let sizes: Vec<usize> = bounds.iter().map(|(lo, hi)| hi - lo).collect();
        assert_eq!(sizes.iter().sum::<usize>(), 10);
        assert!(sizes.iter().all(|&s| s == 2 || s == 3));
    }
}
