//! Balanced planning: arithmetic slicing with no clustering information.

use treepart_core::range::EntryRange;

/// Split `[0, nentries)` into `npartitions` contiguous ranges.
///
/// Each range holds `nentries / npartitions` entries; the first
/// `nentries % npartitions` ranges hold one extra entry each. The larger
/// ranges always come first; downstream load balancing may rely on this
/// left-loaded distribution, so the walk below is the contract, not an
/// implementation detail.
///
/// Callers must have clamped `npartitions` to `1..=nentries` first (the
/// advisor's job), so every produced range is non-empty.
pub fn balanced_ranges(nentries: u64, npartitions: u32) -> Vec<EntryRange> {
    let partition_size = nentries / npartitions as u64;
    let mut remainder = nentries % npartitions as u64;

    let mut ranges = Vec::with_capacity(npartitions as usize);
    let mut i = 0;

    while i < nentries {
        let start = i;
        let mut end = start + partition_size;

        if remainder > 0 {
            // The modulo value is not exhausted; extend the current range
            // by one entry.
            end += 1;
            remainder -= 1;
        }

        i = end;
        ranges.push(EntryRange::new(start, end));
    }

    ranges
}
