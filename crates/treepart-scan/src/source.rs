//! Traits the storage collaborator implements.
//!
//! The planner stack never reads file contents; it only needs entry counts
//! and physical cluster boundaries. Storage engines plug in behind these
//! object-safe traits; adapters live in `treepart-io`.

use treepart_core::error::Result;

/// Finite, non-restartable iterator over `(start, end)` cluster boundary
/// pairs, local to one file. `end` is exclusive.
pub type BoundaryIter<'a> = Box<dyn Iterator<Item = (u64, u64)> + 'a>;

/// An opened dataset file.
pub trait DataFile: std::fmt::Debug {
    /// Entry count of the named tree in this file.
    ///
    /// Fails with `Error::Storage` if the tree is absent.
    fn entry_count(&self, treename: &str) -> Result<u64>;

    /// Physical cluster boundaries of the named tree, starting at `start`.
    ///
    /// Fails with `Error::Storage` if the tree is absent.
    fn cluster_boundaries(&self, treename: &str, start: u64) -> Result<BoundaryIter<'_>>;
}

/// Opens dataset files by name.
pub trait FileOpener {
    /// Open `filename`, failing with `Error::Storage` if it cannot be read.
    ///
    /// The handle borrows from the opener; each file is opened, scanned, and
    /// dropped before the scanner moves to the next one.
    fn open(&self, filename: &str) -> Result<Box<dyn DataFile + '_>>;
}
