#![forbid(unsafe_code)]
//! treepart-scan: the storage seam and the cluster scanner.
//!
//! Responsibilities:
//! - Define the object-safe traits the storage engine implements
//!   (`FileOpener`, `DataFile`): open a file, report a tree's entry count,
//!   iterate its physical cluster boundaries.
//! - Walk an ordered file list and produce the global, ordered cluster
//!   sequence the planner chunks into ranges.
//!
//! **No storage format knowledge here.** Adapters live in `treepart-io`; the
//! scanner only drives the trait surface, sequentially and read-only.

pub mod scanner;
pub mod source;

pub use scanner::scan_clusters;
pub use source::{BoundaryIter, DataFile, FileOpener};
