#![forbid(unsafe_code)]
//! treepart: cluster-aware range partitioning for distributed columnar
//! datasets.
//!
//! Facade crate re-exporting the workspace surface. The pieces:
//! - [`treepart_core`]: data model, errors, config, hashing.
//! - [`treepart_scan`]: storage traits and the cluster scanner.
//! - [`treepart_planner`]: balanced/clustered planning and the advisor.
//! - [`treepart_io`]: in-memory sources and JSON layout catalogs.

pub use treepart_core::prelude::*;

pub use treepart_scan::{scan_clusters, BoundaryIter, DataFile, FileOpener};

pub use treepart_planner::{
    advise, balanced_ranges, build_ranges, clustered_ranges, rebase, CountUnit, PlanOutcome,
};

pub use treepart_io::{JsonCatalog, MemoryDataSource, TreeLayout};
