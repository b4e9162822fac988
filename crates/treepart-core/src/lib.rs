#![forbid(unsafe_code)]
//! treepart-core: shared data model for cluster-aware range partitioning.
//!
//! This crate holds the types every other layer agrees on:
//! - `Cluster` / `FileAndIndex`: physical boundary units inside dataset files.
//! - `EntryRange` / `TreeRange` / `Range`: the disjoint work units a plan
//!   hands to a distributed executor.
//! - `DatasetDescriptor` / `SourceShape`: the read-only description of the
//!   dataset being partitioned, resolved once into a tagged shape.
//! - `Error` / `PlanWarning`: the fatal and non-fatal planning outcomes.
//!
//! **No I/O here.** Scanning and planning live in `treepart-scan` and
//! `treepart-planner`; storage adapters live in `treepart-io`.

pub mod cluster;
pub mod config;
pub mod dataset;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod range;
pub mod warning;

/// Crate version, recorded in plan outcomes for provenance.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
