#![forbid(unsafe_code)]
//! treepart-io: `FileOpener` implementations.
//!
//! - `memory`: thread-safe in-memory source for tests and embedding.
//! - `catalog`: JSON sidecar documents describing the physical layout
//!   (entry counts and cluster edges per tree per file) of a dataset, so
//!   plans can be produced without binding to any columnar container format.

pub mod catalog;
pub mod memory;

pub use catalog::JsonCatalog;
pub use memory::{MemoryDataSource, TreeLayout};
