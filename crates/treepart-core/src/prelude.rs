//! Convenient re-exports for downstream crates.

pub use crate::cluster::{Cluster, FileAndIndex, FileSet};
pub use crate::config::PlannerConfig;
pub use crate::dataset::{DatasetDescriptor, FriendInfo, SourceShape};
pub use crate::error::{Error, Result};
pub use crate::hash::{hash_serde, Hash256};
pub use crate::range::{EntryRange, Range, TreeRange};
pub use crate::warning::PlanWarning;
