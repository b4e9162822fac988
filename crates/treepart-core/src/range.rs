//! Range descriptors: the disjoint work units a plan produces.
//!
//! Ranges are immutable once built and rebuilt fresh on every planning call.
//! An executor consumes them one-to-one as task inputs; because they are
//! mutually exclusive it needs no synchronization between them.

use serde::{Deserialize, Serialize};

use crate::dataset::FriendInfo;

/// A range over a dataset with no clustering information, in global
/// coordinates. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRange {
    pub start: u64,
    pub end: u64,
}

impl EntryRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// A range over a clustered tree.
///
/// `start`/`end` are expressed in the local coordinate space of the *first*
/// file in `filelist` (the first file's offset has been subtracted), because
/// the consuming task opens the listed files independently of the rest of
/// the dataset. `filelist` is deduplicated and kept in original input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRange {
    pub start: u64,
    pub end: u64,
    pub treename: String,
    pub filelist: Vec<String>,
    pub friends: Option<FriendInfo>,
}

impl TreeRange {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// One unit of distributed work, tagged by how it was planned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Range {
    /// Arithmetic slice of an unclustered dataset.
    Balanced(EntryRange),
    /// Cluster-aligned slice of a file-backed tree.
    Clustered(TreeRange),
}

impl Range {
    /// Entry span of the range in its own coordinate space.
    pub fn span(&self) -> (u64, u64) {
        match self {
            Range::Balanced(r) => (r.start, r.end),
            Range::Clustered(r) => (r.start, r.end),
        }
    }

    pub fn len(&self) -> u64 {
        let (start, end) = self.span();
        end - start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
