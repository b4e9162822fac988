//! Dataset description consumed by the planner.
//!
//! The descriptor is read-only input: the planner never mutates it, and the
//! effective partition count is an explicit output of planning rather than a
//! field written back here.

use serde::{Deserialize, Serialize};

/// Linkage metadata for auxiliary ("friend") trees whose rows are aligned by
/// entry index to the primary tree. Opaque to the planner: it is cloned into
/// every clustered range verbatim so the executor can join at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendInfo {
    /// Friend tree names with an optional alias each.
    pub names: Vec<(String, Option<String>)>,
    /// Per-friend ordered file lists, parallel to `names`.
    pub file_names: Vec<Vec<String>>,
}

impl FriendInfo {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Read-only description of the dataset to partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    /// Total entry count over the whole dataset.
    pub nentries: u64,
    /// Name of the tree; absent means "no clustering, use balanced split".
    pub treename: Option<String>,
    /// Ordered input file list; absent together with `treename`, or absent
    /// alone for an in-memory-only tree.
    pub files: Option<Vec<String>>,
    /// Optional friend-tree linkage, passed through unchanged.
    pub friends: Option<FriendInfo>,
}

impl DatasetDescriptor {
    /// Descriptor for an unclustered dataset of `nentries` entries.
    pub fn unclustered(nentries: u64) -> Self {
        Self {
            nentries,
            treename: None,
            files: None,
            friends: None,
        }
    }

    /// Descriptor for a tree spread over `files`.
    pub fn for_tree(
        treename: impl Into<String>,
        files: Vec<String>,
        nentries: u64,
    ) -> Self {
        Self {
            nentries,
            treename: Some(treename.into()),
            files: Some(files),
            friends: None,
        }
    }

    pub fn with_friends(mut self, friends: FriendInfo) -> Self {
        self.friends = Some(friends);
        self
    }

    /// Resolve the dataset shape once, so the three planning paths are
    /// exhaustive instead of scattered attribute probing.
    pub fn shape(&self) -> SourceShape<'_> {
        match (&self.treename, &self.files) {
            (Some(treename), Some(files)) if !files.is_empty() => SourceShape::Clustered {
                treename,
                files,
            },
            (Some(treename), _) => SourceShape::InMemory { treename },
            (None, _) => SourceShape::Balanced,
        }
    }
}

/// The three planning paths, resolved up front from the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape<'a> {
    /// No clustering information: split arithmetically over the entry count.
    Balanced,
    /// File-backed tree: scan clusters and split on their boundaries.
    Clustered {
        treename: &'a str,
        files: &'a [String],
    },
    /// Tree with no backing files: cannot be partitioned.
    InMemory { treename: &'a str },
}
