//! In-memory file source for testing.
//!
//! Provides a HashMap-based source that implements the `FileOpener` trait.
//! Used in tests and benchmarks to model arbitrary physical layouts without
//! file I/O.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use treepart_core::error::{Error, Result};
use treepart_scan::source::{BoundaryIter, DataFile, FileOpener};

/// Physical layout of one tree inside one file: its entry count and its
/// cluster edges. `edges[0] == 0`, `edges.last() == entries`, strictly
/// increasing; consecutive edges delimit one cluster each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLayout {
    pub entries: u64,
    pub edges: Vec<u64>,
}

impl TreeLayout {
    /// Layout with explicit cluster edges.
    pub fn from_edges(edges: Vec<u64>) -> Self {
        let entries = edges.last().copied().unwrap_or(0);
        Self { entries, edges }
    }

    /// Layout of `entries` entries in uniform clusters of `cluster_size`
    /// (the last cluster may be smaller).
    pub fn with_cluster_size(entries: u64, cluster_size: u64) -> Self {
        let mut edges = Vec::with_capacity((entries / cluster_size.max(1)) as usize + 2);
        let mut edge = 0;
        while edge < entries {
            edges.push(edge);
            edge += cluster_size.max(1);
        }
        edges.push(entries);
        Self { entries, edges }
    }

    /// Single cluster spanning the whole tree.
    pub fn single_cluster(entries: u64) -> Self {
        Self {
            entries,
            edges: vec![0, entries],
        }
    }
}

/// Thread-safe in-memory file source using a HashMap.
#[derive(Clone, Default)]
pub struct MemoryDataSource {
    files: Arc<Mutex<HashMap<String, HashMap<String, TreeLayout>>>>,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or extend) a file with a tree layout.
    pub fn insert_tree(&self, filename: &str, treename: &str, layout: TreeLayout) {
        let mut files = self.files.lock().unwrap();
        files
            .entry(filename.to_string())
            .or_default()
            .insert(treename.to_string(), layout);
    }

    /// Check if a file is registered.
    pub fn contains(&self, filename: &str) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(filename)
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        let files = self.files.lock().unwrap();
        files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all registered files.
    pub fn clear(&self) {
        let mut files = self.files.lock().unwrap();
        files.clear();
    }
}

impl FileOpener for MemoryDataSource {
    fn open(&self, filename: &str) -> Result<Box<dyn DataFile + '_>> {
        let files = self.files.lock().unwrap();
        let trees = files
            .get(filename)
            .ok_or_else(|| Error::Storage(format!("open: file not found: {filename}")))?
            .clone();
        Ok(Box::new(MemoryFile {
            filename: filename.to_string(),
            trees,
        }))
    }
}

#[derive(Debug)]
struct MemoryFile {
    filename: String,
    trees: HashMap<String, TreeLayout>,
}

impl MemoryFile {
    fn layout(&self, treename: &str) -> Result<&TreeLayout> {
        self.trees.get(treename).ok_or_else(|| {
            Error::Storage(format!(
                "tree '{}' not found in '{}'",
                treename, self.filename
            ))
        })
    }
}

impl DataFile for MemoryFile {
    fn entry_count(&self, treename: &str) -> Result<u64> {
        Ok(self.layout(treename)?.entries)
    }

    fn cluster_boundaries(&self, treename: &str, start: u64) -> Result<BoundaryIter<'_>> {
        let layout = self.layout(treename)?;
        Ok(Box::new(
            layout
                .edges
                .windows(2)
                .map(|w| (w[0], w[1]))
                .filter(move |&(_, end)| end > start),
        ))
    }
}
