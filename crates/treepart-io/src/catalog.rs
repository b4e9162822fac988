//! JSON layout catalogs.
//!
//! A catalog is a sidecar document describing the physical layout of a
//! file-backed dataset: per file, the trees it holds with their entry counts
//! and cluster edges. It stands in for the storage engine's metadata query so
//! the planner can run against any container format whose layout has been
//! exported once.
//!
//! ```json
//! {
//!   "files": [
//!     {
//!       "path": "run1.data",
//!       "trees": [
//!         { "name": "events", "entries": 1000, "cluster_edges": [0, 777, 1000] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use treepart_core::dataset::DatasetDescriptor;
use treepart_core::error::{Error, Result};
use treepart_scan::source::{BoundaryIter, DataFile, FileOpener};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogTree {
    pub name: String,
    pub entries: u64,
    pub cluster_edges: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub path: String,
    pub trees: Vec<CatalogTree>,
}

impl CatalogFile {
    fn tree(&self, treename: &str) -> Option<&CatalogTree> {
        self.trees.iter().find(|t| t.name == treename)
    }
}

/// A parsed, validated layout catalog. Implements `FileOpener` by looking up
/// file entries in the document instead of opening anything on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCatalog {
    pub files: Vec<CatalogFile>,
}

impl JsonCatalog {
    /// Parse a catalog from JSON text and validate its layout invariants.
    pub fn from_str(text: &str) -> Result<Self> {
        let catalog: JsonCatalog =
            serde_json::from_str(text).map_err(|e| Error::Config(format!("catalog parse: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Storage(format!("open: {e}")))?;
        Self::from_str(&text)
    }

    /// Check the cluster invariants of every tree in the catalog: edges start
    /// at 0, strictly increase, and close at the tree's entry count.
    pub fn validate(&self) -> Result<()> {
        for file in &self.files {
            for tree in &file.trees {
                let edges = &tree.cluster_edges;
                if edges.len() < 2 {
                    return Err(Error::Config(format!(
                        "tree '{}' in '{}': needs at least two cluster edges",
                        tree.name, file.path
                    )));
                }
                if edges[0] != 0 {
                    return Err(Error::Config(format!(
                        "tree '{}' in '{}': cluster edges must start at 0",
                        tree.name, file.path
                    )));
                }
                if !edges.windows(2).all(|w| w[0] < w[1]) {
                    return Err(Error::Config(format!(
                        "tree '{}' in '{}': cluster edges must be strictly increasing",
                        tree.name, file.path
                    )));
                }
                if *edges.last().unwrap_or(&0) != tree.entries {
                    return Err(Error::Config(format!(
                        "tree '{}' in '{}': last cluster edge must equal the entry count ({})",
                        tree.name, file.path, tree.entries
                    )));
                }
            }
        }
        Ok(())
    }

    /// Paths of the files carrying `treename`, in catalog order.
    pub fn file_list(&self, treename: &str) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| f.tree(treename).is_some())
            .map(|f| f.path.clone())
            .collect()
    }

    /// Total entry count of `treename` across the catalog.
    pub fn total_entries(&self, treename: &str) -> u64 {
        self.files
            .iter()
            .filter_map(|f| f.tree(treename))
            .map(|t| t.entries)
            .sum()
    }

    /// Build the planner's dataset descriptor for `treename`.
    ///
    /// Fails with `Error::Storage` if no catalog file carries the tree.
    pub fn descriptor(&self, treename: &str) -> Result<DatasetDescriptor> {
        let files = self.file_list(treename);
        if files.is_empty() {
            return Err(Error::Storage(format!(
                "tree '{treename}' not found in any catalog file"
            )));
        }
        let nentries = self.total_entries(treename);
        Ok(DatasetDescriptor::for_tree(treename, files, nentries))
    }

    fn file(&self, filename: &str) -> Option<&CatalogFile> {
        self.files.iter().find(|f| f.path == filename)
    }
}

impl FileOpener for JsonCatalog {
    fn open(&self, filename: &str) -> Result<Box<dyn DataFile + '_>> {
        let file = self
            .file(filename)
            .ok_or_else(|| Error::Storage(format!("open: file not in catalog: {filename}")))?;
        Ok(Box::new(CatalogHandle { file }))
    }
}

#[derive(Debug)]
struct CatalogHandle<'a> {
    file: &'a CatalogFile,
}

impl<'a> CatalogHandle<'a> {
    fn tree(&self, treename: &str) -> Result<&'a CatalogTree> {
        self.file.tree(treename).ok_or_else(|| {
            Error::Storage(format!(
                "tree '{}' not found in '{}'",
                treename, self.file.path
            ))
        })
    }
}

impl DataFile for CatalogHandle<'_> {
    fn entry_count(&self, treename: &str) -> Result<u64> {
        Ok(self.tree(treename)?.entries)
    }

    fn cluster_boundaries(&self, treename: &str, start: u64) -> Result<BoundaryIter<'_>> {
        let tree = self.tree(treename)?;
        Ok(Box::new(
            tree.cluster_edges
                .windows(2)
                .map(|w| (w[0], w[1]))
                .filter(move |&(_, end)| end > start),
        ))
    }
}
