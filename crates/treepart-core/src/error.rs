use thiserror::Error;

/// Canonical result for the planner stack.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Planning a dataset with zero entries (or zero clusters) is impossible:
    // there is nothing to distribute. Always fatal, never clamped.
    #[error("Empty dataset: no entries to distribute")]
    EmptyDataset,

    #[error("In-memory tree '{0}' has no backing files and cannot be partitioned")]
    InMemoryTree(String),

    #[error("Storage access: {0}")]
    Storage(String),

    #[error("Planning error: {0}")]
    Plan(String),

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Plan(e.to_string())
    }
}
