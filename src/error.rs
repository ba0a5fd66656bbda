use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open compressed stream: {0}")]
    Compression(#[from] niffler::Error),

    #[error("Failed to decode protobuf: {0}")]
    Protobuf(#[from] protobuf::Error),

    #[error("Invalid Newick: {0}")]
    Newick(String),

    #[error("Tree has {nodes} nodes but the file carries {lists} mutation lists")]
    MutationListCount { nodes: usize, lists: usize },

    #[error("Duplicate node name: {0}")]
    DuplicateNode(String),

    #[error("Unknown node index: {0}")]
    UnknownNode(usize),
}

impl MatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MatError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn newick(reason: impl ToString) -> Self {
        MatError::Newick(reason.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Split scan worker for position {position} panicked")]
    WorkerPanicked { position: u32 },

    #[error("Invalid option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}
