use std::path::PathBuf;

use crate::graph::GraphError;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("invalid road {source_number} -> {target_number}: city numbers start at 1")]
    CityNumber {
        source_number: u32,
        target_number: u32,
    },

    #[error("invalid road {source_number} -> {target_number}: {error}")]
    Road {
        source_number: u32,
        target_number: u32,
        #[source]
        error: GraphError,
    },
}
