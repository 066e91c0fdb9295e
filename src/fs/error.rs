use std::path::PathBuf;
use thiserror::Error;

pub type FsResult<T> = Result<T, FsError>;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("Cannot canonicalize {path}: {source}")]
    Canonicalize { path: PathBuf, source: std::io::Error },

    #[error("Cannot create unique file under {parent}: {source}")]
    UniqueFile { parent: PathBuf, source: std::io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
