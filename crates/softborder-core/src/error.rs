//! Error types for Softborder

use std::path::PathBuf;

use thiserror::Error;

use crate::names::ZoneKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} zone #{index} sets neither a minimum nor a maximum bound")]
    UnboundedZone { kind: ZoneKind, index: usize },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unbounded_zone(kind: ZoneKind, index: usize) -> Self {
        Self::UnboundedZone { kind, index }
    }

    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }
}
