use std::{io, path::PathBuf};

use thiserror::Error;

/// Every way loading a mod asset can fail. None of them is fatal to startup.
#[derive(Debug, Error)]
pub enum ModError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed json in {}: {message}", path.display())]
    MalformedJson { path: PathBuf, message: String },
    #[error("schema mismatch in {}: {message}", path.display())]
    SchemaMismatch { path: PathBuf, message: String },
    #[error("image header truncated in {}: {len} bytes, need at least {needed}", path.display())]
    TruncatedImageHeader {
        path: PathBuf,
        len: usize,
        needed: usize,
    },
    #[error("invalid image dimensions in {}: {width}x{height}", path.display())]
    InvalidDimensions {
        path: PathBuf,
        width: i32,
        height: i32,
    },
    #[error("failed to decode {}: {message}", path.display())]
    DecodeFailure { path: PathBuf, message: String },
    #[error("asset path escapes the mods directory: {0}")]
    PathEscape(String),
}

impl ModError {
    /// Map an I/O error on `path`, keeping `NotFound` as its own kind.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound(path),
            _ => Self::Io { path, source },
        }
    }

    /// Short stable name of the failure kind, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FileNotFound",
            Self::Io { .. } => "IOError",
            Self::MalformedJson { .. } => "MalformedJson",
            Self::SchemaMismatch { .. } => "SchemaMismatch",
            Self::TruncatedImageHeader { .. } => "TruncatedImageHeader",
            Self::InvalidDimensions { .. } => "InvalidDimensions",
            Self::DecodeFailure { .. } => "DecodeFailure",
            Self::PathEscape(_) => "PathEscape",
        }
    }
}

pub type ModResult<T> = Result<T, ModError>;
