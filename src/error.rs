//! The errors a calculation can end with. None of them is fatal to the
//! process: the caller reports the error and may try again.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by loading, dispatch, and `exec`.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened: missing, unreadable, or permission denied.
    #[error("can't open file {}: {source}", path.display())]
    FileAccess {
        /// Path we tried to open
        path: PathBuf,

        /// The error from the open call
        source: io::Error,
    },

    /// The file was opened, but reading it failed part way through. Whatever
    /// had been read is discarded.
    #[error("error reading file {}: {source}", path.display())]
    Read {
        /// Path of the file being read
        path: PathBuf,

        /// The underlying I/O or decoding fault
        source: io::Error,
    },

    /// The file the result should go to could not be created.
    #[error("can't create file {}: {source}", path.display())]
    Create {
        /// Path we tried to create
        path: PathBuf,

        /// The error from the create call
        source: io::Error,
    },

    /// The request can't be dispatched to any set operation.
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] Invalid),
}

/// Why a request was rejected before any set operation ran.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Invalid {
    /// The selector names no known operation.
    #[error("unknown operation `{0}` (expected intersect, union or diff)")]
    UnknownOperation(String),

    /// No selector was given.
    #[error("no operation selected")]
    NoOperation,

    /// One or both files were not given.
    #[error("two files must be selected")]
    MissingFile,
}

impl Error {
    /// Exit status for the command line: 2 for usage errors, 1 for file errors.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidOperation(_) => 2,
            Error::FileAccess { .. } | Error::Read { .. } | Error::Create { .. } => 1,
        }
    }
}
