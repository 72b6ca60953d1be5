//! Error type for the generator.

use crate::format::FormatError;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

//-----------------------------------------------------------------------------

/// Errors from parsing the configuration, generating the source, or writing the output.
#[derive(Error, Debug)]
pub enum Error {
    /// The module name was not given or was empty.
    #[error("module name is required (use --module NAME)")]
    MissingModule,

    /// The module name is not a valid Rust identifier.
    #[error("invalid module name: {0:?} is not a Rust identifier")]
    InvalidModule(String),

    /// The command line could not be parsed.
    #[error("{0}")]
    Options(#[from] getopts::Fail),

    /// The generated source failed validation.
    ///
    /// This is always a bug in the generator.
    #[error("failed to format generated code: {0}")]
    Format(#[from] FormatError),

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The output file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` if the error is caused by the command line rather than by generation or output.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Error::MissingModule | Error::InvalidModule(_) | Error::Options(_))
    }
}

/// Result type for the generator.
pub type Result<T> = std::result::Result<T, Error>;

//-----------------------------------------------------------------------------
