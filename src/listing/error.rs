use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a directory listing
#[derive(Debug, Error)]
pub enum ListError {
    /// The target could not be opened as a directory; nothing was written
    #[error("Error opening directory: {source}")]
    OpenDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the table to the output failed
    #[error("Failed to write listing: {0}")]
    Output(#[from] io::Error),
}
