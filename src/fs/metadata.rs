//! Per-entry metadata lookup

use super::mode::FileKind;
use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to describe a single directory entry
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Failed to stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The subset of `lstat` output shown in a listing row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    /// Modification time in seconds since the Unix epoch
    pub mtime: i64,
}

impl EntryMetadata {
    /// Looks up metadata without following a final symlink.
    pub fn lstat(path: &Path) -> Result<Self, EntryError> {
        let meta = fs::symlink_metadata(path).map_err(|source| EntryError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from(&meta))
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_mode(self.mode)
    }

    pub fn is_symlink(&self) -> bool {
        self.kind() == FileKind::Symlink
    }
}

impl From<&fs::Metadata> for EntryMetadata {
    fn from(meta: &fs::Metadata) -> Self {
        Self {
            mode: meta.mode(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            mtime: meta.mtime(),
        }
    }
}

/// Reads the text of a symlink, `None` if it cannot be read.
pub fn link_target(path: &Path) -> Option<PathBuf> {
    fs::read_link(path).ok()
}
