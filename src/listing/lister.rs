//! Detailed directory listing
//!
//! [`DirectoryLister`] walks one directory in enumeration order and writes a
//! row per entry as soon as it is resolved. Entries that cannot be stat'ed are
//! skipped, unresolvable owners and groups render as `unknown`, and unreadable
//! symlink targets simply lose their ` -> target` suffix. Only failing to open
//! the directory itself, or failing to write the output, aborts the listing.

use super::error::ListError;
use super::table::{self, Row};
use crate::fs::{
    format_permissions, link_target, CachedIdentity, EntryError, EntryMetadata, IdentityResolver,
    SystemIdentity, UNKNOWN_IDENTITY,
};
use chrono::{Local, TimeZone};
use std::ffi::OsStr;
use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Counts reported after a completed listing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListingSummary {
    /// Rows written
    pub listed: usize,
    /// Entries dropped because their metadata could not be read
    pub skipped: usize,
}

pub struct DirectoryLister<R = CachedIdentity<SystemIdentity>, Tz = Local> {
    identity: R,
    timezone: Tz,
}

impl DirectoryLister {
    /// Lister using the system identity databases and the local time zone
    pub fn new() -> Self {
        Self {
            identity: CachedIdentity::new(SystemIdentity),
            timezone: Local,
        }
    }
}

impl Default for DirectoryLister {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, Tz> DirectoryLister<R, Tz> {
    pub fn with_identity<R2>(self, identity: R2) -> DirectoryLister<R2, Tz> {
        DirectoryLister {
            identity,
            timezone: self.timezone,
        }
    }

    pub fn with_timezone<Tz2>(self, timezone: Tz2) -> DirectoryLister<R, Tz2> {
        DirectoryLister {
            identity: self.identity,
            timezone,
        }
    }
}

impl<R, Tz> DirectoryLister<R, Tz>
where
    R: IdentityResolver,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// Writes the header, separator and one row per entry of `dir` to `out`.
    ///
    /// Returns [`ListError::OpenDirectory`] without writing anything if `dir`
    /// cannot be opened.
    pub fn list<W: Write>(&self, dir: &Path, out: &mut W) -> Result<ListingSummary, ListError> {
        let entries = fs::read_dir(dir).map_err(|source| ListError::OpenDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!(path = %dir.display(), "Listing directory");

        writeln!(out, "{}", table::header())?;
        writeln!(out, "{}", table::SEPARATOR)?;

        let mut summary = ListingSummary::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(path = %dir.display(), error = %e, "Failed to read directory entry, stopping");
                    break;
                }
            };

            let name = entry.file_name();
            if name == "." || name == ".." {
                continue;
            }

            match self.describe(dir, &name) {
                Ok(row) => {
                    row.write_to(out)?;
                    summary.listed += 1;
                }
                Err(e) => {
                    debug!(error = %e, "Skipping entry");
                    summary.skipped += 1;
                }
            }
        }

        debug!(
            listed = summary.listed,
            skipped = summary.skipped,
            "Finished listing {}",
            dir.display()
        );
        Ok(summary)
    }

    /// Resolves everything shown for the entry `name` inside `dir`.
    pub fn describe<'a>(&self, dir: &Path, name: &'a OsStr) -> Result<Row<'a>, EntryError> {
        let full_path = dir.join(name);
        let meta = EntryMetadata::lstat(&full_path)?;

        let owner = self
            .identity
            .user_name(meta.uid)
            .unwrap_or_else(|| UNKNOWN_IDENTITY.to_string());
        let group = self
            .identity
            .group_name(meta.gid)
            .unwrap_or_else(|| UNKNOWN_IDENTITY.to_string());

        let target = if meta.is_symlink() {
            let target = link_target(&full_path);
            if target.is_none() {
                debug!(path = %full_path.display(), "Could not read symlink target");
            }
            target
        } else {
            None
        };

        Ok(Row {
            permissions: format_permissions(meta.mode),
            links: meta.nlink,
            owner,
            group,
            size: meta.size,
            modified: table::format_mtime(meta.mtime, &self.timezone),
            name,
            link_target: target,
        })
    }
}
