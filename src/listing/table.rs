//! Column layout for the detailed listing

use chrono::TimeZone;
use std::ffi::OsStr;
use std::fmt::Display;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

/// strftime pattern for the Modified column, e.g. `Jun 04 16:46`
pub const MODIFIED_FORMAT: &str = "%b %d %H:%M";

/// Rendered in place of a timestamp the time zone cannot represent
pub const UNREPRESENTABLE_TIME: &str = "?";

pub const SEPARATOR: &str =
    "---------- ----- -------------- ------------ -------- ------------ --------";

pub fn header() -> String {
    format!(
        "{:<10} {:>5} {:<14} {:<12} {:>8} {:<12} {}",
        "Type&Perms", "Links", "Owner", "Group", "Size", "Modified", "Name"
    )
}

/// Formats a modification time in the given time zone
pub fn format_mtime<Tz>(secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(secs, 0).earliest() {
        Some(time) => time.format(MODIFIED_FORMAT).to_string(),
        None => UNREPRESENTABLE_TIME.to_string(),
    }
}

/// One fully resolved listing line
#[derive(Debug, Clone)]
pub struct Row<'a> {
    pub permissions: String,
    pub links: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub modified: String,
    pub name: &'a OsStr,
    pub link_target: Option<PathBuf>,
}

impl Row<'_> {
    /// Writes the row and its newline. Name and link target are emitted as
    /// raw bytes without padding.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(
            out,
            "{:<10} {:>5} {:<14} {:<12} {:>8} {:<12} ",
            self.permissions, self.links, self.owner, self.group, self.size, self.modified
        )?;
        out.write_all(self.name.as_bytes())?;

        if let Some(target) = &self.link_target {
            out.write_all(b" -> ")?;
            out.write_all(target.as_os_str().as_bytes())?;
        }

        out.write_all(b"\n")
    }
}
