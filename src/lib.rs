//! dirlist - detailed directory listings
//!
//! This library turns raw filesystem metadata into the familiar long listing
//! table: a type-and-permissions column, link count, owner, group, size,
//! modification time and name, with ` -> target` appended for symlinks.
//!
//! # Example Usage
//!
//! ```no_run
//! use dirlist::DirectoryLister;
//! use std::io;
//! use std::path::Path;
//!
//! let lister = DirectoryLister::new();
//! let summary = lister.list(Path::new("/var/log"), &mut io::stdout().lock())?;
//! eprintln!("{} entries", summary.listed);
//! # Ok::<(), dirlist::ListError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`fs`]: mode bits, lstat records and owner/group resolution
//! - [`listing`]: table layout and the directory lister
//! - [`cli`]: command-line arguments
//! - [`util`]: logging setup

pub mod cli;
pub mod fs;
pub mod listing;
pub mod util;

pub use fs::{format_permissions, FileKind, IdentityResolver, SystemIdentity};
pub use listing::{DirectoryLister, ListError, ListingSummary};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
