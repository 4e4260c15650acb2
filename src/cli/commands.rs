use clap::Parser;
use std::path::PathBuf;

/// List a directory with permissions, owners, sizes and modification times
#[derive(Parser, Debug)]
#[command(
    name = "dirlist",
    about = "List a directory with permissions, owners, sizes and modification times",
    version,
    long_about = "dirlist prints one row per directory entry with its type and permission \
                  bits, link count, owner, group, size in bytes and modification time. \
                  Symbolic links are described themselves and show their target.\n\n\
                  Examples:\n  \
                  dirlist\n  \
                  dirlist /var/log\n\n\
                  Logging is configured with DIRLIST_LOG_LEVEL, DIRLIST_LOG_JSON and RUST_LOG."
)]
pub struct CliArgs {
    #[arg(
        value_name = "DIRECTORY",
        help = "Directory to list (defaults to the current directory)"
    )]
    pub directory: Option<PathBuf>,
}

impl CliArgs {
    /// The directory to list, `.` when none was given
    pub fn target(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
