use dirlist::cli::CliArgs;
use dirlist::listing::{DirectoryLister, ListError};
use dirlist::util::logging;
use dirlist::VERSION;

use clap::Parser;
use std::io::{self, BufWriter, Write};
use tracing::{debug, error};

fn main() {
    // Extra positional arguments are rejected here with a usage message (exit 2)
    let args = CliArgs::parse();
    logging::init_from_env();

    debug!("dirlist v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_list(&args);

    std::process::exit(exit_code);
}

fn handle_list(args: &CliArgs) -> i32 {
    let target = args.target();
    let lister = DirectoryLister::new();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = lister
        .list(&target, &mut out)
        .and_then(|summary| out.flush().map(|_| summary).map_err(ListError::from));

    match result {
        Ok(summary) => {
            debug!(
                listed = summary.listed,
                skipped = summary.skipped,
                "Listing complete"
            );
            0
        }
        Err(ListError::OpenDirectory { path, source }) => {
            eprintln!("Error opening directory: {}", source);
            eprintln!("Could not open: {}", path.display());
            1
        }
        Err(e @ ListError::Output(_)) => {
            error!("{}", e);
            1
        }
    }
}
