//! Apply a playlist change-set to a catalog and write the merged catalog.
//!
//! Usage:
//!   songlist <input_file> <change_file> <output_file>
//!
//! Exit codes: 0 success, 1 usage or missing input file, 2 unreadable
//! catalog, 3 unreadable or inapplicable change-set, 4 output failure.
//! Set `SONGLIST_LOG=info` (or `debug`) for a trace of what was applied.

use clap::Parser;
use clap::error::ErrorKind;
use songlist::error::{EXIT_USAGE, Error};
use songlist::{logging, process};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "songlist", version)]
#[command(about = "Merge a playlist change-set into a music catalog")]
struct Cli {
    /// Base catalog document (users, playlists, songs).
    #[arg(value_name = "input_file")]
    input: PathBuf,
    /// Change-set document (removeplaylists, addplaylists, updateplaylists).
    #[arg(value_name = "change_file")]
    changes: PathBuf,
    /// Destination for the merged catalog; created or overwritten.
    #[arg(value_name = "output_file")]
    output: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            std::process::exit(code);
        }
    };

    logging::init();

    if let Err(err) = run(&cli) {
        let code = err.exit_code();
        eprintln!("error: {:#}", anyhow::Error::from(err));
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    // The output path is never checked; it is created or truncated on write.
    check_exists(&cli.input, "Input file")?;
    check_exists(&cli.changes, "Change file")?;
    process(&cli.input, &cli.changes, &cli.output)?;
    Ok(())
}

fn check_exists(path: &Path, label: &'static str) -> Result<(), Error> {
    if path.exists() {
        return Ok(());
    }
    Err(Error::MissingFile {
        label,
        path: path.to_path_buf(),
    })
}
