mod dump;
mod extract;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use dump::{dump, Dump};
use extract::{extract, Extract};
use tracing::{debug, error, metadata::LevelFilter};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Subcommand)]
enum Command {
    /// Convert jonbin collision files into JSON documents listing their hurtboxes and hitboxes.
    ///
    /// Each document is written next to its input with the extension replaced by .json.
    /// Directories are searched recursively for .jonbin files.
    Extract(Extract),

    /// Print decoded data from a jonbin file.
    Dump {
        /// File to read from.
        filename: PathBuf,

        /// Which part to dump into stdout.
        #[clap(subcommand)]
        what: Dump,
    },
}

#[derive(Parser)]
#[clap(version)]
struct Args {
    /// Tool to run.
    #[clap(subcommand)]
    command: Command,
}

fn fallible_main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Extract(options) => extract(&options)?,
        Command::Dump { filename, what } => dump(&filename, what)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let subscriber = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        );
    tracing::subscriber::set_global_default(subscriber)
        .expect("cannot set default tracing subscriber");

    debug!("jonbkit version {}", env!("CARGO_PKG_VERSION"));

    match fallible_main() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
