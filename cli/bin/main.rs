use std::path::PathBuf;

use clap::Parser;

use ladderst_cli::cli::{self, OutputFormat};
use ladderst_cli::logger;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "ladderst",
    about = "Translates instruction list ladder logic into Structured Text"
)]
struct Args {
    /// Turn on verbose logging. Repeat to increase verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Sets the logging to write to a file.
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Selects the subcommand.
    #[command(subcommand)]
    action: Action,
}

#[derive(clap::Subcommand, Debug)]
enum Action {
    /// Translates the instruction list files (or directories of files) and
    /// writes the result to the output file. The files are translated as
    /// one document in the order given.
    Convert {
        /// Files or directories to translate.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Path of the output file.
        #[arg(short, long, default_value = "output.st")]
        output: PathBuf,

        /// Format of the output.
        #[arg(long, value_enum, default_value_t = OutputFormat::St)]
        format: OutputFormat,

        /// Do not report rungs that could not be translated.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Translates the instruction list files and writes the result to
    /// standard output.
    Echo {
        /// Files or directories to translate.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Format of the output.
        #[arg(long, value_enum, default_value_t = OutputFormat::St)]
        format: OutputFormat,

        /// Do not report rungs that could not be translated.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Prints the version number of the translator.
    Version,
}

pub fn main() -> Result<(), String> {
    let args = Args::parse();

    logger::configure(args.verbose, args.log_file)?;

    match args.action {
        Action::Convert {
            files,
            output,
            format,
            quiet,
        } => cli::convert(files, &output, format, quiet),
        Action::Echo {
            files,
            format,
            quiet,
        } => cli::echo(files, format, quiet),
        Action::Version => {
            println!("ladderst version {VERSION}");
            Ok(())
        }
    }
}
