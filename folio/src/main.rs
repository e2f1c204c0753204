//! `folio` — static portfolio page generator

use clap::Parser;

use folio::cli::args::Cli;
use folio::cli::commands;
use folio::error::ExitCode;
use folio::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format.into(), cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        // Validation issues are already reported by the command itself.
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
