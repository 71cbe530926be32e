//! Weft CLI - static checker for ES module import/export graphs.
//!
//! Exit codes: 0 when the graph is clean, 1 when issues were found, 2 on a
//! fatal error (unreadable config, unparseable file).

use clap::Parser;
use weft_cli::{cli, commands, error, logger};

fn main() {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

    let result = match args.command {
        cli::Command::Check(check_args) => commands::check_execute(check_args, color),
    };

    match result {
        Ok(outcome) if outcome.issue_count > 0 => std::process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("{:?}", error::into_miette(err));
            std::process::exit(2);
        }
    }
}
