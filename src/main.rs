//! `dlx`: solves exact cover problems read from text or Sudoku puzzles.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use dancing_cover::cli::{self, Cli, Outcome};
use env_logger::{Builder, Env};

fn main() -> ExitCode {
    let cli = Cli::parse();
    Builder::from_env(Env::default().default_filter_or(cli.log_level().as_str())).init();

    let mut out = io::stdout().lock();
    let result = cli::run(&cli.command, io::stdin().lock(), &mut out);
    if let Err(err) = out.flush() {
        log::warn!("failed to flush standard output: {err}");
    }
    match result {
        Ok(Outcome::Solved) => ExitCode::SUCCESS,
        Ok(Outcome::NoSolution) => {
            eprintln!("No solution");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}
