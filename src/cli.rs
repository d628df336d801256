//! Command-line front end for the `dlx` binary.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{ArgAction, Parser, Subcommand};
use log::{info, LevelFilter};

use crate::error::{Error, Result};
use crate::sudoku::Sudoku;
use crate::text::TextProblem;

/// Log level when no `-v` is given and `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Parser, Debug)]
#[command(name = "dlx")]
#[command(author, version, about = "Exact cover solver using Knuth's dancing links")]
#[command(long_about = None)]
/// Command-line arguments
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to solve
    #[command(subcommand)]
    pub command: Command,
}

/// Problem kinds the binary understands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a problem in the generic text format: item names on the first line, one option per
    /// line after it, up to the first blank line
    Cover {
        /// Read the problem from FILE instead of standard input
        #[arg(short = 'f', long = "input-file", value_name = "FILE")]
        input: Option<PathBuf>,

        /// Expected number of options, to allocate up front
        #[arg(long, value_name = "N", default_value_t = 0)]
        option_count: usize,
    },

    /// Solve a 9x9 Sudoku written as 81 characters, row by row, with anything but 1-9 as a blank
    Sudoku {
        /// The puzzle; read as the first word of standard input if omitted
        puzzle: Option<String>,

        /// Print the solution as one line of 81 digits
        #[arg(short, long)]
        compact: bool,
    },
}

impl Cli {
    /// Log level selected by the `-v` flags
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// How a run ended, when it did not fail
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The solution was written out
    Solved,
    /// The problem has no exact cover
    NoSolution,
}

/// Runs `command`, reading standard input from `stdin` if the command needs it and writing the
/// solution to `out`.
///
/// # Errors
///
/// Input that cannot be read or parsed, and failures writing to `out`.
pub fn run<R: BufRead, W: Write>(command: &Command, stdin: R, out: &mut W) -> Result<Outcome> {
    match command {
        Command::Cover {
            input,
            option_count,
        } => {
            let problem = match input {
                Some(path) => read_problem_file(path, *option_count)?,
                None => TextProblem::from_reader_with_hint(stdin, *option_count)?,
            };
            let start = Instant::now();
            let solution = problem.solve();
            info!("search took {:?}", start.elapsed());

            let Some(lines) = solution else {
                return Ok(Outcome::NoSolution);
            };
            info!("found a cover with {} options", lines.len());
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        Command::Sudoku { puzzle, compact } => {
            let puzzle = match puzzle {
                Some(puzzle) => puzzle.trim().to_owned(),
                None => first_word(stdin)?,
            };
            let sudoku = Sudoku::parse(&puzzle)?;
            let start = Instant::now();
            let solution = sudoku.solve();
            info!("search took {:?}", start.elapsed());

            let Some(grid) = solution else {
                return Ok(Outcome::NoSolution);
            };
            if *compact {
                writeln!(out, "{}", grid.to_line())?;
            } else {
                write!(out, "{grid}")?;
            }
        }
    }
    Ok(Outcome::Solved)
}

fn read_problem_file(path: &Path, option_count: usize) -> Result<TextProblem> {
    let with_path = |source: std::io::Error| Error::Io {
        path: Some(path.to_owned()),
        source,
    };
    let file = File::open(path).map_err(with_path)?;
    TextProblem::from_reader_with_hint(BufReader::new(file), option_count).map_err(|err| match err {
        Error::Io { path: None, source } => with_path(source),
        other => other,
    })
}

fn first_word<R: BufRead>(mut stdin: R) -> Result<String> {
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    text.split_whitespace()
        .next()
        .map(str::to_owned)
        .ok_or(Error::MissingPuzzle)
}
