//! fzmovies command line front-end
//!
//! ```text
//! fzmovies "inception"                                     # search
//! fzmovies "https://www.fzmovies.host/movie-Inception--hmp4.htm"  # direct links
//! ```
//!
//! The whole flow lives in [`run`] so it can be driven in-process with any
//! writers; `main` only wires it to stdout/stderr and the exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use fzmovies_core::{ClientConfig, FzmoviesScraper, Mode};

pub mod commands;
pub mod logging;

/// Usage line shown when no input is given
pub const USAGE: &str = "Usage: fzmovies <MOVIE NAME | MOVIE PAGE URL>";

/// Search fzmovies or resolve a movie page into direct download links
#[derive(Parser, Debug)]
#[command(name = "fzmovies", version, about, long_about = None)]
pub struct Cli {
    /// Movie name to search for, or a movie page URL to resolve
    ///
    /// Unquoted words are joined with spaces: `fzmovies the dark knight`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub input: Vec<String>,
}

impl Cli {
    /// The input words as one string, `None` when nothing was given
    pub fn input(&self) -> Option<String> {
        if self.input.is_empty() {
            None
        } else {
            Some(self.input.join(" "))
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The pipeline ran to an outcome, including "nothing found"
    Completed,
    /// No input was given
    Usage,
}

impl Status {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Status::Completed => ExitCode::SUCCESS,
            Status::Usage => ExitCode::from(1),
        }
    }
}

/// Run one search or download resolution
///
/// Results and outcome messages go to `out`; the usage message goes to `err`.
///
/// # Errors
/// Only I/O errors from the writers
pub async fn run<W: Write, E: Write>(
    input: Option<&str>,
    config: ClientConfig,
    out: &mut W,
    err: &mut E,
) -> io::Result<Status> {
    let Some(input) = input.map(str::trim).filter(|i| !i.is_empty()) else {
        writeln!(err, "No movie name or link provided")?;
        writeln!(err, "{}", USAGE)?;
        return Ok(Status::Usage);
    };

    let scraper = match FzmoviesScraper::with_config(config) {
        Ok(scraper) => scraper,
        Err(e) => {
            commands::report(&e, out)?;
            return Ok(Status::Completed);
        }
    };

    match scraper.classify(input) {
        Ok(Mode::Search(query)) => commands::search(&scraper, &query, out).await?,
        Ok(Mode::Download(url)) => commands::download(&scraper, &url, out).await?,
        Err(e) => commands::report(&e, out)?,
    }

    Ok(Status::Completed)
}
