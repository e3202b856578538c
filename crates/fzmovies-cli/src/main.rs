use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use fzmovies_cli::{Cli, logging, run};
use fzmovies_core::ClientConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let status = run(cli.input().as_deref(), ClientConfig::default(), &mut out, &mut err).await?;

    Ok(status.exit_code())
}
