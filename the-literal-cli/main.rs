//! Command line front end for the-literal.

mod cli;
mod commands;
mod config;
mod logging;

use clap::Parser;
use eyre::Result;

use crate::{
  cli::Cli,
  config::Config,
};

fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::setup_logging(cli.verbosity, cli.log_file.as_deref())?;

  let config = Config::load(cli.config_file.as_deref())?;
  log::debug!("running {:?} with {:?}", cli.command, config);

  let stdout = std::io::stdout();
  commands::run(cli.command, &config, &mut stdout.lock())
}
