use anyhow::Context;
use clap::Parser;

use vercmp::cli::{Cli, run};
use vercmp::config::Config;
use vercmp::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.verbose {
        config.log.level = "debug".to_string();
    }

    let _guard = init_logging(&config.log).context("failed to initialize logging")?;

    let output = run(&cli.command, &config)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
