//! Vitae CLI - harvest birth and death dates from encyclopedia articles.

use clap::Parser;
use vitae_cli::commands;
use vitae_cli::{logging, Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> vitae_cli::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let formatter = Formatter::new(!cli.no_color && config.output.color);

    match cli.command {
        Command::Harvest(args) => commands::execute_harvest(args, &config, &formatter).await?,
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter)?,
        Command::Locales => commands::execute_locales(&formatter),
    }

    Ok(())
}
