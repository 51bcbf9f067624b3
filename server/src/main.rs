use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};

mod cli;
mod config;
mod server;
mod tools;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    let config = config::Config::from_env()
        .context("Invalid LANDFALL_* environment")?
        .with_overrides(args.track_files, args.cache);
    log::debug!("{:?}", config);
    let source = config.storm_source();

    match args.cmd {
        Command::Http { address } => server::run(address, server::AppState::new(source)).await,
        Command::Hits(hits_args) => tools::hits::exec(source.as_ref(), hits_args)?,
        Command::Storms { json } => tools::list::exec(source.as_ref(), json)?,
    }

    Ok(())
}
