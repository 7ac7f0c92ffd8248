mod api;
mod cli;
mod commands;
mod config;
mod dashboard;
mod error;
mod render;
mod status;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::cli::Cli;
use crate::error::Error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let effective = config::resolve(
        cli.api_key.as_deref(),
        cli.target.as_deref(),
        cli.homedir.as_deref(),
    )
    .await?;
    let client = ApiClient::new(&effective, cli.ignore_certs)?;
    commands::dispatch(cli.command, &client).await
}
