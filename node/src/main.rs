// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Serves one of the demo applications against a rollup HTTP server.

mod apps;
mod config;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info, subscriber::set_global_default};
use tracing_subscriber::filter::EnvFilter;

use crate::apps::Example;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Logging level (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Run a demo application
    Run(RunArgs),
}

#[derive(Clone, Debug, clap::Args)]
struct RunArgs {
    /// Application to serve
    #[arg(value_enum)]
    example: Example,
    /// Base URL of the rollup HTTP server
    #[arg(long, env = "ROLLUP_HTTP_SERVER_URL")]
    rollup_url: Option<String>,
    /// YAML file with the rollup URL, address book and protocol flags
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber_builder =
        tracing_subscriber::fmt::Subscriber::builder().with_env_filter(env_filter);

    let subscriber = subscriber_builder.with_writer(std::io::stderr).finish();
    set_global_default(subscriber)?;
    Ok(())
}

async fn run(
    RunArgs {
        example,
        rollup_url,
        config,
    }: RunArgs,
) -> anyhow::Result<()> {
    let config = config::resolve(config.as_deref(), rollup_url)?;
    info!(?example, rollup_url = %config.rollup_url, "Starting application");

    let app = example.application();
    if let Err(err) = dapp_runtime::run(&config, app, shutdown::signalled()).await {
        error!("Application exited with error: {err}");
        return Err(err.into());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Run(args) => run(args).await,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from([
            "dapp-node",
            "run",
            "honeypot",
            "--rollup-url",
            "http://127.0.0.1:5004",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command;
        assert_eq!(args.example, Example::Honeypot);
        assert_eq!(args.rollup_url.as_deref(), Some("http://127.0.0.1:5004"));
        assert_eq!(cli.log_level, "info");

        let cli = Cli::try_parse_from(["dapp-node", "run", "wallet"]).unwrap();
        let Commands::Run(args) = cli.command;
        assert_eq!(args.example, Example::Wallet);

        assert!(Cli::try_parse_from(["dapp-node", "run", "exchange"]).is_err());
    }
}
