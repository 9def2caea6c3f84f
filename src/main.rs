use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skitscript_lsp::{Backend, Config};
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

/// Language server for SkitScript, speaking LSP over stdin/stdout.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parser executable, overriding the config file.
    #[arg(long)]
    parser: Option<String>,

    /// Language id of documents to serve, overriding the config file.
    #[arg(long)]
    language_id: Option<String>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = match Config::load(cli.config.as_deref(), &working_dir) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    config.apply_overrides(cli.parser, cli.language_id);
    if let Err(err) = config.validate() {
        tracing::error!("{}", err);
        return ExitCode::FAILURE;
    }

    tracing::info!(
        "Serving `{}` documents with parser `{}`",
        config.language_id,
        config.parser.command
    );

    let (service, socket) = LspService::new(|client| Backend::new(client, &config));
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;

    ExitCode::SUCCESS
}
