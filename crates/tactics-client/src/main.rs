//! analyze-pgn
//!
//! Uploads a PGN file to the tactics service and prints the pin/skewer
//! breakdown per game.
//!
//! Usage: analyze-pgn <file.pgn> [--base-url http://localhost:8000]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tactics_client::report::Report;
use tactics_client::{AnalyzerSession, CandidateFile, ClientConfig, IntakeSource, RequestState};

struct Args {
    path: PathBuf,
    base_url: Option<String>,
}

/// Parse `<path> [--base-url URL]` from CLI args
fn parse_args() -> Option<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut path = None;
    let mut base_url = None;

    let mut i = 0;
    while i < args.len() {
        if args[i] == "--base-url" {
            base_url = Some(args.get(i + 1)?.clone());
            i += 2;
            continue;
        }
        if path.is_none() {
            path = Some(PathBuf::from(&args[i]));
        }
        i += 1;
    }

    Some(Args {
        path: path?,
        base_url,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs on stderr, report on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args() else {
        eprintln!("usage: analyze-pgn <file.pgn> [--base-url URL]");
        return Ok(ExitCode::from(2));
    };

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    info!(base_url = %config.base_url, timeout = ?config.request_timeout, "Client config loaded");

    let mut session = AnalyzerSession::new(&config)?;

    let bytes = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let candidate = CandidateFile::new(file_name(&args.path), bytes);

    if let Err(rejection) = session.select_file(IntakeSource::Picker, Some(candidate)) {
        eprintln!("{rejection}");
        return Ok(ExitCode::FAILURE);
    }

    match session.submit().await {
        RequestState::Succeeded(result) => {
            print!("{}", Report(result));
            Ok(ExitCode::SUCCESS)
        }
        RequestState::Failed(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
        other => anyhow::bail!("Analysis did not finish: {other:?}"),
    }
}
