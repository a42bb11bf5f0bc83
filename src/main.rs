// Copyright 2025 NewCo

//! Seed the review-risk label set on the repository a CI run is targeting.
//!
//! Intended to run as a pipeline step: credentials and the target repository
//! come from the step environment, and each label is created independently so
//! a label that already exists never fails the step.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{Layer, filter::EnvFilter, fmt, layer::SubscriberExt};

mod catalog;
mod config;
mod error;
mod host;
mod provision;

use crate::config::Inputs;
use crate::error::Result;
use crate::host::open_host;
use crate::provision::provision;

#[derive(Parser)]
#[command(name = "risk-labels")]
#[command(about = "Ensure the review-risk label set exists on a GitHub repository")]
struct Cli {
    /// Path to a TOML catalog file overriding the built-in label set.
    ///
    /// The file holds `[[labels]]` entries with `name`, `color`, and an
    /// optional `description`.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Target repository as owner/repo, overriding GITHUB_REPOSITORY.
    #[arg(long)]
    repo: Option<String>,

    /// Print the per-label report as JSON on stdout.
    #[arg(long, short = 'j')]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    match inner_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn inner_main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let mut inputs = Inputs::from_env()?;
    if let Some(repo) = &cli.repo {
        inputs.repository = repo.parse()?;
    }
    debug!(
        aux_github = inputs.gh_ibm_token.is_some(),
        aux_zenhub = inputs.zenhub_apikey.is_some(),
        "Auxiliary credentials present"
    );
    let catalog = config::load_catalog(&cli.catalog)?;

    let host = open_host(&inputs.gh_token)?;
    info!("Initialized GitHub client for {}", inputs.repository);

    let reports = provision(host.as_ref(), &inputs.repository, &catalog).await;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports).unwrap());
    }
    Ok(())
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::Layer::new()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);
    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(stderr_layer))
        .unwrap();
}
