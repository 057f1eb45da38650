// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::ClientConfig;
use crate::core::ServiceClient;
use crate::RelatedJobPositionsClient;

#[derive(Parser)]
#[command(name = "related-job-positions")]
#[command(about = "Find job positions related to a job title with SharpAPI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// YAML config file (defaults to $SHARPAPI_CONFIG, then ./sharpapi.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Queue a related job positions job and print its status URL
    Submit(JobPositionArgs),
    /// Wait for a queued job and print the related positions
    Fetch { status_url: String },
    /// Submit and wait for the result
    Run(JobPositionArgs),
    /// Check that the API is reachable
    Ping,
    /// Show subscription and word usage
    Quota,
}

#[derive(Args)]
pub struct JobPositionArgs {
    /// Job title to find related positions for
    pub job_position: String,

    /// Language of the returned positions (e.g. English, es)
    #[arg(long)]
    pub language: Option<String>,

    /// Maximum number of related positions to return
    #[arg(long)]
    pub max_quantity: Option<u32>,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => ClientConfig::load_from(Some(path))?,
        None => ClientConfig::load()?,
    };
    info!("Using SharpAPI at {}", config.api_base_url);

    let service = Arc::new(ServiceClient::new(&config).context("Failed to create HTTP client")?);
    let client = RelatedJobPositionsClient::new(Arc::clone(&service));

    match cli.command {
        Command::Submit(args) => {
            let status_url = submit(&client, &args).await?;
            println!("{}", status_url);
        }
        Command::Fetch { status_url } => {
            let result = client
                .fetch_related_job_positions(&status_url)
                .await
                .context("Failed to fetch related job positions")?;
            print_json(&result)?;
        }
        Command::Run(args) => {
            let status_url = submit(&client, &args).await?;
            info!("Job queued, polling {}", status_url);

            let result = client
                .fetch_related_job_positions(&status_url)
                .await
                .context("Failed to fetch related job positions")?;
            print_json(&result)?;
        }
        Command::Ping => {
            let ping = service.ping().await.context("Ping failed")?;
            print_json(&ping)?;
        }
        Command::Quota => {
            let quota = service.quota().await.context("Failed to fetch quota")?;
            print_json(&quota)?;
        }
    }

    Ok(())
}

async fn submit(
    client: &RelatedJobPositionsClient<ServiceClient>,
    args: &JobPositionArgs,
) -> Result<String> {
    client
        .related_job_positions(
            &args.job_position,
            args.language.as_deref(),
            args.max_quantity,
        )
        .await
        .with_context(|| format!("Failed to submit job for '{}'", args.job_position))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{}", json);
    Ok(())
}
