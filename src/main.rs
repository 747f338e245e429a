use clap::Parser;
use org_contributors::cli::Cli;
use org_contributors::error::Result;
use org_contributors::github::GitHubClient;
use org_contributors::pipeline;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Diagnostics go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.run_config();

    let client = GitHubClient::new(&cli.api_url)?;
    info!(api_url = %client.api_url(), org = %config.org, "Starting contributor scan");

    let summary = pipeline::run(&client, &config).await?;
    info!(
        repositories = summary.repositories,
        contributors = summary.contributors,
        kept = summary.top.len(),
        "Done"
    );

    Ok(())
}
