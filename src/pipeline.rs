use crate::cli::RunConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::report;
use crate::tally::{non_fork, ContributionTally};
use crate::types::{Contributor, Repository};
use serde_json::{Map, Value};
use std::io::{self, Write};
use tracing::{debug, info};

/// What a completed run found and kept.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub repositories: usize,
    pub contributors: usize,
    pub top: Vec<Contributor>,
}

/// Repositories to scan: named ones when given, otherwise the org listing.
async fn resolve_repositories(
    client: &GitHubClient,
    config: &RunConfig,
) -> Result<Vec<Repository>> {
    if config.repos.is_empty() {
        info!(org = %config.org, "Listing organization repositories");
        return client.list_org_repos(&config.org).await;
    }

    config
        .repos
        .iter()
        .map(|name| -> Result<Repository> {
            let mut extra = Map::new();
            extra.insert("name".to_string(), Value::String(name.clone()));
            Ok(Repository {
                fork: false,
                contributors_url: client.repo_contributors_url(&config.org, name)?,
                extra,
            })
        })
        .collect()
}

/// Sum contributions over every non-fork repository, one request at a time.
pub async fn aggregate(client: &GitHubClient, repos: &[Repository]) -> Result<ContributionTally> {
    let mut tally = ContributionTally::new();

    for repo in non_fork(repos) {
        let contributors = client.fetch_contributors(&repo.contributors_url).await?;
        debug!(
            repo = repo.name().unwrap_or(&repo.contributors_url),
            count = contributors.len(),
            "Fetched contributors"
        );
        tally.extend(contributors);
    }

    Ok(tally)
}

/// List, aggregate, rank, write, and report to stdout. Any failure ends the
/// run before the output file is written.
pub async fn run(client: &GitHubClient, config: &RunConfig) -> Result<RunSummary> {
    run_with_output(client, config, &mut io::stdout()).await
}

/// Like [`run`], with the report lines going to `out`: repository count,
/// contributor count, one line per ranked contributor, a rule, the banner.
pub async fn run_with_output<W: Write>(
    client: &GitHubClient,
    config: &RunConfig,
    out: &mut W,
) -> Result<RunSummary> {
    let repos = resolve_repositories(client, config).await?;
    writeln!(out, "{}", report::repositories_line(repos.len()))?;

    let tally = aggregate(client, &repos).await?;
    let contributors = tally.len();
    writeln!(out, "{}", report::contributors_line(contributors))?;

    let top = tally.into_ranked(config.top);
    report::write_contributors(&config.output, &top, config.pretty)?;
    report::write_ranked(out, &top, config.top)?;

    Ok(RunSummary {
        repositories: repos.len(),
        contributors,
        top,
    })
}
