use crate::github::DEFAULT_API_URL;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ORG: &str = "javalin";
pub const DEFAULT_OUTPUT: &str = "contributors.json";
pub const DEFAULT_TOP: usize = 15;

#[derive(Parser, Debug)]
#[command(name = "org-contributors")]
#[command(about = "Ranks the top contributors across a GitHub organization's repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub organization whose repositories are scanned
    #[arg(long, env = "CONTRIBUTORS_ORG", default_value = DEFAULT_ORG)]
    pub org: String,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// File the ranked contributors are written to (overwritten)
    #[arg(long, env = "CONTRIBUTORS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of contributors to keep
    #[arg(long, env = "CONTRIBUTORS_TOP", default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Scan these repositories of the organization instead of listing it
    #[arg(long = "repo", value_name = "NAME")]
    pub repos: Vec<String>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub org: String,
    pub output: PathBuf,
    pub top: usize,
    pub repos: Vec<String>,
    pub pretty: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            org: DEFAULT_ORG.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            top: DEFAULT_TOP,
            repos: Vec::new(),
            pretty: false,
        }
    }
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            org: self.org.clone(),
            output: self.output.clone(),
            top: self.top,
            repos: self.repos.clone(),
            pretty: self.pretty,
        }
    }
}
