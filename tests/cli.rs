use clap::Parser;
use org_contributors::cli::{Cli, RunConfig};
use std::path::PathBuf;

#[test]
fn test_defaults_match_run_config_default() {
    let cli = Cli::try_parse_from(["org-contributors"]).expect("Failed to parse");

    assert_eq!(cli.api_url, "https://api.github.com");
    assert_eq!(cli.run_config(), RunConfig::default());
}

#[test]
fn test_flags() {
    let cli = Cli::try_parse_from([
        "org-contributors",
        "--org",
        "tokio-rs",
        "--output",
        "out/top.json",
        "--top",
        "5",
        "--repo",
        "tokio",
        "--repo",
        "axum",
        "--pretty",
    ])
    .expect("Failed to parse");

    let config = cli.run_config();
    assert_eq!(config.org, "tokio-rs");
    assert_eq!(config.output, PathBuf::from("out/top.json"));
    assert_eq!(config.top, 5);
    assert_eq!(config.repos, ["tokio", "axum"]);
    assert!(config.pretty);
}

#[test]
fn test_rejects_non_numeric_top() {
    let result = Cli::try_parse_from(["org-contributors", "--top", "many"]);
    assert!(result.is_err());
}
