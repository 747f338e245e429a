use crate::error::Result;
use crate::types::Contributor;
use colored::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Serialize the ranked contributors and overwrite `path` with them.
///
/// The document is built in memory before the file is touched, so a
/// serialization failure leaves any previous file as it was.
pub fn write_contributors(path: &Path, contributors: &[Contributor], pretty: bool) -> Result<()> {
    let body = if pretty {
        serde_json::to_vec_pretty(contributors)?
    } else {
        serde_json::to_vec(contributors)?
    };
    fs::write(path, body)?;

    info!(path = %path.display(), count = contributors.len(), "Wrote contributors");
    Ok(())
}

pub fn repositories_line(count: usize) -> String {
    format!("Found {} repositories", count)
}

pub fn contributors_line(count: usize) -> String {
    format!("Found {} contributors", count)
}

/// One `login contributions` line per ranked entry.
pub fn ranked_lines(contributors: &[Contributor]) -> Vec<String> {
    contributors
        .iter()
        .map(|c| format!("{} {}", c.login, c.contributions))
        .collect()
}

pub fn saved_line(limit: usize) -> String {
    format!("Top {} contributors saved", limit)
}

/// Ranked lines, a rule, and the closing banner.
pub fn write_ranked<W: Write>(
    out: &mut W,
    contributors: &[Contributor],
    limit: usize,
) -> Result<()> {
    for line in ranked_lines(contributors) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", "-".repeat(40).dimmed())?;
    writeln!(out, "{}", saved_line(limit).bold().green())?;
    Ok(())
}
