use crate::error::{GtallyError, Result};
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Budget for one `git log` invocation so a single wedged repository cannot
/// stall the whole report.
const QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Run the scoped history query for one repository and return the raw
/// numstat text. Never fails: spawn errors, non-zero exits, and timeouts are
/// logged and degrade to whatever stdout was produced (empty on spawn
/// failure), so the repository contributes a zero total instead of aborting
/// the report.
pub async fn history(repo: &Path, author: &str, since: &str) -> String {
    match run_git_log(repo, author, since).await {
        Ok(stdout) => stdout,
        Err(err) => {
            warn!("git log in {} did not work: {err}", repo.display());
            String::new()
        }
    }
}

async fn run_git_log(repo: &Path, author: &str, since: &str) -> Result<String> {
    let output = Command::new("git")
        .arg("log")
        .arg("--all")
        .arg(format!("--since={since}"))
        .arg(format!("--author={author}"))
        .arg("--numstat")
        .arg("--pretty=")
        .current_dir(repo)
        .kill_on_drop(true)
        .output();

    let output = timeout(QUERY_TIMEOUT, output)
        .await
        .map_err(|_| GtallyError::Timeout(QUERY_TIMEOUT))??;

    if output.status.success() {
        debug!(
            "git log in {} returned {} bytes",
            repo.display(),
            output.stdout.len()
        );
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            "git log in {} exited with {}: {}",
            repo.display(),
            output.status,
            stderr.trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
