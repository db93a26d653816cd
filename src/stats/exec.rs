use crate::discover;
use crate::model::{Report, RepoTotal};
use crate::stats::{parse_numstat, query, render, repo_total};
use crate::util::expand_tilde;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, warn};

pub async fn exec(root: PathBuf, author: String, since: &str) -> Result<()> {
    let root = expand_tilde(&root);
    let repos = discover::find_repos(&root);
    debug!("found {} repositories under {}", repos.len(), root.display());

    let totals = collect_totals(repos, &author, since).await;
    let report = Report::from_totals(totals);
    print!("{}", render(&report, &root));
    Ok(())
}

/// Fan out one task per repository and join them in spawn order: rows come
/// back in discovery order, and the report is only built once every query
/// has resolved. A panicked or cancelled task degrades to a zero row for
/// that repository.
async fn collect_totals(repos: Vec<PathBuf>, author: &str, since: &str) -> Vec<RepoTotal> {
    let handles: Vec<(PathBuf, _)> = repos
        .into_iter()
        .map(|repo| {
            let author = author.to_string();
            let since = since.to_string();
            let task_repo = repo.clone();
            let handle = tokio::spawn(async move {
                let raw = query::history(&task_repo, &author, &since).await;
                repo_total(task_repo, parse_numstat(&raw))
            });
            (repo, handle)
        })
        .collect();

    let mut totals = Vec::with_capacity(handles.len());
    for (repo, handle) in handles {
        match handle.await {
            Ok(total) => totals.push(total),
            Err(err) => {
                warn!("stats task for {} failed: {err}", repo.display());
                totals.push(RepoTotal::zero(repo));
            }
        }
    }
    totals
}
