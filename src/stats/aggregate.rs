use crate::model::{LineCounts, RepoTotal};
use std::path::PathBuf;

/// Fold one repository's records into its total by summing `added` and
/// `deleted` independently. An empty sequence yields `(repo, 0, 0)` rather
/// than an absent value: a repository with no matching history and one whose
/// query failed both come out as a zero row the renderer needs no special
/// case for.
pub fn repo_total(repo: PathBuf, records: impl IntoIterator<Item = LineCounts>) -> RepoTotal {
    let mut counts = LineCounts::default();
    for record in records {
        counts.absorb(record);
    }
    RepoTotal::new(repo, counts)
}
