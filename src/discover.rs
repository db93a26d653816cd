use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Depth bound for the `.git` marker: the root itself, direct children, and
/// their immediate subdirectories. Nothing deeper is searched, which caps
/// the cost of discovery on large trees.
const MARKER_DEPTH: usize = 3;

/// Find repository roots under `root`: directories whose `.git` marker (a
/// directory, or a gitfile for worktrees) sits within the depth bound.
/// Entries are visited in sorted order so the result is stable within a run.
/// Walk errors are logged and skipped; an empty result means the root holds
/// no repositories, not that discovery failed.
pub fn find_repos(root: &Path) -> Vec<PathBuf> {
    let mut repos = Vec::new();
    let mut walker = WalkDir::new(root)
        .max_depth(MARKER_DEPTH)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };
        if entry.file_name() != ".git" {
            continue;
        }
        if let Some(repo) = entry.path().parent() {
            debug!("found repository at {}", repo.display());
            repos.push(repo.to_path_buf());
        }
        if entry.file_type().is_dir() {
            walker.skip_current_dir();
        }
    }
    repos
}
