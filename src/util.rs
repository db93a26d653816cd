use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory. Paths without a tilde
/// prefix (and non-UTF-8 paths) are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Row label for a repository: its path with the root prefix removed and any
/// trailing `/.git` suffix stripped.
pub fn repo_label(repo: &Path, root: &Path) -> String {
    let repo = repo.to_string_lossy();
    let root = root.to_string_lossy();
    let label = repo.strip_prefix(root.as_ref()).unwrap_or(&repo);
    let label = label.strip_suffix("/.git").unwrap_or(label);
    label.to_string()
}
