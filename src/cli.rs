use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Root searched for repositories when no argument is given.
pub const DEFAULT_ROOT: &str = "~/code";
/// Time-window lower bound passed to `git log --since`. The window starts at
/// the beginning of the current day.
pub const DEFAULT_SINCE: &str = "midnight";

#[derive(Parser)]
#[command(name = "gtally")]
#[command(about = "Per-author line contribution summary across git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Root directory searched for repositories", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    #[arg(help = "Author matched against commit author metadata (defaults to git config user.name)")]
    pub author: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub async fn execute(self) -> Result<()> {
        let author = match self.author {
            Some(author) => author,
            None => default_author(),
        };
        debug!("reporting contributions by {author:?} under {}", self.root.display());
        crate::stats::exec(self.root, author, DEFAULT_SINCE).await
    }
}

/// `git config user.name`, falling back to `$USER`.
fn default_author() -> String {
    Command::new("git")
        .args(["config", "user.name"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| {
            let name = String::from_utf8_lossy(&out.stdout).trim().to_string();
            (!name.is_empty()).then_some(name)
        })
        .unwrap_or_else(|| std::env::var("USER").unwrap_or_default())
}
