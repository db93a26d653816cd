use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GtallyError>;

#[derive(Error, Debug)]
pub enum GtallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("git log timed out after {0:?}")]
    Timeout(Duration),
}
