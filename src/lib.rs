pub mod cli;
pub mod discover;
pub mod error;
pub mod model;
pub mod stats;
pub mod util;
