pub mod aggregate;
pub mod exec;
pub mod output;
pub mod parse;
pub mod query;

pub use aggregate::repo_total;
pub use exec::exec;
pub use output::render;
pub use parse::parse_numstat;
pub use query::history;
