//! CLI command handlers, one per file.

mod check;
mod open;
mod paths;
mod resolve;

pub use check::run_check;
pub use open::run_open;
pub use paths::run_paths;
pub use resolve::run_resolve;
