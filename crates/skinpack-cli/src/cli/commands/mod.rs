//! CLI command handlers. Each command is in its own file.

mod completions;
mod fetch;
mod lang;
mod pack;
mod shell;

pub use completions::{run_completions, run_man};
pub use fetch::run_fetch;
pub use lang::run_lang;
pub use pack::run_pack;
pub use shell::run_shell;
