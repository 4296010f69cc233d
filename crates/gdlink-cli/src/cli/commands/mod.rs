//! CLI command handlers, one file per command.

mod batch;
mod classify;
mod completions;
mod config_path;
mod convert;
mod man;

pub use batch::run_batch;
pub use classify::run_classify;
pub use completions::run_completions;
pub use config_path::run_config_path;
pub use convert::{run_convert, ConvertFlags, ConvertOptions};
pub use man::run_man;
