//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! Ctrl-C handling and the runners for each mode.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{run_copy, run_interactive, run_show, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, SiteOptions};
pub use presenter::Presenter;
