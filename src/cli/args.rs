//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::domain::config::{ClipboardTool, NotifierTool};
use crate::domain::copy::DwellTime;
use crate::domain::page::FeatureCategory;
use crate::domain::theme::ThemeMode;

/// smolDB - a small, durable key-value database
#[derive(Parser, Debug)]
#[command(name = "smoldb-site")]
#[command(version)]
#[command(about = "The smolDB landing page in your terminal, with a one-key copy of the run command")]
#[command(long_about = None)]
pub struct Cli {
    /// Color theme for the page
    #[arg(long, value_name = "THEME", global = true)]
    pub theme: Option<ThemeArg>,

    /// How long the copy confirmation stays visible (e.g., 2000, 1500ms, 2s)
    #[arg(long, value_name = "TIME", global = true)]
    pub dwell: Option<String>,

    /// Do not show desktop notifications
    #[arg(long, global = true)]
    pub no_notify: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand (defaults to `show`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the landing page
    Show {
        /// Print the page content as JSON
        #[arg(long)]
        json: bool,

        /// Only list features in this category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<CategoryArg>,
    },
    /// Copy the run command to the clipboard
    Copy,
    /// Render the page and copy the run command on every Enter
    Interactive,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Theme argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    System,
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::System => ThemeMode::System,
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

/// Feature category argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Reliability,
    Performance,
    Usability,
    Scalability,
}

impl From<CategoryArg> for FeatureCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Reliability => FeatureCategory::Reliability,
            CategoryArg::Performance => FeatureCategory::Performance,
            CategoryArg::Usability => FeatureCategory::Usability,
            CategoryArg::Scalability => FeatureCategory::Scalability,
        }
    }
}

/// Resolved options for rendering and copying
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub theme: ThemeMode,
    pub dwell: DwellTime,
    pub notify: bool,
    pub notify_failure: bool,
    pub notifier: NotifierTool,
    pub clipboard_tool: ClipboardTool,
    pub command: String,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "dwell_ms",
    "notify",
    "notify_failure",
    "notifier",
    "theme",
    "clipboard_tool",
    "command",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
