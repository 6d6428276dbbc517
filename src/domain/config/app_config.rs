//! Application configuration value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::copy::{DwellTime, DEFAULT_DWELL_MS};
use crate::domain::page::DEFAULT_RUN_COMMAND;
use crate::domain::theme::ThemeMode;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardTool {
    #[default]
    Arboard,
    WlCopy,
}

impl ClipboardTool {
    /// Get the string identifier for this backend
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::WlCopy => "wl-copy",
        }
    }
}

impl FromStr for ClipboardTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arboard" => Ok(Self::Arboard),
            "wl-copy" | "wlcopy" => Ok(Self::WlCopy),
            other => Err(format!(
                "Unknown clipboard tool '{}'. Valid tools: arboard, wl-copy",
                other
            )),
        }
    }
}

impl fmt::Display for ClipboardTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierTool {
    #[default]
    NotifyRust,
    NotifySend,
}

impl NotifierTool {
    /// Get the string identifier for this backend
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotifyRust => "notify-rust",
            Self::NotifySend => "notify-send",
        }
    }
}

impl FromStr for NotifierTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "notify-rust" | "desktop" => Ok(Self::NotifyRust),
            "notify-send" => Ok(Self::NotifySend),
            other => Err(format!(
                "Unknown notifier '{}'. Valid notifiers: notify-rust, notify-send",
                other
            )),
        }
    }
}

impl fmt::Display for NotifierTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub dwell_ms: Option<u64>,
    pub notify: Option<bool>,
    pub notify_failure: Option<bool>,
    pub notifier: Option<String>,
    pub theme: Option<String>,
    pub clipboard_tool: Option<String>,
    pub command: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            dwell_ms: Some(DEFAULT_DWELL_MS),
            notify: Some(true),
            notify_failure: Some(false),
            notifier: Some(NotifierTool::default().to_string()),
            theme: Some(ThemeMode::default().to_string()),
            clipboard_tool: Some(ClipboardTool::default().to_string()),
            command: Some(DEFAULT_RUN_COMMAND.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            dwell_ms: other.dwell_ms.or(self.dwell_ms),
            notify: other.notify.or(self.notify),
            notify_failure: other.notify_failure.or(self.notify_failure),
            notifier: other.notifier.or(self.notifier),
            theme: other.theme.or(self.theme),
            clipboard_tool: other.clipboard_tool.or(self.clipboard_tool),
            command: other.command.or(self.command),
        }
    }

    /// Get dwell time, or the default if not set/invalid
    pub fn dwell_or_default(&self) -> DwellTime {
        self.dwell_ms
            .and_then(|ms| DwellTime::from_millis(ms).ok())
            .unwrap_or_default()
    }

    /// Get notify setting, or true if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    /// Get failure notification setting, or false if not set
    pub fn notify_failure_or_default(&self) -> bool {
        self.notify_failure.unwrap_or(false)
    }

    /// Get notification backend, or notify-rust if not set/invalid
    pub fn notifier_or_default(&self) -> NotifierTool {
        self.notifier
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get theme as parsed ThemeMode, or default if not set/invalid
    pub fn theme_or_default(&self) -> ThemeMode {
        self.theme
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get clipboard backend, or arboard if not set/invalid
    pub fn clipboard_tool_or_default(&self) -> ClipboardTool {
        self.clipboard_tool
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the run command, or the stock docker command if not set/blank
    pub fn command_or_default(&self) -> &str {
        self.command
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_RUN_COMMAND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.dwell_ms, Some(2000));
        assert_eq!(config.notify, Some(true));
        assert_eq!(config.notify_failure, Some(false));
        assert_eq!(config.theme, Some("system".to_string()));
        assert_eq!(config.clipboard_tool, Some("arboard".to_string()));
        assert_eq!(config.notifier, Some("notify-rust".to_string()));
        assert_eq!(config.command_or_default(), DEFAULT_RUN_COMMAND);
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.dwell_ms.is_none());
        assert!(config.notify.is_none());
        assert!(config.theme.is_none());
        assert!(config.command.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            dwell_ms: Some(2000),
            theme: Some("light".to_string()),
            notify: Some(true),
            ..Default::default()
        };

        let other = AppConfig {
            dwell_ms: Some(500),
            theme: None,
            notify: Some(false),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.dwell_ms, Some(500));
        assert_eq!(merged.theme, Some("light".to_string()));
        assert_eq!(merged.notify, Some(false));
    }

    #[test]
    fn dwell_or_default_rejects_zero() {
        let config = AppConfig {
            dwell_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(config.dwell_or_default().as_millis(), 2000);
    }

    #[test]
    fn dwell_or_default_uses_configured() {
        let config = AppConfig {
            dwell_ms: Some(750),
            ..Default::default()
        };
        assert_eq!(config.dwell_or_default().as_millis(), 750);
    }

    #[test]
    fn theme_or_default_falls_back_on_invalid() {
        let config = AppConfig {
            theme: Some("neon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.theme_or_default(), ThemeMode::System);
    }

    #[test]
    fn clipboard_tool_parses() {
        let config = AppConfig {
            clipboard_tool: Some("wl-copy".to_string()),
            ..Default::default()
        };
        assert_eq!(config.clipboard_tool_or_default(), ClipboardTool::WlCopy);
        assert!("xclip".parse::<ClipboardTool>().is_err());
    }

    #[test]
    fn notifier_parses() {
        let config = AppConfig {
            notifier: Some("Notify-Send".to_string()),
            ..Default::default()
        };
        assert_eq!(config.notifier_or_default(), NotifierTool::NotifySend);
        assert_eq!(AppConfig::empty().notifier_or_default(), NotifierTool::NotifyRust);
        assert!("growl".parse::<NotifierTool>().is_err());
    }

    #[test]
    fn blank_command_uses_default() {
        let config = AppConfig {
            command: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.command_or_default(), DEFAULT_RUN_COMMAND);
    }

    #[test]
    fn boolean_defaults() {
        let config = AppConfig::empty();
        assert!(config.notify_or_default());
        assert!(!config.notify_failure_or_default());
    }
}
