//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ClipboardTool, NotifierTool};
use crate::domain::copy::DwellTime;
use crate::domain::error::ConfigError;
use crate::domain::theme::ThemeMode;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_config_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    let value = config_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
    presenter.output(&value);

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Current value of a key as displayed by `get`/`list`
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "dwell_ms" => config.dwell_ms.map(|ms| ms.to_string()),
        "notify" => config.notify.map(|b| b.to_string()),
        "notify_failure" => config.notify_failure.map(|b| b.to_string()),
        "notifier" => config.notifier.clone(),
        "theme" => config.theme.clone(),
        "clipboard_tool" => config.clipboard_tool.clone(),
        "command" => config.command.clone(),
        _ => None,
    }
}

/// Validate `value` for `key` and store it in normalized form
fn apply_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "dwell_ms" => {
            let dwell = value
                .parse::<DwellTime>()
                .map_err(|e| invalid(e.to_string()))?;
            config.dwell_ms = Some(dwell.as_millis());
        }
        "notify" => {
            config.notify = Some(
                parse_bool(value)
                    .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?,
            );
        }
        "notify_failure" => {
            config.notify_failure = Some(
                parse_bool(value)
                    .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?,
            );
        }
        "notifier" => {
            let tool = value.parse::<NotifierTool>().map_err(invalid)?;
            config.notifier = Some(tool.to_string());
        }
        "theme" => {
            let theme = value
                .parse::<ThemeMode>()
                .map_err(|e| invalid(e.to_string()))?;
            config.theme = Some(theme.to_string());
        }
        "clipboard_tool" => {
            let tool = value.parse::<ClipboardTool>().map_err(invalid)?;
            config.clipboard_tool = Some(tool.to_string());
        }
        "command" => {
            if value.trim().is_empty() {
                return Err(invalid("Command must not be empty".to_string()));
            }
            config.command = Some(value.to_string());
        }
        _ => {
            return Err(invalid(format!(
                "Unknown key. Valid keys: {}",
                VALID_CONFIG_KEYS.join(", ")
            )))
        }
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::TempDir;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("NO"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn dwell_is_normalized_to_millis() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "dwell_ms", "2s").unwrap();
        assert_eq!(config.dwell_ms, Some(2000));
    }

    #[test]
    fn zero_dwell_is_rejected() {
        let mut config = AppConfig::empty();
        let err = apply_config_value(&mut config, "dwell_ms", "0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(config.dwell_ms.is_none());
    }

    #[test]
    fn theme_is_validated() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "theme", "Dark").unwrap();
        assert_eq!(config.theme, Some("dark".to_string()));
        assert!(apply_config_value(&mut config, "theme", "sepia").is_err());
    }

    #[test]
    fn clipboard_tool_is_validated() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "clipboard_tool", "wlcopy").unwrap();
        assert_eq!(config.clipboard_tool, Some("wl-copy".to_string()));
        assert!(apply_config_value(&mut config, "clipboard_tool", "xsel").is_err());
    }

    #[test]
    fn notifier_is_validated() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "notifier", "NOTIFY-SEND").unwrap();
        assert_eq!(config.notifier, Some("notify-send".to_string()));
        assert!(apply_config_value(&mut config, "notifier", "growl").is_err());
    }

    #[test]
    fn blank_command_is_rejected() {
        let mut config = AppConfig::empty();
        assert!(apply_config_value(&mut config, "command", "  ").is_err());
        apply_config_value(&mut config, "command", "docker run smoldb").unwrap();
        assert_eq!(config_value(&config, "command").as_deref(), Some("docker run smoldb"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = ensure_known_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Unknown key"));
    }

    #[tokio::test]
    async fn set_then_get_round_trips_through_store() {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "notify", "false").await.unwrap();
        handle_set(&store, &presenter, "dwell_ms", "750").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.notify, Some(false));
        assert_eq!(config.dwell_ms, Some(750));
    }
}
