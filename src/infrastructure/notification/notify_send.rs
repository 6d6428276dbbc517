//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

use super::{APP_NAME, TOAST_TIMEOUT_MS};

/// Notifier that shells out to libnotify's `notify-send`
#[derive(Debug)]
pub struct NotifySendNotifier {
    program: String,
    app_name: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self::with_program("notify-send")
    }

    /// Use a different notify-send compatible executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            app_name: APP_NAME.to_string(),
        }
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let expire = TOAST_TIMEOUT_MS.to_string();
        let status = Command::new(&self.program)
            .args([
                "--app-name",
                &self.app_name,
                "--icon",
                icon.icon_name(),
                "--expire-time",
                &expire,
                title,
                message,
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "{} exited with status: {}",
                self.program, status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_maps_to_not_found() {
        let notifier = NotifySendNotifier::with_program("smoldb-site-no-such-notify-send");
        let err = notifier.success("Text copied").await.unwrap_err();
        assert!(matches!(err, NotificationError::NotifySendNotFound));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_send_failure() {
        let notifier = NotifySendNotifier::with_program("false");
        let err = notifier.success("Text copied").await.unwrap_err();
        assert!(matches!(err, NotificationError::SendFailed(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn zero_exit_is_success() {
        let notifier = NotifySendNotifier::with_program("true");
        assert!(notifier.success("Text copied").await.is_ok());
    }
}
