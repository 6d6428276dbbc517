//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Title used for every notification the site raises
pub const NOTIFICATION_TITLE: &str = "smolDB";

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Notification icon types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Success,
    Error,
}

impl NotificationIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Success => "dialog-ok",
            Self::Error => "dialog-error",
        }
    }
}

/// Port for transient, non-blocking status messages
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `message` - The notification body
    /// * `icon` - The icon to display
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError>;

    /// Show a success toast
    async fn success(&self, message: &str) -> Result<(), NotificationError> {
        self.notify(NOTIFICATION_TITLE, message, NotificationIcon::Success)
            .await
    }

    /// Show a failure toast
    async fn failure(&self, message: &str) -> Result<(), NotificationError> {
        self.notify(NOTIFICATION_TITLE, message, NotificationIcon::Error)
            .await
    }
}

#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message, icon).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<(String, String, NotificationIcon)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(
            &self,
            title: &str,
            message: &str,
            icon: NotificationIcon,
        ) -> Result<(), NotificationError> {
            self.seen
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string(), icon));
            Ok(())
        }
    }

    #[tokio::test]
    async fn success_uses_success_icon() {
        let notifier = RecordingNotifier::default();
        notifier.success("Text copied").await.unwrap();

        let seen = notifier.seen.lock().unwrap();
        assert_eq!(
            seen[0],
            (
                "smolDB".to_string(),
                "Text copied".to_string(),
                NotificationIcon::Success
            )
        );
    }

    #[tokio::test]
    async fn boxed_notifier_forwards_failure() {
        let notifier: Box<dyn Notifier> = Box::new(RecordingNotifier::default());
        assert!(notifier.failure("Copy failed").await.is_ok());
    }

    #[test]
    fn icon_names() {
        assert_eq!(NotificationIcon::Success.icon_name(), "dialog-ok");
        assert_eq!(NotificationIcon::Error.icon_name(), "dialog-error");
    }
}
