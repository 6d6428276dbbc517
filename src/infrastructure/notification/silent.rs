//! Notifier that drops every message

use async_trait::async_trait;
use tracing::trace;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Used when notifications are turned off
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

#[async_trait]
impl Notifier for SilentNotifier {
    async fn notify(
        &self,
        _title: &str,
        message: &str,
        _icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        trace!(message, "notification suppressed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn silent_notifier_always_succeeds() {
        assert!(SilentNotifier.success("Text copied").await.is_ok());
        assert!(SilentNotifier.failure("nope").await.is_ok());
    }
}
