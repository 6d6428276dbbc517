//! Notification infrastructure module
//!
//! Provides desktop notifications through notify-rust or `notify-send`,
//! plus a silent notifier for when toasts are disabled.

mod desktop;
mod notify_send;
mod silent;

pub use desktop::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;
pub use silent::SilentNotifier;

use crate::application::ports::Notifier;
use crate::domain::config::NotifierTool;

/// Application name shown by the notification daemon
pub const APP_NAME: &str = "smolDB";

/// How long a toast stays on screen before the daemon dismisses it
pub const TOAST_TIMEOUT_MS: u32 = 4000;

/// Create the notifier matching the `notify` and `notifier` settings
pub fn create_notifier(enabled: bool, tool: NotifierTool) -> Box<dyn Notifier> {
    if !enabled {
        return Box::new(SilentNotifier);
    }
    match tool {
        NotifierTool::NotifyRust => Box::new(NotifyRustNotifier::new()),
        NotifierTool::NotifySend => Box::new(NotifySendNotifier::new()),
    }
}
