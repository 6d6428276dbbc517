//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary)
//! or wl-copy on Wayland sessions where arboard cannot keep ownership.

mod system;
mod wayland;

pub use system::ArboardClipboard;
pub use wayland::WaylandClipboard;

use tracing::debug;

use crate::application::ports::Clipboard;
use crate::domain::config::ClipboardTool;

/// Create the clipboard adapter for the configured backend
pub fn create_clipboard(tool: ClipboardTool) -> Box<dyn Clipboard> {
    debug!(tool = %tool, "creating clipboard adapter");
    match tool {
        ClipboardTool::Arboard => Box::new(ArboardClipboard::new()),
        ClipboardTool::WlCopy => Box::new(WaylandClipboard::new()),
    }
}
