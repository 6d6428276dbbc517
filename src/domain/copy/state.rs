//! Copy widget state machine

use std::fmt;

/// Visual state of the copy widget, derived from the pending counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CopyIndicator {
    #[default]
    Idle,
    Confirmed,
}

impl CopyIndicator {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Confirmed => "confirmed",
        }
    }

    /// Glyph rendered for this state: a copy mark while idle, a check once copied
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Idle => "⧉",
            Self::Confirmed => "✓",
        }
    }

    /// Whether the confirmation is currently shown
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for CopyIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counter of open confirmation windows.
///
/// Every successful copy opens one window (`confirm`) and every elapsed
/// dwell closes one (`release`). The widget shows the confirmation while
/// at least one window is open, so overlapping activations merge into a
/// single confirmed period.
///
/// State machine:
///   IDLE -> CONFIRMED (confirm)
///   CONFIRMED -> CONFIRMED (confirm, or release with windows left)
///   CONFIRMED -> IDLE (release of the last window)
#[derive(Debug, Default)]
pub struct CopyState {
    pending_count: u32,
    disposed: bool,
}

impl CopyState {
    /// Create a new state with no open windows
    pub fn new() -> Self {
        Self {
            pending_count: 0,
            disposed: false,
        }
    }

    /// Number of open confirmation windows
    pub fn pending_count(&self) -> u32 {
        self.pending_count
    }

    /// Current derived indicator
    pub fn indicator(&self) -> CopyIndicator {
        if self.pending_count > 0 {
            CopyIndicator::Confirmed
        } else {
            CopyIndicator::Idle
        }
    }

    /// Whether the owning widget has been torn down
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Open a confirmation window. Returns the indicator after the change.
    /// No-op once disposed.
    pub fn confirm(&mut self) -> CopyIndicator {
        if !self.disposed {
            self.pending_count = self.pending_count.saturating_add(1);
        }
        self.indicator()
    }

    /// Close a confirmation window. Returns the indicator after the change.
    /// Never goes below zero and is a no-op once disposed.
    pub fn release(&mut self) -> CopyIndicator {
        if !self.disposed {
            self.pending_count = self.pending_count.saturating_sub(1);
        }
        self.indicator()
    }

    /// Freeze the state; later confirms and releases have no effect
    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}
