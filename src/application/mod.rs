//! Application layer - Use cases and port interfaces
//!
//! Contains the copy widget use case and trait definitions
//! for external system interactions.

pub mod copy_action;
pub mod ports;

// Re-export use cases
pub use copy_action::{CopyAction, CopyConfig, CopyError, COPIED_MESSAGE, COPY_FAILED_MESSAGE};
