//! Domain layer - Core value objects and state
//!
//! Contains the copy widget state, the landing page content, theming
//! and configuration. This layer has no dependencies on external systems.

pub mod config;
pub mod copy;
pub mod error;
pub mod page;
pub mod theme;

// Re-export common types
pub use config::AppConfig;
pub use copy::{CopyIndicator, CopyState, DwellTime};
pub use error::*;
pub use page::{Feature, FeatureCategory, FeatureIcon, PageContent};
pub use theme::ThemeMode;
