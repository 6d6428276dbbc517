//! Landing page content

mod content;
mod feature;

pub use content::{PageContent, DEFAULT_RUN_COMMAND, REPOSITORY_URL};
pub use feature::{Feature, FeatureCategory, FeatureIcon};
