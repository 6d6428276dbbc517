//! Landing page content

use serde::{Deserialize, Serialize};

use super::feature::{Feature, FeatureCategory, FeatureIcon};

/// Container command shown in the run snippet
pub const DEFAULT_RUN_COMMAND: &str = "docker run -p 8080:8080 nishank02/smoldb:latest";

/// Where the project lives
pub const REPOSITORY_URL: &str = "https://github.com/themillenniumfalcon/smolDB";

/// Everything the landing page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub tagline: String,
    pub repository_url: String,
    pub features: Vec<Feature>,
    pub run_command: String,
}

impl PageContent {
    /// The smolDB landing page
    pub fn smoldb() -> Self {
        Self {
            title: "smolDB".to_string(),
            tagline: "Check the repository out on GitHub.".to_string(),
            repository_url: REPOSITORY_URL.to_string(),
            features: vec![
                Feature::new(
                    "Production Durability",
                    "Write-Ahead Logging with configurable fsync modes and group commit.",
                    FeatureIcon::Shield,
                    FeatureCategory::Reliability,
                ),
                Feature::new(
                    "Crash Recovery",
                    "Automatic recovery via checkpoints and WAL replay.",
                    FeatureIcon::History,
                    FeatureCategory::Reliability,
                ),
                Feature::new(
                    "Smart Checkpointing",
                    "Periodic snapshots with WAL truncation for optimal performance.",
                    FeatureIcon::RotateCw,
                    FeatureCategory::Performance,
                ),
                Feature::new(
                    "Efficient Storage",
                    "Atomic WAL truncation with human-readable JSON format.",
                    FeatureIcon::HardDrive,
                    FeatureCategory::Performance,
                ),
            ],
            run_command: DEFAULT_RUN_COMMAND.to_string(),
        }
    }

    /// Replace the run command shown in the snippet
    pub fn with_run_command(mut self, command: impl Into<String>) -> Self {
        self.run_command = command.into();
        self
    }

    /// Features belonging to one category, in page order
    pub fn features_in(&self, category: FeatureCategory) -> impl Iterator<Item = &Feature> {
        self.features
            .iter()
            .filter(move |feature| feature.category == category)
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self::smoldb()
    }
}
