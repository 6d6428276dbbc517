//! Feature card value objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidCategoryError;

/// Grouping for feature cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Reliability,
    Performance,
    Usability,
    Scalability,
}

impl FeatureCategory {
    /// Get the string identifier for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reliability => "reliability",
            Self::Performance => "performance",
            Self::Usability => "usability",
            Self::Scalability => "scalability",
        }
    }
}

impl FromStr for FeatureCategory {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reliability" => Ok(Self::Reliability),
            "performance" => Ok(Self::Performance),
            "usability" => Ok(Self::Usability),
            "scalability" => Ok(Self::Scalability),
            _ => Err(InvalidCategoryError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Icon shown in a feature card header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureIcon {
    Shield,
    History,
    RotateCw,
    HardDrive,
}

impl FeatureIcon {
    /// Terminal glyph for the icon
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Shield => "⛨",
            Self::History => "↺",
            Self::RotateCw => "⟳",
            Self::HardDrive => "▤",
        }
    }
}

/// A single feature card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: FeatureIcon,
    pub category: FeatureCategory,
}

impl Feature {
    /// Create a feature card
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: FeatureIcon,
        category: FeatureCategory,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_categories() {
        for category in [
            FeatureCategory::Reliability,
            FeatureCategory::Performance,
            FeatureCategory::Usability,
            FeatureCategory::Scalability,
        ] {
            assert_eq!(
                category.as_str().parse::<FeatureCategory>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(
            " Reliability ".parse::<FeatureCategory>().unwrap(),
            FeatureCategory::Reliability
        );
    }

    #[test]
    fn parse_invalid() {
        let err = "speed".parse::<FeatureCategory>().unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&FeatureCategory::Performance).unwrap();
        assert_eq!(json, "\"performance\"");
    }

    #[test]
    fn icon_serializes_kebab_case() {
        let json = serde_json::to_string(&FeatureIcon::RotateCw).unwrap();
        assert_eq!(json, "\"rotate-cw\"");
    }
}
