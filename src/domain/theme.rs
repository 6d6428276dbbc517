//! Theme mode value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ThemeParseError;

/// Color scheme for the terminal shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Get the string identifier for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolve `System` into a concrete mode.
    ///
    /// `colorfgbg` is the value of the `COLORFGBG` variable ("fg;bg"); a
    /// background of 7 or 15 means a light terminal. Anything else is dark.
    pub fn resolve(self, colorfgbg: Option<&str>) -> Self {
        match self {
            Self::System => {
                let background = colorfgbg
                    .and_then(|v| v.rsplit(';').next())
                    .and_then(|bg| bg.trim().parse::<u8>().ok());
                match background {
                    Some(7) | Some(15) => Self::Light,
                    _ => Self::Dark,
                }
            }
            other => other,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeParseError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
