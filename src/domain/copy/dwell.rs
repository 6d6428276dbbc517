//! Dwell time value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DwellParseError;

/// Default time the confirmation indicator stays visible (2 seconds)
pub const DEFAULT_DWELL_MS: u64 = 2000;

/// How long one activation keeps the copy widget confirmed.
/// Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DwellTime {
    milliseconds: u64,
}

impl DwellTime {
    /// Create a dwell time from milliseconds, rejecting zero
    pub fn from_millis(ms: u64) -> Result<Self, DwellParseError> {
        if ms == 0 {
            return Err(DwellParseError {
                input: ms.to_string(),
            });
        }
        Ok(Self { milliseconds: ms })
    }

    /// Get dwell time in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl Default for DwellTime {
    fn default() -> Self {
        Self {
            milliseconds: DEFAULT_DWELL_MS,
        }
    }
}

impl FromStr for DwellTime {
    type Err = DwellParseError;

    /// Parse "2000", "1500ms" or "2s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let err = || DwellParseError {
            input: s.to_string(),
        };

        let (digits, scale) = if let Some(ms) = input.strip_suffix("ms") {
            (ms, 1)
        } else if let Some(secs) = input.strip_suffix('s') {
            (secs, 1000)
        } else {
            (input.as_str(), 1)
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }

        let value = digits.parse::<u64>().map_err(|_| err())?;
        let ms = value.checked_mul(scale).ok_or_else(err)?;

        Self::from_millis(ms).map_err(|_| err())
    }
}

impl fmt::Display for DwellTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.milliseconds)
    }
}
