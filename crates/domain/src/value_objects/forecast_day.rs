//! Forecast day selector

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which day a weather query is for
///
/// Providers may render each day with entirely different markup, so this
/// is a tagged choice rather than a flag threaded through parsing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastDay {
    /// Current (archived) observations
    #[default]
    Today,
    /// Next-day forecast
    Tomorrow,
}

impl ForecastDay {
    /// Map the host's `--tomorrow` option onto a day
    #[must_use]
    pub const fn from_tomorrow_flag(tomorrow: bool) -> Self {
        if tomorrow { Self::Tomorrow } else { Self::Today }
    }

    /// Lowercase label, used as a metrics and log field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
        }
    }
}

impl fmt::Display for ForecastDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
