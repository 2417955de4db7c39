//! Relative humidity as shown on the dashboard

use serde::{Deserialize, Serialize};

/// Relative humidity in percent, never above 100
///
/// Serialized as a bare number, so the JSON shape stays `"humidity": 72`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Humidity(u8);

impl Humidity {
    /// Build from a provider reading. Readings above 100% are capped.
    #[must_use]
    pub const fn from_reading(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    /// Percentage in `0..=100`
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl From<u8> for Humidity {
    fn from(percent: u8) -> Self {
        Self::from_reading(percent)
    }
}

impl From<Humidity> for u8 {
    fn from(humidity: Humidity) -> Self {
        humidity.percent()
    }
}
