//! # Bands and channels
//!
//! | Band    | Freq range     | Channel formula                         |
//! |---------|----------------|-----------------------------------------|
//! | 2.4 GHz | 2400–2499 MHz  | `(f - 2412) / 5 + 1`, 2484 MHz → 14     |
//! | 5 GHz   | 4900–5899 MHz  | `(f - 5000) / 5`                        |
//!
//! Frequencies outside both ranges are treated as 2.4 GHz.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Channels either side of the centre channel that a 20 MHz transmission
/// overlaps.
pub const CHANNEL_OFFSET: i32 = 2;

/// Channel spacing in MHz.
pub const CHANNEL_WIDTH_MHZ: i32 = 5;

const GHZ2_FIRST_FREQ: i32 = 2412;
const GHZ2_JAPAN_FREQ: i32 = 2484;
const GHZ2_JAPAN_CHANNEL: i32 = 14;
const GHZ5_BASE_FREQ: i32 = 5000;

// ─── Band ───────────────────────────────────────────────────────────────────

/// Radio band an access point transmits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WifiBand {
    Ghz2,
    Ghz5,
}

impl WifiBand {
    /// Inclusive frequency range in MHz.
    pub fn range(self) -> (i32, i32) {
        match self {
            WifiBand::Ghz2 => (2400, 2499),
            WifiBand::Ghz5 => (4900, 5899),
        }
    }

    pub fn contains(self, frequency: i32) -> bool {
        let (lo, hi) = self.range();
        (lo..=hi).contains(&frequency)
    }

    /// Band for a frequency in MHz.
    pub fn from_frequency(frequency: i32) -> Self {
        if WifiBand::Ghz5.contains(frequency) {
            WifiBand::Ghz5
        } else {
            WifiBand::Ghz2
        }
    }

    /// 802.11 channel number for a frequency in MHz.
    ///
    /// Total over `i32`: out-of-range frequencies use the 2.4 GHz formula
    /// with a saturating offset.
    pub fn channel_for(frequency: i32) -> i32 {
        match Self::from_frequency(frequency) {
            WifiBand::Ghz2 if frequency == GHZ2_JAPAN_FREQ => GHZ2_JAPAN_CHANNEL,
            WifiBand::Ghz2 => frequency.saturating_sub(GHZ2_FIRST_FREQ) / CHANNEL_WIDTH_MHZ + 1,
            WifiBand::Ghz5 => (frequency - GHZ5_BASE_FREQ) / CHANNEL_WIDTH_MHZ,
        }
    }
}

impl fmt::Display for WifiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiBand::Ghz2 => write!(f, "2.4 GHz"),
            WifiBand::Ghz5 => write!(f, "5 GHz"),
        }
    }
}

// ─── Band filter ────────────────────────────────────────────────────────────

/// Which bands a view keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandFilter {
    #[default]
    All,
    Ghz2,
    Ghz5,
}

impl BandFilter {
    pub fn accepts(self, band: WifiBand) -> bool {
        match self {
            BandFilter::All => true,
            BandFilter::Ghz2 => band == WifiBand::Ghz2,
            BandFilter::Ghz5 => band == WifiBand::Ghz5,
        }
    }
}

impl fmt::Display for BandFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandFilter::All => write!(f, "all"),
            BandFilter::Ghz2 => write!(f, "ghz2"),
            BandFilter::Ghz5 => write!(f, "ghz5"),
        }
    }
}

impl FromStr for BandFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(BandFilter::All),
            "ghz2" | "2.4" | "2.4ghz" => Ok(BandFilter::Ghz2),
            "ghz5" | "5" | "5ghz" => Ok(BandFilter::Ghz5),
            _ => Err(ConfigError::UnknownBand(s.to_string())),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
