//! Signal strength tiers.
//!
//! Maps a raw RSSI reading onto five ordered, contiguous tiers. Readings
//! outside the `[-100, -55]` dBm window clamp to the nearest end, so every
//! `i32` has a tier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Level at or below which a reading is in the lowest tier.
pub const MIN_RSSI: i32 = -100;
/// Level at or above which a reading is in the highest tier.
pub const MAX_RSSI: i32 = -55;

/// Discretised signal quality. Ordering follows signal quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Zero,
    One,
    Two,
    Three,
    Four,
}

impl Strength {
    /// All tiers, weakest first.
    pub const ALL: [Strength; 5] = [
        Strength::Zero,
        Strength::One,
        Strength::Two,
        Strength::Three,
        Strength::Four,
    ];

    /// Classify a signal level in dBm.
    pub fn from_level(level: i32) -> Self {
        if level <= MIN_RSSI {
            return Strength::Zero;
        }
        if level >= MAX_RSSI {
            return Strength::Four;
        }
        let steps = (Self::ALL.len() - 1) as i32;
        let idx = (level - MIN_RSSI) * steps / (MAX_RSSI - MIN_RSSI);
        Self::ALL[idx as usize]
    }

    /// Whether this tier is low enough to be hidden by the weak-signal filter.
    ///
    /// The two lowest tiers (below roughly -77 dBm) count as weak.
    pub fn weak(self) -> bool {
        self <= Strength::One
    }

    /// Number of bars (0–4) for display.
    pub fn bars(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Zero => write!(f, "zero"),
            Strength::One => write!(f, "one"),
            Strength::Two => write!(f, "two"),
            Strength::Three => write!(f, "three"),
            Strength::Four => write!(f, "four"),
        }
    }
}
