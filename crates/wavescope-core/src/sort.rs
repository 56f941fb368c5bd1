//! Display orders.
//!
//! Each `SortBy` variant maps to a total order over `WifiDetail` through
//! [`SORT_TABLE`]. Every order ends in the same tie-break chain (SSID ignoring
//! case, SSID, BSSID, frequency) so that no two distinct radios compare equal.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::WifiDetail;

pub type Comparator = fn(&WifiDetail, &WifiDetail) -> Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Strongest signal first.
    #[default]
    Strength = 0,
    Ssid = 1,
    Channel = 2,
}

/// Comparator per variant, indexed by discriminant.
pub const SORT_TABLE: [(SortBy, Comparator); 3] = [
    (SortBy::Strength, by_strength),
    (SortBy::Ssid, by_ssid),
    (SortBy::Channel, by_channel),
];

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Strength, SortBy::Ssid, SortBy::Channel];

    pub fn comparator(self) -> Comparator {
        SORT_TABLE[self as usize].1
    }

    /// Stable sort of `records` in this order.
    pub fn sort(self, records: &mut [WifiDetail]) {
        records.sort_by(self.comparator());
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Strength => write!(f, "strength"),
            SortBy::Ssid => write!(f, "ssid"),
            SortBy::Channel => write!(f, "channel"),
        }
    }
}

impl FromStr for SortBy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" => Ok(SortBy::Strength),
            "ssid" => Ok(SortBy::Ssid),
            "channel" => Ok(SortBy::Channel),
            _ => Err(ConfigError::UnknownSortBy(s.to_string())),
        }
    }
}

// ─── Comparators ────────────────────────────────────────────────────────────

pub fn by_strength(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    strongest_first(a, b).then_with(|| tie_break(a, b))
}

pub fn by_ssid(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    ssid_ignore_case(a, b)
        .then_with(|| strongest_first(a, b))
        .then_with(|| tie_break(a, b))
}

pub fn by_channel(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    a.channel
        .cmp(&b.channel)
        .then_with(|| strongest_first(a, b))
        .then_with(|| tie_break(a, b))
}

pub(crate) fn strongest_first(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    b.level.cmp(&a.level)
}

pub(crate) fn ssid_ignore_case(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    let lhs = a.ssid.chars().flat_map(char::to_lowercase);
    let rhs = b.ssid.chars().flat_map(char::to_lowercase);
    lhs.cmp(rhs)
}

/// Identity order; only identical radios compare equal.
pub(crate) fn tie_break(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    ssid_ignore_case(a, b)
        .then_with(|| a.ssid.cmp(&b.ssid))
        .then_with(|| a.bssid.cmp(&b.bssid))
        .then_with(|| a.frequency.cmp(&b.frequency))
}
