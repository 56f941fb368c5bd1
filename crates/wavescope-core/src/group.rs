//! # Grouping
//!
//! Merges records that share a grouping key into one-level parent/children
//! groups.
//!
//! ## Algorithm
//!
//! 1. Sort a working copy by the structural order of the `GroupBy` key, which
//!    makes same-key records adjacent and puts the strongest one first.
//! 2. Walk once, keeping a current parent. A record outside the parent's
//!    group closes the parent (children sorted by the display order) and
//!    becomes the next parent; otherwise it is attached as a child.
//! 3. Close the last parent and sort the parents by the display order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::WifiDetail;
use crate::sort::{ssid_ignore_case, strongest_first, tie_break, Comparator, SortBy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Only exact duplicates (same SSID, BSSID and frequency) merge.
    #[default]
    None,
    /// One group per network name, ignoring case.
    Ssid,
    /// One group per channel.
    Channel,
}

impl GroupBy {
    pub const ALL: [GroupBy; 3] = [GroupBy::None, GroupBy::Ssid, GroupBy::Channel];

    /// Structural order that makes same-group records adjacent.
    pub fn sort_order(self) -> Comparator {
        match self {
            GroupBy::None => identity_structural,
            GroupBy::Ssid => ssid_structural,
            GroupBy::Channel => channel_structural,
        }
    }

    /// Whether `a` and `b` belong to the same group.
    pub fn same_group(self, a: &WifiDetail, b: &WifiDetail) -> bool {
        match self {
            GroupBy::None => a == b,
            GroupBy::Ssid => ssid_ignore_case(a, b) == Ordering::Equal,
            GroupBy::Channel => a.channel == b.channel,
        }
    }
}

fn identity_structural(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    tie_break(a, b).then_with(|| strongest_first(a, b))
}

fn ssid_structural(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    ssid_ignore_case(a, b)
        .then_with(|| strongest_first(a, b))
        .then_with(|| tie_break(a, b))
}

fn channel_structural(a: &WifiDetail, b: &WifiDetail) -> Ordering {
    a.channel
        .cmp(&b.channel)
        .then_with(|| strongest_first(a, b))
        .then_with(|| tie_break(a, b))
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupBy::None => write!(f, "none"),
            GroupBy::Ssid => write!(f, "ssid"),
            GroupBy::Channel => write!(f, "channel"),
        }
    }
}

impl FromStr for GroupBy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(GroupBy::None),
            "ssid" => Ok(GroupBy::Ssid),
            "channel" => Ok(GroupBy::Channel),
            _ => Err(ConfigError::UnknownGroupBy(s.to_string())),
        }
    }
}

/// Group `records` under `group_by`, ordering children and parents by
/// `sort_by`.
pub fn group(mut records: Vec<WifiDetail>, group_by: GroupBy, sort_by: SortBy) -> Vec<WifiDetail> {
    let display = sort_by.comparator();
    records.sort_by(group_by.sort_order());

    let mut results: Vec<WifiDetail> = Vec::new();
    for record in records {
        match results.last_mut() {
            Some(parent) if group_by.same_group(parent, &record) => parent.add_child(record),
            Some(parent) => {
                parent.children_mut().sort_by(display);
                results.push(record);
            }
            None => results.push(record),
        }
    }
    if let Some(parent) = results.last_mut() {
        parent.children_mut().sort_by(display);
    }
    results.sort_by(display);

    tracing::debug!(
        group_by = %group_by,
        sort_by = %sort_by,
        groups = results.len(),
        "grouped records"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RecordBuilder;
    use crate::models::RawObservation;
    use crate::vendor::NoVendorLookup;

    fn detail(ssid: &str, bssid: &str, frequency: i32, level: i32) -> WifiDetail {
        let obs = RawObservation {
            ssid: ssid.into(),
            bssid: bssid.into(),
            frequency,
            level,
            capabilities: String::new(),
        };
        RecordBuilder::new(&NoVendorLookup, &[]).build(&obs)
    }

    fn sample() -> Vec<WifiDetail> {
        vec![
            detail("Home", "01", 2412, -70),
            detail("Cafe", "02", 2437, -50),
            detail("home", "03", 5180, -40),
            detail("Home", "04", 2412, -60),
            detail("Cafe", "05", 2412, -85),
        ]
    }

    fn shape(groups: &[WifiDetail]) -> Vec<(&str, Vec<&str>)> {
        groups
            .iter()
            .map(|g| (g.bssid(), g.children().iter().map(|c| c.bssid()).collect()))
            .collect()
    }

    #[test]
    fn empty_input_yields_no_groups() {
        for group_by in GroupBy::ALL {
            assert!(group(Vec::new(), group_by, SortBy::Strength).is_empty());
        }
    }

    #[test]
    fn group_by_ssid_strongest_is_parent() {
        let groups = group(sample(), GroupBy::Ssid, SortBy::Strength);
        assert_eq!(
            shape(&groups),
            vec![("03", vec!["04", "01"]), ("02", vec!["05"])]
        );
    }

    #[test]
    fn group_by_channel() {
        let groups = group(sample(), GroupBy::Channel, SortBy::Channel);
        assert_eq!(
            shape(&groups),
            vec![
                ("04", vec!["01", "05"]),
                ("02", vec![]),
                ("03", vec![]),
            ]
        );
        assert!(groups.iter().all(|g| g
            .children()
            .iter()
            .all(|c| c.channel() == g.channel())));
    }

    #[test]
    fn group_by_none_keeps_distinct_records_apart() {
        let groups = group(sample(), GroupBy::None, SortBy::Strength);
        assert_eq!(groups.len(), 5);
        assert!(groups.iter().all(|g| !g.has_children()));
        let order: Vec<_> = groups.iter().map(|g| g.bssid()).collect();
        assert_eq!(order, vec!["03", "02", "04", "01", "05"]);
    }

    #[test]
    fn group_by_none_collapses_exact_duplicates() {
        let mut records = sample();
        records.insert(0, detail("Cafe", "02", 2437, -52));
        let groups = group(records, GroupBy::None, SortBy::Strength);
        assert_eq!(groups.len(), 5);
        let cafe = groups.iter().find(|g| g.bssid() == "02").unwrap();
        assert_eq!(cafe.children().len(), 1);
        assert_eq!(cafe.level(), -50);
    }

    #[test]
    fn children_follow_display_order() {
        let groups = group(sample(), GroupBy::Ssid, SortBy::Channel);
        let home = groups.iter().find(|g| g.bssid() == "03").unwrap();
        let channels: Vec<_> = home.children().iter().map(|c| c.channel()).collect();
        assert_eq!(channels, vec![1, 1]);
        // equal channel: stronger first
        assert_eq!(home.children()[0].bssid(), "04");
        // parents by channel: Cafe (parent ch 6) before Home (parent ch 36)
        assert_eq!(groups[0].bssid(), "02");
    }

    #[test]
    fn groups_are_one_level_deep() {
        for group_by in GroupBy::ALL {
            let groups = group(sample(), group_by, SortBy::Ssid);
            for g in &groups {
                assert!(g.children().iter().all(|c| !c.has_children()));
            }
            let total: usize = groups.iter().map(|g| 1 + g.children().len()).sum();
            assert_eq!(total, 5);
        }
    }

    #[test]
    fn parse_and_display() {
        for group_by in GroupBy::ALL {
            assert_eq!(group_by.to_string().parse::<GroupBy>().unwrap(), group_by);
        }
        assert!(matches!(
            "vendor".parse::<GroupBy>(),
            Err(ConfigError::UnknownGroupBy(v)) if v == "vendor"
        ));
    }
}
