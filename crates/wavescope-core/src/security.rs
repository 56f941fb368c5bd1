//! Security modes advertised in a scan result's capability string.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Security {
    None,
    Wps,
    Wep,
    Wpa,
    Wpa2,
    Wpa3,
}

impl Security {
    /// Parse capability tokens such as `[WPA2-PSK-CCMP][WPS][ESS]`.
    ///
    /// An open network yields `{None}`.
    pub fn parse(capabilities: &str) -> BTreeSet<Security> {
        let mut found = BTreeSet::new();
        let tokens = capabilities
            .split(|c: char| c == '[' || c == ']' || c.is_whitespace())
            .filter(|t| !t.is_empty());
        for token in tokens {
            let head = token
                .split(['-', '+'])
                .next()
                .unwrap_or_default()
                .to_ascii_uppercase();
            let sec = match head.as_str() {
                "WPS" => Security::Wps,
                "WEP" => Security::Wep,
                "WPA" => Security::Wpa,
                "WPA2" | "RSN" => Security::Wpa2,
                "WPA3" | "SAE" => Security::Wpa3,
                _ => continue,
            };
            found.insert(sec);
        }
        if found.is_empty() {
            found.insert(Security::None);
        }
        found
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Security::None => write!(f, "NONE"),
            Security::Wps => write!(f, "WPS"),
            Security::Wep => write!(f, "WEP"),
            Security::Wpa => write!(f, "WPA"),
            Security::Wpa2 => write!(f, "WPA2"),
            Security::Wpa3 => write!(f, "WPA3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_network() {
        let set = Security::parse("[ESS]");
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![Security::None]);
        assert_eq!(Security::parse("").len(), 1);
    }

    #[test]
    fn mixed_capabilities() {
        let set = Security::parse("[WPA-PSK-TKIP+CCMP][WPA2-PSK-TKIP+CCMP][WPS][ESS]");
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec![Security::Wps, Security::Wpa, Security::Wpa2]
        );
    }

    #[test]
    fn strongest_is_last() {
        let set = Security::parse("[WEP][WPA3-SAE-CCMP]");
        assert_eq!(set.last(), Some(&Security::Wpa3));
    }

    #[test]
    fn lowercase_tokens() {
        let set = Security::parse("[wpa2-psk-ccmp]");
        assert!(set.contains(&Security::Wpa2));
    }
}
