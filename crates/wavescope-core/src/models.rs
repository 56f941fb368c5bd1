//! Data models for scan aggregation.
//!
//! The input types (`RawObservation`, `ConnectionState`, `ConfiguredNetwork`,
//! `ScanSnapshot`) are supplied by a scan source once per call. `WifiDetail`
//! is the canonical, display-ready record built from them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::band::{WifiBand, CHANNEL_OFFSET};
use crate::security::Security;
use crate::strength::Strength;

// ── Scan inputs ─────────────────────────────────────────────────────

/// One access point as reported by a single scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    #[serde(default)]
    pub ssid: String,
    pub bssid: String,
    /// Centre frequency in MHz.
    pub frequency: i32,
    /// Signal level in dBm.
    pub level: i32,
    /// Protocol and security flags, e.g. `[WPA2-PSK-CCMP][ESS]`.
    #[serde(default)]
    pub capabilities: String,
}

/// Snapshot of the device's active radio link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionState {
    /// May carry the platform's literal quotes (`"\"HomeNet\""`).
    pub ssid: Option<String>,
    pub bssid: Option<String>,
    /// Opaque; attached to the connected record verbatim.
    pub ip_address: Option<String>,
    pub link_speed_mbps: Option<u32>,
}

impl ConnectionState {
    /// A link is active when the radio reports the access point it is
    /// associated with.
    pub fn is_active(&self) -> bool {
        self.bssid.as_deref().is_some_and(|b| !b.trim().is_empty())
    }
}

/// A network saved in the device's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredNetwork {
    /// May be stored wrapped in literal quotes.
    pub ssid: String,
}

/// Everything one aggregation call reads: the scan, the connection and the
/// saved networks. Missing pieces default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSnapshot {
    pub observations: Vec<RawObservation>,
    pub connection: Option<ConnectionState>,
    pub configured_networks: Vec<ConfiguredNetwork>,
}

impl ScanSnapshot {
    pub fn has_data(&self) -> bool {
        !self.observations.is_empty()
    }
}

// ── Canonical record ────────────────────────────────────────────────

/// Display-ready record for one access point, optionally heading a group.
///
/// Equality is identity equality: `ssid`, `bssid` and `frequency`. Vendor,
/// connection and configuration flags do not take part, so a connection
/// tagged record compares equal to the plain record for the same radio.
#[derive(Debug, Clone, Serialize)]
pub struct WifiDetail {
    pub(crate) ssid: String,
    pub(crate) bssid: String,
    pub(crate) frequency: i32,
    pub(crate) channel: i32,
    pub(crate) level: i32,
    pub(crate) strength: Strength,
    pub(crate) band: WifiBand,
    pub(crate) capabilities: String,
    pub(crate) vendor_name: String,
    pub(crate) configured: bool,
    pub(crate) connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) link_speed_mbps: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<WifiDetail>,
}

impl WifiDetail {
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn bssid(&self) -> &str {
        &self.bssid
    }

    pub fn frequency(&self) -> i32 {
        self.frequency
    }

    pub fn channel(&self) -> i32 {
        self.channel
    }

    /// Raw signal level in dBm.
    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn band(&self) -> WifiBand {
        self.band
    }

    pub fn capabilities(&self) -> &str {
        &self.capabilities
    }

    /// Empty when the vendor is unknown.
    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn link_speed_mbps(&self) -> Option<u32> {
        self.link_speed_mbps
    }

    /// Records merged under this one. Always empty below the first level.
    pub fn children(&self) -> &[WifiDetail] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_hidden(&self) -> bool {
        self.ssid.is_empty()
    }

    /// `SSID (BSSID)`, with hidden networks shown as `***`.
    pub fn title(&self) -> String {
        let ssid = if self.is_hidden() { "***" } else { &self.ssid };
        format!("{} ({})", ssid, self.bssid)
    }

    pub fn security(&self) -> BTreeSet<Security> {
        Security::parse(&self.capabilities)
    }

    pub fn primary_security(&self) -> Security {
        self.security().last().copied().unwrap_or(Security::None)
    }

    /// First and last channel overlapped by a 20 MHz transmission.
    pub fn channel_span(&self) -> (i32, i32) {
        (self.channel - CHANNEL_OFFSET, self.channel + CHANNEL_OFFSET)
    }

    /// Free-space path-loss distance estimate in metres.
    pub fn distance_m(&self) -> f64 {
        let exp = (27.55 - 20.0 * f64::from(self.frequency).log10() + f64::from(self.level).abs())
            / 20.0;
        10f64.powf(exp)
    }

    pub(crate) fn add_child(&mut self, child: WifiDetail) {
        debug_assert!(child.children.is_empty(), "groups are one level deep");
        self.children.push(child);
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<WifiDetail> {
        &mut self.children
    }

    /// Parent followed by its children, children left flat.
    pub fn flatten(mut self) -> Vec<WifiDetail> {
        let children = std::mem::take(&mut self.children);
        let mut out = Vec::with_capacity(children.len() + 1);
        out.push(self);
        out.extend(children);
        out
    }
}

impl PartialEq for WifiDetail {
    fn eq(&self, other: &Self) -> bool {
        self.ssid == other.ssid && self.bssid == other.bssid && self.frequency == other.frequency
    }
}

impl Eq for WifiDetail {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RecordBuilder;
    use crate::vendor::NoVendorLookup;

    fn obs(ssid: &str, bssid: &str, frequency: i32, level: i32) -> RawObservation {
        RawObservation {
            ssid: ssid.into(),
            bssid: bssid.into(),
            frequency,
            level,
            capabilities: String::new(),
        }
    }

    #[test]
    fn connection_activity() {
        assert!(!ConnectionState::default().is_active());
        let blank = ConnectionState {
            bssid: Some("  ".into()),
            ..Default::default()
        };
        assert!(!blank.is_active());
        let live = ConnectionState {
            bssid: Some("aa:bb:cc:dd:ee:ff".into()),
            ..Default::default()
        };
        assert!(live.is_active());
    }

    #[test]
    fn snapshot_defaults_when_fields_missing() {
        let snap: ScanSnapshot = serde_json::from_str("{}").unwrap();
        assert!(!snap.has_data());
        assert!(snap.connection.is_none());
        assert!(snap.configured_networks.is_empty());
    }

    #[test]
    fn title_and_hidden() {
        let builder = RecordBuilder::new(&NoVendorLookup, &[]);
        let named = builder.build(&obs("Cafe", "00:11:22:33:44:55", 2412, -50));
        assert_eq!(named.title(), "Cafe (00:11:22:33:44:55)");
        let hidden = builder.build(&obs("", "00:11:22:33:44:56", 2412, -50));
        assert!(hidden.is_hidden());
        assert_eq!(hidden.title(), "*** (00:11:22:33:44:56)");
    }

    #[test]
    fn channel_span_uses_offset() {
        let builder = RecordBuilder::new(&NoVendorLookup, &[]);
        let d = builder.build(&obs("Cafe", "00:11:22:33:44:55", 2437, -50));
        assert_eq!(d.channel(), 6);
        assert_eq!(d.channel_span(), (4, 8));
    }

    #[test]
    fn distance_grows_as_signal_drops() {
        let builder = RecordBuilder::new(&NoVendorLookup, &[]);
        let near = builder.build(&obs("a", "01", 2412, -40));
        let far = builder.build(&obs("a", "01", 2412, -80));
        assert!(near.distance_m() < far.distance_m());
        // -40 dBm at 2412 MHz is roughly a metre away
        assert!((near.distance_m() - 0.99).abs() < 0.05, "{}", near.distance_m());
    }

    #[test]
    fn primary_security_is_strongest_mode() {
        let builder = RecordBuilder::new(&NoVendorLookup, &[]);
        let mut raw = obs("Cafe", "01", 2412, -50);
        raw.capabilities = "[WPA-PSK-TKIP][WPA2-PSK-CCMP][WPS][ESS]".into();
        let secured = builder.build(&raw);
        assert_eq!(secured.primary_security(), Security::Wpa2);
        assert!(secured.security().contains(&Security::Wps));

        let open = builder.build(&obs("Cafe", "02", 2412, -50));
        assert_eq!(open.primary_security(), Security::None);
    }

    #[test]
    fn flatten_puts_parent_first() {
        let builder = RecordBuilder::new(&NoVendorLookup, &[]);
        let mut parent = builder.build(&obs("a", "01", 2412, -40));
        parent.add_child(builder.build(&obs("a", "02", 2412, -60)));
        parent.add_child(builder.build(&obs("a", "03", 2412, -70)));
        let flat = parent.flatten();
        let bssids: Vec<_> = flat.iter().map(|d| d.bssid()).collect();
        assert_eq!(bssids, vec!["01", "02", "03"]);
        assert!(flat.iter().all(|d| !d.has_children()));
    }
}
