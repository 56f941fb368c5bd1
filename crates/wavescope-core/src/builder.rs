//! Record builder: one raw observation in, one canonical `WifiDetail` out.

use crate::band::WifiBand;
use crate::models::{ConfiguredNetwork, ConnectionState, RawObservation, WifiDetail};
use crate::strength::Strength;
use crate::vendor::VendorLookup;

const QUOTE: char = '"';

/// Strip one leading and one trailing `"` when both are present.
pub fn unquote(ssid: &str) -> &str {
    ssid.strip_prefix(QUOTE)
        .and_then(|s| s.strip_suffix(QUOTE))
        .unwrap_or(ssid)
}

/// Whether `ssid` names one of the saved networks, ignoring case and the
/// quoting used for stored SSIDs.
pub fn is_configured_network(ssid: &str, configured: &[ConfiguredNetwork]) -> bool {
    let ssid = ssid.to_lowercase();
    configured
        .iter()
        .any(|c| unquote(&c.ssid).to_lowercase() == ssid)
}

/// Builds canonical records against one vendor lookup and one list of saved
/// networks.
pub struct RecordBuilder<'a, V: VendorLookup + ?Sized> {
    vendor: &'a V,
    configured: &'a [ConfiguredNetwork],
}

impl<'a, V: VendorLookup + ?Sized> RecordBuilder<'a, V> {
    pub fn new(vendor: &'a V, configured: &'a [ConfiguredNetwork]) -> Self {
        Self { vendor, configured }
    }

    /// A plain (not connected) record.
    pub fn build(&self, obs: &RawObservation) -> WifiDetail {
        WifiDetail {
            ssid: obs.ssid.clone(),
            bssid: obs.bssid.clone(),
            frequency: obs.frequency,
            channel: WifiBand::channel_for(obs.frequency),
            level: obs.level,
            strength: Strength::from_level(obs.level),
            band: WifiBand::from_frequency(obs.frequency),
            capabilities: obs.capabilities.clone(),
            vendor_name: self.vendor.find_vendor_name(&obs.bssid),
            configured: is_configured_network(&obs.ssid, self.configured),
            connected: false,
            ip_address: None,
            link_speed_mbps: None,
            children: Vec::new(),
        }
    }

    /// A record tagged as the active connection, carrying the link's IP
    /// address and speed as reported.
    pub fn build_connected(&self, obs: &RawObservation, conn: &ConnectionState) -> WifiDetail {
        WifiDetail {
            connected: true,
            ip_address: conn.ip_address.clone(),
            link_speed_mbps: conn.link_speed_mbps,
            ..self.build(obs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::{NoVendorLookup, OuiVendorTable};

    fn obs(ssid: &str, bssid: &str, frequency: i32, level: i32) -> RawObservation {
        RawObservation {
            ssid: ssid.into(),
            bssid: bssid.into(),
            frequency,
            level,
            capabilities: "[WPA2-PSK-CCMP][ESS]".into(),
        }
    }

    fn saved(ssids: &[&str]) -> Vec<ConfiguredNetwork> {
        ssids
            .iter()
            .map(|s| ConfiguredNetwork { ssid: s.to_string() })
            .collect()
    }

    #[test]
    fn unquote_strips_one_pair_only() {
        assert_eq!(unquote("\"Home\""), "Home");
        assert_eq!(unquote("\"\"Home\"\""), "\"Home\"");
        assert_eq!(unquote("Home"), "Home");
        // unbalanced quotes are left alone
        assert_eq!(unquote("\"Home"), "\"Home");
        assert_eq!(unquote("Home\""), "Home\"");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"\""), "");
    }

    #[test]
    fn configured_match_ignores_case_and_quotes() {
        let configured = saved(&["\"HomeNet\"", "Office"]);
        assert!(is_configured_network("homenet", &configured));
        assert!(is_configured_network("OFFICE", &configured));
        assert!(!is_configured_network("Guest", &configured));
        assert!(!is_configured_network("\"HomeNet\"", &configured));
        assert!(!is_configured_network("HomeNet", &[]));
    }

    #[test]
    fn builds_derived_fields() {
        let mut vendors = OuiVendorTable::new();
        vendors.insert("00:11:22", "Acme");
        let configured = saved(&["\"Cafe\""]);
        let builder = RecordBuilder::new(&vendors, &configured);

        let d = builder.build(&obs("Cafe", "00:11:22:33:44:55", 5180, -60));
        assert_eq!(d.channel(), 36);
        assert_eq!(d.band(), WifiBand::Ghz5);
        assert_eq!(d.strength(), Strength::Three);
        assert_eq!(d.vendor_name(), "Acme");
        assert!(d.is_configured());
        assert!(!d.is_connected());
        assert!(d.ip_address().is_none());
        assert!(!d.has_children());
    }

    #[test]
    fn unknown_vendor_is_empty_name() {
        let builder = RecordBuilder::new(&NoVendorLookup, &[]);
        let d = builder.build(&obs("Cafe", "00:11:22:33:44:55", 2412, -60));
        assert_eq!(d.vendor_name(), "");
    }

    #[test]
    fn connected_record_carries_link_details() {
        let builder = RecordBuilder::new(&NoVendorLookup, &[]);
        let conn = ConnectionState {
            ssid: Some("\"Cafe\"".into()),
            bssid: Some("00:11:22:33:44:55".into()),
            ip_address: Some("not-even-an-ip".into()),
            link_speed_mbps: Some(144),
        };
        let raw = obs("Cafe", "00:11:22:33:44:55", 2412, -60);
        let d = builder.build_connected(&raw, &conn);
        assert!(d.is_connected());
        assert_eq!(d.ip_address(), Some("not-even-an-ip"));
        assert_eq!(d.link_speed_mbps(), Some(144));
        assert_eq!(d, builder.build(&raw));
    }

    #[test]
    fn identity_ignores_enrichment() {
        let mut vendors = OuiVendorTable::new();
        vendors.insert("00:11:22", "Acme");
        let a = RecordBuilder::new(&vendors, &[]).build(&obs("Cafe", "00:11:22:33:44:55", 2412, -60));
        let b = RecordBuilder::new(&NoVendorLookup, &[]).build(&obs("Cafe", "00:11:22:33:44:55", 2412, -90));
        assert_eq!(a, b);

        let other_freq =
            RecordBuilder::new(&NoVendorLookup, &[]).build(&obs("Cafe", "00:11:22:33:44:55", 2437, -60));
        assert_ne!(a, other_freq);
    }
}
