//! JSON shape of the printed views.
//!
//! Adds the derived fields of a record (title, security, channel span and
//! distance) next to the scanned ones.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use wavescope_core::{ChannelView, Security, Strength, WifiBand, WifiDetail};

#[derive(Debug, Serialize)]
pub struct DetailView<'a> {
    pub title: String,
    pub ssid: &'a str,
    pub bssid: &'a str,
    pub frequency: i32,
    pub channel: i32,
    pub channel_span: (i32, i32),
    pub level: i32,
    pub strength: Strength,
    pub band: WifiBand,
    pub distance_m: f64,
    pub capabilities: &'a str,
    pub security: BTreeSet<Security>,
    pub primary_security: Security,
    pub vendor_name: &'a str,
    pub configured: bool,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_speed_mbps: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DetailView<'a>>,
}

impl<'a> From<&'a WifiDetail> for DetailView<'a> {
    fn from(d: &'a WifiDetail) -> Self {
        Self {
            title: d.title(),
            ssid: d.ssid(),
            bssid: d.bssid(),
            frequency: d.frequency(),
            channel: d.channel(),
            channel_span: d.channel_span(),
            level: d.level(),
            strength: d.strength(),
            band: d.band(),
            distance_m: d.distance_m(),
            capabilities: d.capabilities(),
            security: d.security(),
            primary_security: d.primary_security(),
            vendor_name: d.vendor_name(),
            configured: d.is_configured(),
            connected: d.is_connected(),
            ip_address: d.ip_address(),
            link_speed_mbps: d.link_speed_mbps(),
            children: d.children().iter().map(DetailView::from).collect(),
        }
    }
}

pub fn list(records: &[WifiDetail]) -> Vec<DetailView<'_>> {
    records.iter().map(DetailView::from).collect()
}

pub fn channels(view: &ChannelView) -> BTreeMap<i32, Vec<DetailView<'_>>> {
    view.iter()
        .map(|(channel, records)| (*channel, list(records)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavescope_core::builder::RecordBuilder;
    use wavescope_core::{NoVendorLookup, RawObservation};

    fn detail(ssid: &str, capabilities: &str) -> WifiDetail {
        let raw = RawObservation {
            ssid: ssid.into(),
            bssid: "00:11:22:33:44:55".into(),
            frequency: 2437,
            level: -40,
            capabilities: capabilities.into(),
        };
        RecordBuilder::new(&NoVendorLookup, &[]).build(&raw)
    }

    #[test]
    fn derived_fields_are_serialized() {
        let d = detail("", "[WPA2-PSK-CCMP][WPS][ESS]");
        let json = serde_json::to_value(DetailView::from(&d)).unwrap();
        assert_eq!(json["title"], "*** (00:11:22:33:44:55)");
        assert_eq!(json["channel_span"], serde_json::json!([4, 8]));
        assert_eq!(json["primary_security"], "wpa2");
        assert_eq!(json["security"], serde_json::json!(["wps", "wpa2"]));
        assert!(json["distance_m"].as_f64().unwrap() > 0.0);
        assert!(json.get("ip_address").is_none());
        assert!(json.get("children").is_none());
    }
}
