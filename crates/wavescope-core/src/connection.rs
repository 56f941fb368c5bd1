//! Connection matcher.
//!
//! Finds the scan observation that corresponds to the device's active link.
//! The BSSID is the identity; when both the link and the observation report
//! an SSID they must agree as well. The first match in scan order wins, and a
//! link to an access point missing from the scan tags nothing.

use crate::builder::{unquote, RecordBuilder};
use crate::models::{ConnectionState, RawObservation, ScanSnapshot, WifiDetail};
use crate::vendor::VendorLookup;

/// Whether `obs` is the access point the link is associated with.
pub fn matches(conn: &ConnectionState, obs: &RawObservation) -> bool {
    let Some(bssid) = conn.bssid.as_deref() else {
        return false;
    };
    if !bssid.trim().eq_ignore_ascii_case(obs.bssid.trim()) {
        return false;
    }
    match conn.ssid.as_deref().map(unquote) {
        Some(ssid) if !ssid.is_empty() && !obs.ssid.is_empty() => ssid == obs.ssid,
        _ => true,
    }
}

/// Index of the first observation matching an active connection.
pub fn find_match(conn: Option<&ConnectionState>, observations: &[RawObservation]) -> Option<usize> {
    let conn = conn.filter(|c| c.is_active())?;
    observations.iter().position(|obs| matches(conn, obs))
}

/// Build the connection-tagged record for a snapshot, if the active link is
/// in the scan.
pub fn connection_detail<V: VendorLookup + ?Sized>(
    snapshot: &ScanSnapshot,
    vendor: &V,
) -> Option<WifiDetail> {
    if !snapshot.has_data() {
        return None;
    }
    let conn = snapshot.connection.as_ref()?;
    let idx = find_match(Some(conn), &snapshot.observations)?;
    let obs = &snapshot.observations[idx];
    tracing::trace!(bssid = %obs.bssid, ssid = %obs.ssid, index = idx, "matched active connection");
    let builder = RecordBuilder::new(vendor, &snapshot.configured_networks);
    Some(builder.build_connected(obs, conn))
}
