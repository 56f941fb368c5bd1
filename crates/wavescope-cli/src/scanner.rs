//! Scan sources for the command line: a JSON snapshot on disk, or a
//! simulated neighbourhood for local development.

use std::path::Path;

use anyhow::Context;
use wavescope_core::{ConfiguredNetwork, ConnectionState, RawObservation, ScanSnapshot, ScanSource};

/// Snapshot read once from a JSON file.
pub struct FileScanSource {
    snapshot: ScanSnapshot,
}

impl FileScanSource {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scan {}", path.display()))?;
        let snapshot: ScanSnapshot = serde_json::from_str(&raw)
            .with_context(|| format!("invalid scan JSON in {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            observations = snapshot.observations.len(),
            connected = snapshot.connection.as_ref().is_some_and(|c| c.is_active()),
            "loaded scan snapshot"
        );
        Ok(Self { snapshot })
    }
}

impl ScanSource for FileScanSource {
    fn snapshot(&self) -> ScanSnapshot {
        self.snapshot.clone()
    }
}

/// Generates a fresh, plausible scan on every call.
pub struct SimulatedScanSource;

struct SimulatedAp {
    ssid: &'static str,
    oui: &'static str,
    capabilities: &'static str,
    /// (frequency MHz, best-case level dBm)
    radios: &'static [(i32, i32)],
}

const NEIGHBOURHOOD: &[SimulatedAp] = &[
    SimulatedAp {
        ssid: "HomeNet",
        oui: "f0:9f:c2",
        capabilities: "[WPA2-PSK-CCMP][RSN-SAE-CCMP][ESS]",
        radios: &[(2437, -45), (5180, -55)],
    },
    SimulatedAp {
        ssid: "Neighbour-5G",
        oui: "00:1a:2b",
        capabilities: "[WPA2-PSK-CCMP][WPS][ESS]",
        radios: &[(5745, -70), (2412, -68)],
    },
    SimulatedAp {
        ssid: "CoffeeShop",
        oui: "3c:84:6a",
        capabilities: "[ESS]",
        radios: &[(2462, -72)],
    },
    SimulatedAp {
        ssid: "",
        oui: "b0:be:76",
        capabilities: "[WPA2-PSK-CCMP][ESS]",
        radios: &[(2437, -80), (5200, -85)],
    },
    SimulatedAp {
        ssid: "PrinterDirect",
        oui: "a4:5d:36",
        capabilities: "[WEP][ESS]",
        radios: &[(2412, -88)],
    },
];

const LINK_SPEEDS: [u32; 4] = [144, 300, 433, 866];

impl ScanSource for SimulatedScanSource {
    fn snapshot(&self) -> ScanSnapshot {
        use rand::Rng;
        let mut rng = rand::rng();

        let mut observations = Vec::new();
        for (ap, site) in NEIGHBOURHOOD.iter().zip(1u8..) {
            for (&(frequency, best), radio) in ap.radios.iter().zip(1u8..) {
                // distant radios drop out of some scans
                if best < -80 && rng.random_bool(0.3) {
                    continue;
                }
                observations.push(RawObservation {
                    ssid: ap.ssid.into(),
                    bssid: format!("{}:{site:02x}:00:{radio:02x}", ap.oui),
                    frequency,
                    level: best - rng.random_range(0..12),
                    capabilities: ap.capabilities.into(),
                });
            }
        }

        let home = &NEIGHBOURHOOD[0];
        let connection = ConnectionState {
            ssid: Some(format!("\"{}\"", home.ssid)),
            bssid: Some(format!("{}:01:00:02", home.oui)),
            ip_address: Some(format!("192.168.1.{}", rng.random_range(2..250))),
            link_speed_mbps: Some(LINK_SPEEDS[rng.random_range(0..LINK_SPEEDS.len())]),
        };

        ScanSnapshot {
            observations,
            connection: Some(connection),
            configured_networks: vec![
                ConfiguredNetwork {
                    ssid: format!("\"{}\"", home.ssid),
                },
                ConfiguredNetwork {
                    ssid: "\"CoffeeShop\"".into(),
                },
            ],
        }
    }
}
