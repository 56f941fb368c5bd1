//! # Aggregator
//!
//! Composes the pipeline for one scan snapshot:
//!
//! ```text
//! observations → records → connection tagging → band / weak filter
//!              → grouping → sorting → view
//! ```
//!
//! Every operation is a pure function of the snapshot, the vendor lookup and
//! the settings read at the start of the call. Nothing is cached between
//! calls, so one `Aggregator` can serve concurrent callers.
//!
//! ## Connection record
//!
//! The record tagged as the active connection replaces the first plain record
//! with the same identity and is never hidden by the weak-signal filter.
//! Later exact duplicates of it are dropped, so at most one record per call
//! is marked connected. Without an active link the same duplicates survive
//! as group children.

use std::collections::BTreeMap;

use crate::band::BandFilter;
use crate::builder::RecordBuilder;
use crate::config::{Settings, SettingsProvider};
use crate::connection;
use crate::error::Result;
use crate::group::{group, GroupBy};
use crate::models::{ScanSnapshot, WifiDetail};
use crate::vendor::VendorLookup;

/// Channel number → the records heard on it, parent first.
pub type ChannelView = BTreeMap<i32, Vec<WifiDetail>>;

pub struct Aggregator<V, S> {
    vendor: V,
    settings: S,
}

impl<V: VendorLookup, S: SettingsProvider> Aggregator<V, S> {
    pub fn new(vendor: V, settings: S) -> Self {
        Self { vendor, settings }
    }

    /// Grouped, sorted list under the current settings.
    pub fn list(&self, snapshot: &ScanSnapshot) -> Result<Vec<WifiDetail>> {
        let settings = self.read_settings()?;
        Ok(self.list_view(snapshot, &settings))
    }

    /// Channel-indexed view under the current settings.
    pub fn channels(&self, snapshot: &ScanSnapshot) -> Result<ChannelView> {
        let settings = self.read_settings()?;
        Ok(self.channel_view(snapshot, &settings))
    }

    /// The scan record of the active connection, if it is in the scan.
    pub fn connection(&self, snapshot: &ScanSnapshot) -> Option<WifiDetail> {
        connection::connection_detail(snapshot, &self.vendor)
    }

    /// Grouped, sorted list with explicit settings.
    pub fn list_view(&self, snapshot: &ScanSnapshot, settings: &Settings) -> Vec<WifiDetail> {
        if !snapshot.has_data() {
            return Vec::new();
        }
        let records = self.build_records(snapshot, settings.band, settings.hide_weak);
        group(records, settings.group_by, settings.sort_by)
    }

    /// Records grouped by channel and flattened per channel, weak signals
    /// included. `settings.group_by` and `settings.hide_weak` are ignored.
    pub fn channel_view(&self, snapshot: &ScanSnapshot, settings: &Settings) -> ChannelView {
        let settings = Settings {
            group_by: GroupBy::Channel,
            hide_weak: false,
            ..*settings
        };
        self.list_view(snapshot, &settings)
            .into_iter()
            .map(|parent| (parent.channel(), parent.flatten()))
            .collect()
    }

    fn read_settings(&self) -> Result<Settings> {
        self.settings.settings().inspect_err(|e| {
            tracing::warn!(error = %e, "rejected view settings");
        })
    }

    fn build_records(
        &self,
        snapshot: &ScanSnapshot,
        band: BandFilter,
        hide_weak: bool,
    ) -> Vec<WifiDetail> {
        let builder = RecordBuilder::new(&self.vendor, &snapshot.configured_networks);
        let connection = self.connection(snapshot);
        let mut connection_emitted = false;

        let mut out = Vec::with_capacity(snapshot.observations.len());
        let mut off_band = 0usize;
        let mut weak = 0usize;
        for obs in &snapshot.observations {
            let detail = builder.build(obs);
            if !band.accepts(detail.band()) {
                off_band += 1;
                continue;
            }
            if let Some(conn) = connection.as_ref().filter(|c| **c == detail) {
                if !connection_emitted {
                    out.push(conn.clone());
                    connection_emitted = true;
                }
                continue;
            }
            if hide_weak && detail.strength().weak() {
                weak += 1;
                continue;
            }
            out.push(detail);
        }

        tracing::debug!(
            observations = snapshot.observations.len(),
            kept = out.len(),
            off_band,
            weak,
            connected = connection_emitted,
            "built records"
        );
        out
    }
}
