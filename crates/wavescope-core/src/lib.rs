//! # wavescope-core
//!
//! Turns a flat Wi-Fi scan into a de-duplicated, grouped and sorted view.
//!
//! ## Crate structure
//!
//! - [`strength`]: RSSI → five-tier strength, weak-signal predicate
//! - [`band`]: frequency → band and channel, band filter
//! - [`security`]: capability string → security modes
//! - [`models`]: scan inputs and the canonical [`WifiDetail`] record
//! - [`builder`]: observation → record, saved-network matching
//! - [`connection`]: which observation is the active link
//! - [`sort`]: display orders
//! - [`group`]: grouping keys and the grouping pass
//! - [`aggregator`]: list view, channel view, connection
//! - [`config`]: validated view settings and their provider
//! - [`vendor`] / [`source`]: ports for vendor names and scan data

pub mod aggregator;
pub mod band;
pub mod builder;
pub mod config;
pub mod connection;
pub mod error;
pub mod group;
pub mod models;
pub mod security;
pub mod sort;
pub mod source;
pub mod strength;
pub mod vendor;

pub use aggregator::{Aggregator, ChannelView};
pub use band::{BandFilter, WifiBand, CHANNEL_OFFSET};
pub use config::{Settings, SettingsInput, SettingsProvider};
pub use error::{ConfigError, Result};
pub use group::GroupBy;
pub use models::{ConfiguredNetwork, ConnectionState, RawObservation, ScanSnapshot, WifiDetail};
pub use security::Security;
pub use sort::SortBy;
pub use source::ScanSource;
pub use strength::Strength;
pub use vendor::{NoVendorLookup, OuiVendorTable, VendorLookup};
