//! Vendor name resolution.
//!
//! The aggregator only needs "hardware address in, name out". Resolution is
//! never cached or retried here; an unknown address yields an empty name.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Resolves the manufacturer of an access point from its BSSID.
pub trait VendorLookup {
    /// Returns an empty string when the vendor is unknown.
    fn find_vendor_name(&self, bssid: &str) -> String;
}

impl<T: VendorLookup + ?Sized> VendorLookup for &T {
    fn find_vendor_name(&self, bssid: &str) -> String {
        (**self).find_vendor_name(bssid)
    }
}

impl<T: VendorLookup + ?Sized> VendorLookup for Box<T> {
    fn find_vendor_name(&self, bssid: &str) -> String {
        (**self).find_vendor_name(bssid)
    }
}

impl<T: VendorLookup + ?Sized> VendorLookup for Arc<T> {
    fn find_vendor_name(&self, bssid: &str) -> String {
        (**self).find_vendor_name(bssid)
    }
}

/// Lookup that knows no vendors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVendorLookup;

impl VendorLookup for NoVendorLookup {
    fn find_vendor_name(&self, _bssid: &str) -> String {
        String::new()
    }
}

// ── OUI table ───────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OuiTableInput {
    vendors: HashMap<String, String>,
}

/// In-memory table keyed on the 24-bit OUI prefix of the hardware address.
///
/// Keys and lookups ignore case and separators, so `00:1A:2B`, `001a2b` and
/// `00-1a-2b-...` all hit the same entry.
#[derive(Debug, Clone, Default)]
pub struct OuiVendorTable {
    vendors: HashMap<String, String>,
}

impl OuiVendorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vendor. Returns `false` if `prefix` has fewer than six hex
    /// digits.
    pub fn insert(&mut self, prefix: &str, name: impl Into<String>) -> bool {
        match oui_key(prefix) {
            Some(key) => {
                self.vendors.insert(key, name.into());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Parse a `[vendors]` table of `"prefix" = "name"` pairs. Malformed
    /// prefixes are skipped.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let parsed: OuiTableInput = toml::from_str(input)?;
        let mut table = Self::new();
        for (prefix, name) in parsed.vendors {
            if !table.insert(&prefix, name) {
                tracing::warn!(prefix = %prefix, "skipping malformed OUI prefix");
            }
        }
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }
}

impl VendorLookup for OuiVendorTable {
    fn find_vendor_name(&self, bssid: &str) -> String {
        oui_key(bssid)
            .and_then(|key| self.vendors.get(&key).cloned())
            .unwrap_or_default()
    }
}

/// First six hex digits, upper-cased, separators dropped.
fn oui_key(address: &str) -> Option<String> {
    let key: String = address
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .take(6)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    (key.len() == 6).then_some(key)
}
