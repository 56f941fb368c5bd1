//! View settings.
//!
//! Settings arrive as loosely typed input (TOML or anything serde can read)
//! and are resolved into a validated [`Settings`]. Unknown `group_by`,
//! `sort_by` or `band` values are rejected here rather than defaulted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::band::BandFilter;
use crate::error::{ConfigError, Result};
use crate::group::GroupBy;
use crate::sort::SortBy;

pub const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsInput {
    pub version: u32,
    pub group_by: Option<String>,
    pub sort_by: Option<String>,
    pub band: Option<String>,
    pub hide_weak: Option<bool>,
}

/// Validated view configuration, read once per aggregation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub group_by: GroupBy,
    pub sort_by: SortBy,
    pub band: BandFilter,
    pub hide_weak: bool,
}

impl SettingsInput {
    pub fn resolve(self) -> Result<Settings> {
        let version = if self.version == 0 {
            SETTINGS_VERSION
        } else {
            self.version
        };
        if version != SETTINGS_VERSION {
            return Err(ConfigError::UnsupportedVersion(version));
        }

        let defaults = Settings::default();
        Ok(Settings {
            group_by: parse_or(self.group_by.as_deref(), defaults.group_by)?,
            sort_by: parse_or(self.sort_by.as_deref(), defaults.sort_by)?,
            band: parse_or(self.band.as_deref(), defaults.band)?,
            hide_weak: self.hide_weak.unwrap_or(defaults.hide_weak),
        })
    }
}

fn parse_or<T>(value: Option<&str>, default: T) -> Result<T>
where
    T: std::str::FromStr<Err = ConfigError>,
{
    match value {
        Some(v) => v.parse(),
        None => Ok(default),
    }
}

impl Settings {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Settings::default());
        }
        let parsed: SettingsInput = toml::from_str(input)?;
        parsed.resolve()
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

/// Supplies the current view settings.
///
/// Called once at the start of every aggregator operation; the result is not
/// kept between calls.
pub trait SettingsProvider {
    fn settings(&self) -> Result<Settings>;
}

impl SettingsProvider for Settings {
    fn settings(&self) -> Result<Settings> {
        Ok(*self)
    }
}

impl SettingsProvider for SettingsInput {
    fn settings(&self) -> Result<Settings> {
        self.clone().resolve()
    }
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for &T {
    fn settings(&self) -> Result<Settings> {
        (**self).settings()
    }
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for std::sync::Arc<T> {
    fn settings(&self) -> Result<Settings> {
        (**self).settings()
    }
}
