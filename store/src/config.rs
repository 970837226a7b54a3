//! # Dashboard configuration — `dashboard.toml`
//!
//! Defines the TOML configuration that controls how the in-memory store
//! behaves (filename: [`DashboardConfig::filename`] = `"dashboard.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [latency]
//! get_ms = 300     # simulated delay for id/email lookups
//! list_ms = 500    # simulated delay for full-collection reads
//! write_ms = 500   # simulated delay for create/update/delete
//!
//! [seed]
//! enabled = true   # load the sample users/posts at startup
//! ```
//!
//! The latency numbers exist purely so a frontend can demonstrate pending
//! states; they carry no semantic meaning and tests set them to zero via
//! [`DashboardConfig::with_zero_latency`].
//!
//! All structs derive `Default` (with the production defaults above) so a
//! missing or empty config file is equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Simulated latency per operation class, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Delay for single-record lookups (`get_*`, `find_user_by_email`).
    #[serde(default = "default_get_ms")]
    pub get_ms: u64,
    /// Delay for full-collection reads (`list_*`).
    #[serde(default = "default_list_ms")]
    pub list_ms: u64,
    /// Delay for mutations (`create_*`, `update_*`, `delete_*`).
    #[serde(default = "default_write_ms")]
    pub write_ms: u64,
}

/// Whether the store starts with the sample fixtures loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

fn default_get_ms() -> u64 {
    300
}

fn default_list_ms() -> u64 {
    500
}

fn default_write_ms() -> u64 {
    500
}

fn default_seed_enabled() -> bool {
    true
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            get_ms: default_get_ms(),
            list_ms: default_list_ms(),
            write_ms: default_write_ms(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_seed_enabled(),
        }
    }
}

impl LatencyConfig {
    /// All delays zero — instant operations.
    pub fn none() -> Self {
        Self {
            get_ms: 0,
            list_ms: 0,
            write_ms: 0,
        }
    }

    pub fn get_delay(&self) -> Duration {
        Duration::from_millis(self.get_ms)
    }

    pub fn list_delay(&self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    pub fn write_delay(&self) -> Duration {
        Duration::from_millis(self.write_ms)
    }
}

impl DashboardConfig {
    /// Builder method to disable all simulated latency.
    pub fn with_zero_latency(mut self) -> Self {
        self.latency = LatencyConfig::none();
        self
    }

    /// Builder method to skip loading the sample fixtures.
    pub fn without_seed(mut self) -> Self {
        self.seed.enabled = false;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
