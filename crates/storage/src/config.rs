//! Struct array configuration via TOML
//!
//! Every knob has a default, so an empty document is a valid configuration.
//! The configuration is attached to a [`StructArrayType`](crate::StructArrayType)
//! and shared by every container it builds.

use crate::layout::Packing;
use serde::{Deserialize, Serialize};
use std::path::Path;
use structarray_core::{Error, Result};
use tracing::debug;

/// Default capacity of a container built without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 12;

/// Default capacity used when a zero-capacity container must grow.
pub const DEFAULT_GROWTH_FLOOR: usize = 12;

/// Configuration shared by all containers of one struct array type.
///
/// # Example
///
/// ```toml
/// # Capacity when none is given at construction (default: 12)
/// default_capacity = 12
///
/// # Capacity used when growing from zero (default: 12, must be > 0)
/// growth_floor = 12
///
/// # Field placement: "declaration" (default) or "size_descending"
/// packing = "declaration"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructArrayConfig {
    /// Capacity when none is given at construction
    #[serde(default = "default_capacity")]
    pub default_capacity: usize,
    /// Capacity used when growing from zero
    #[serde(default = "default_growth_floor")]
    pub growth_floor: usize,
    /// Field placement strategy
    #[serde(default)]
    pub packing: Packing,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_growth_floor() -> usize {
    DEFAULT_GROWTH_FLOOR
}

impl Default for StructArrayConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            growth_floor: DEFAULT_GROWTH_FLOOR,
            packing: Packing::Declaration,
        }
    }
}

impl StructArrayConfig {
    /// Set the default capacity
    pub fn with_default_capacity(mut self, capacity: usize) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// Set the growth floor
    pub fn with_growth_floor(mut self, floor: usize) -> Self {
        self.growth_floor = floor;
        self
    }

    /// Set the packing strategy
    pub fn with_packing(mut self, packing: Packing) -> Self {
        self.packing = packing;
        self
    }

    /// Check the configuration for values that would break growth
    ///
    /// # Errors
    ///
    /// Returns `Config` if `growth_floor` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.growth_floor == 0 {
            return Err(Error::config("growth_floor must be greater than 0"));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Struct array configuration
#
# Capacity when none is given at construction (default: 12)
default_capacity = 12

# Capacity used when growing from zero (default: 12, must be > 0)
growth_floor = 12

# Field placement (default: "declaration")
#   "declaration"     = fields stored in declaration order, no padding
#   "size_descending" = widest fields first, naturally aligned, no padding
packing = "declaration"
"#
    }

    /// Parse and validate a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text cannot be parsed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StructArrayConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        debug!(target: "structarray::config", ?config, "Config loaded");
        Ok(config)
    }

    /// Read and parse a config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        StructArrayConfig::from_toml_str(&content)
    }

    /// Serialize this config to TOML.
    ///
    /// # Errors
    ///
    /// Returns `Config` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))
    }
}
