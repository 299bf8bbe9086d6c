//! Deployer configuration schema.
//!
//! Every field has a default, so a config file only needs to mention what it
//! changes. A directory without any config file yields the defaults.

use moorage_core::id::DimensionId;
use moorage_spatial::{AnchorOffsets, FootprintSize};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::loader::{DataLoadError, load_or_default};

/// Base name of the deployer config file (`deployer.ron`, `.toml` or `.json`).
pub const DEPLOYER_CONFIG: &str = "deployer";

/// Settings for the supply ship deployer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployerConfig {
    /// Allow deploying outside `home_dimension`.
    pub allow_other_dimensions: bool,
    pub home_dimension: DimensionId,
    pub structure: StructureConfig,
}

impl Default for DeployerConfig {
    fn default() -> Self {
        Self {
            allow_other_dimensions: false,
            home_dimension: DimensionId::OVERWORLD,
            structure: StructureConfig::default(),
        }
    }
}

impl DeployerConfig {
    /// Whether deploying in `dimension` is allowed.
    pub fn allows_dimension(&self, dimension: DimensionId) -> bool {
        self.allow_other_dimensions || dimension == self.home_dimension
    }
}

/// The structure template a deployer places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Template name handed to the placement preview.
    pub name: String,
    /// Unrotated footprint of the template.
    pub footprint: FootprintSize,
    pub offsets: AnchorOffsets,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            name: "supplyship".to_string(),
            footprint: FootprintSize::SUPPLY_SHIP,
            offsets: AnchorOffsets::SUPPLY_SHIP,
        }
    }
}

/// Load `deployer.{ron,toml,json}` from `dir`, falling back to defaults when
/// no such file exists.
pub fn load_deployer_config(dir: &Path) -> Result<DeployerConfig, DataLoadError> {
    let config: DeployerConfig = load_or_default(dir, DEPLOYER_CONFIG)?;
    tracing::debug!(
        structure = %config.structure.name,
        width = config.structure.footprint.width(),
        depth = config.structure.footprint.depth(),
        allow_other_dimensions = config.allow_other_dimensions,
        "deployer config ready"
    );
    Ok(config)
}
