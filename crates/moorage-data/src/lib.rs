//! Configuration loading for the supply ship deployer.
//!
//! Config files may be written in RON, TOML, or JSON; the format is picked
//! from the file extension.

pub mod config;
pub mod loader;

pub use config::{DEPLOYER_CONFIG, DeployerConfig, StructureConfig, load_deployer_config};
pub use loader::{DataLoadError, Format, load_or_default};
