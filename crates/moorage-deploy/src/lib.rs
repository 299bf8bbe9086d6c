//! Supply ship deployment flow.
//!
//! Sits between the actor's interaction and the spatial core: applies the
//! dimension gate, resolves the anchor from the block the actor used, opens
//! the placement preview, and finally validates the confirmed position.
//!
//! # Usage
//!
//! ```rust,ignore
//! use moorage_deploy::{SupplyShipDeployer, UseContext};
//!
//! let deployer = SupplyShipDeployer::from_dir("config/")?;
//! let outcome = deployer.use_on_block(&ctx, &mut preview);
//! // ... the actor adjusts and confirms in the preview ...
//! let placement = deployer.confirm(&world, &areas, actor, dimension, anchor)?;
//! ```

pub mod deployer;
pub mod error;
pub mod preview;

pub use deployer::{ConfirmedPlacement, SupplyShipDeployer, UseContext, UseOutcome};
pub use error::DeployError;
pub use preview::{BuildPreview, CANT_PLACE_IN_OTHER_DIMENSION, Messenger, PreviewRequest};
