//! The supply ship deployer.
//!
//! Two entry points mirror how an actor can use the deployer item: on a block
//! (the anchor is derived from that block and the actor's facing) or in the
//! air (the preview opens unanchored). Both share the dimension gate. After
//! the actor confirms a position in the preview, [`SupplyShipDeployer::confirm`]
//! runs the footprint validation and hands back the placement to build.

use moorage_core::id::{ActorId, DimensionId};
use moorage_core::ownership::OwnershipOracle;
use moorage_core::pos::{BlockPos, Direction, Rotation};
use moorage_core::world::WorldView;
use moorage_data::{DeployerConfig, load_deployer_config};
use moorage_spatial::{Anchor, FootprintSize, PlacementError, validate_footprint};
use std::path::Path;

use crate::error::DeployError;
use crate::preview::{BuildPreview, CANT_PLACE_IN_OTHER_DIMENSION, Messenger, PreviewRequest};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Everything the deployer needs to know about a single use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseContext {
    pub actor: ActorId,
    pub dimension: DimensionId,
    /// The block the deployer was used on, if any.
    pub target: Option<BlockPos>,
    /// The actor's horizontal facing.
    pub facing: Direction,
}

/// Result of using the deployer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    /// The preview was opened with this request.
    PreviewOpened(PreviewRequest),
    /// The dimension gate refused the use. Nothing was opened.
    DimensionBlocked { dimension: DimensionId },
}

/// A validated placement, ready for the structure builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedPlacement {
    pub structure: String,
    pub anchor: Anchor,
    /// Footprint after rotation, as it was validated.
    pub footprint: FootprintSize,
}

// ---------------------------------------------------------------------------
// SupplyShipDeployer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SupplyShipDeployer {
    config: DeployerConfig,
}

impl SupplyShipDeployer {
    pub fn new(config: DeployerConfig) -> Self {
        Self { config }
    }

    /// Build a deployer from the `deployer.*` config in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DeployError> {
        Ok(Self::new(load_deployer_config(dir.as_ref())?))
    }

    pub fn config(&self) -> &DeployerConfig {
        &self.config
    }

    /// Use the deployer on a block. A use without a target block behaves like
    /// an unanchored preview. A refused dimension is silent.
    pub fn use_on_block(&self, ctx: &UseContext, preview: &mut impl BuildPreview) -> UseOutcome {
        if !self.config.allows_dimension(ctx.dimension) {
            tracing::debug!(
                actor = ctx.actor.0,
                dimension = ctx.dimension.0,
                "deploy blocked by dimension gate"
            );
            return UseOutcome::DimensionBlocked {
                dimension: ctx.dimension,
            };
        }
        self.open_preview(self.preview_request(ctx.target, ctx.facing), preview)
    }

    /// Use the deployer without a target block. A refused dimension is
    /// reported to the actor through `messenger`.
    pub fn use_in_air(
        &self,
        ctx: &UseContext,
        preview: &mut impl BuildPreview,
        messenger: &mut impl Messenger,
    ) -> UseOutcome {
        if !self.config.allows_dimension(ctx.dimension) {
            tracing::debug!(
                actor = ctx.actor.0,
                dimension = ctx.dimension.0,
                "deploy blocked by dimension gate"
            );
            messenger.send(ctx.actor, CANT_PLACE_IN_OTHER_DIMENSION);
            return UseOutcome::DimensionBlocked {
                dimension: ctx.dimension,
            };
        }
        self.open_preview(self.preview_request(None, ctx.facing), preview)
    }

    /// The preview request for a use on `target` while facing `facing`.
    pub fn preview_request(&self, target: Option<BlockPos>, facing: Direction) -> PreviewRequest {
        let structure = self.config.structure.name.clone();
        match target {
            None => PreviewRequest {
                structure,
                anchor: None,
                rotation: Rotation::None,
            },
            Some(reference) => {
                let anchor = self.config.structure.offsets.resolve(reference, facing);
                PreviewRequest {
                    structure,
                    anchor: Some(anchor.position),
                    rotation: anchor.rotation,
                }
            }
        }
    }

    /// The template footprint turned by `rotation`.
    pub fn footprint_for(&self, rotation: Rotation) -> FootprintSize {
        self.config.structure.footprint.rotated(rotation)
    }

    /// Validate the footprint at `anchor` without the dimension gate.
    pub fn check<W, O>(
        &self,
        world: &W,
        oracle: &O,
        actor: ActorId,
        anchor: Anchor,
    ) -> Vec<PlacementError>
    where
        W: WorldView + ?Sized,
        O: OwnershipOracle + ?Sized,
    {
        validate_footprint(
            world,
            oracle,
            anchor.position,
            self.footprint_for(anchor.rotation),
            actor,
        )
    }

    /// Confirm a position chosen in the preview.
    ///
    /// Re-applies the dimension gate, then validates the rotated footprint.
    /// Any violation rejects the placement with the complete error list.
    pub fn confirm<W, O>(
        &self,
        world: &W,
        oracle: &O,
        actor: ActorId,
        dimension: DimensionId,
        anchor: Anchor,
    ) -> Result<ConfirmedPlacement, DeployError>
    where
        W: WorldView + ?Sized,
        O: OwnershipOracle + ?Sized,
    {
        if !self.config.allows_dimension(dimension) {
            return Err(DeployError::DimensionNotAllowed { dimension });
        }

        let errors = self.check(world, oracle, actor, anchor);
        if !errors.is_empty() {
            tracing::debug!(
                actor = actor.0,
                anchor = %anchor.position,
                errors = errors.len(),
                "supply ship placement rejected"
            );
            return Err(DeployError::Rejected { errors });
        }

        tracing::debug!(
            actor = actor.0,
            anchor = %anchor.position,
            "supply ship placement confirmed"
        );
        Ok(ConfirmedPlacement {
            structure: self.config.structure.name.clone(),
            anchor,
            footprint: self.footprint_for(anchor.rotation),
        })
    }

    fn open_preview(&self, request: PreviewRequest, preview: &mut impl BuildPreview) -> UseOutcome {
        tracing::debug!(
            structure = %request.structure,
            anchor = ?request.anchor,
            rotation = request.rotation.quarter_turns(),
            "opening placement preview"
        );
        preview.open(request.clone());
        UseOutcome::PreviewOpened(request)
    }
}
