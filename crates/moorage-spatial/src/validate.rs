//! Footprint validation for ship placement.
//!
//! The scan covers every column of the footprint at two heights relative to
//! the anchor and collects every violation instead of stopping at the first:
//!
//! 1. Surface pass at `anchor.y + SURFACE_OFFSET`: the block must be water,
//!    and the actor must be allowed to place blocks there. Both rules are
//!    checked for every tile, so one tile can fail both.
//! 2. Clearance pass at `anchor.y + CLEARANCE_HEIGHT`: the block must be air.
//!
//! Errors come back as all surface errors followed by all clearance errors,
//! each in scan order (z ascending, then x ascending). The scan only reads
//! from the world and the ownership oracle. Heights and columns wrap at the
//! `i32` bounds the same way [`BlockPos::offset`] does.

use crate::FootprintSize;
use moorage_core::id::ActorId;
use moorage_core::ownership::OwnershipOracle;
use moorage_core::pos::BlockPos;
use moorage_core::world::WorldView;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Height above the anchor of the layer that must be water.
pub const SURFACE_OFFSET: i32 = 2;

/// Height above the anchor of the layer that must be air.
pub const CLEARANCE_HEIGHT: i32 = 7;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which placement rule a tile broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementErrorKind {
    NotWater,
    InsideProtectedArea,
    NeedsAirAbove,
}

impl fmt::Display for PlacementErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PlacementErrorKind::NotWater => "not water",
            PlacementErrorKind::InsideProtectedArea => "inside protected area",
            PlacementErrorKind::NeedsAirAbove => "needs air above",
        };
        f.write_str(text)
    }
}

/// A single rule violation found during a footprint scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct PlacementError {
    pub kind: PlacementErrorKind,
    pub pos: BlockPos,
}

impl PlacementError {
    pub fn new(kind: PlacementErrorKind, pos: BlockPos) -> Self {
        Self { kind, pos }
    }
}

// ---------------------------------------------------------------------------
// Per-tile checks
// ---------------------------------------------------------------------------

fn check_surface<W, O>(
    world: &W,
    oracle: &O,
    actor: ActorId,
    pos: BlockPos,
) -> [Option<PlacementError>; 2]
where
    W: WorldView + ?Sized,
    O: OwnershipOracle + ?Sized,
{
    let is_water = world.block_kind_at(pos).is_water();
    let may_place = oracle.may_place(actor, pos);
    [
        (!is_water).then(|| PlacementError::new(PlacementErrorKind::NotWater, pos)),
        (!may_place).then(|| PlacementError::new(PlacementErrorKind::InsideProtectedArea, pos)),
    ]
}

fn check_clearance<W>(world: &W, pos: BlockPos) -> Option<PlacementError>
where
    W: WorldView + ?Sized,
{
    (!world.block_kind_at(pos).is_air())
        .then(|| PlacementError::new(PlacementErrorKind::NeedsAirAbove, pos))
}

fn log_summary(anchor: BlockPos, size: FootprintSize, surface: usize, errors: &[PlacementError]) {
    for error in errors {
        tracing::trace!(kind = %error.kind, pos = %error.pos, "placement violation");
    }
    tracing::debug!(
        %anchor,
        width = size.width(),
        depth = size.depth(),
        surface_errors = surface,
        clearance_errors = errors.len() - surface,
        "validated ship footprint"
    );
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Scan the footprint of `size` around `anchor` and return every violation.
///
/// An empty result means the placement is legal. The result is deterministic
/// for identical world state and inputs.
pub fn validate_footprint<W, O>(
    world: &W,
    oracle: &O,
    anchor: BlockPos,
    size: FootprintSize,
    actor: ActorId,
) -> Vec<PlacementError>
where
    W: WorldView + ?Sized,
    O: OwnershipOracle + ?Sized,
{
    let surface_y = anchor.above(SURFACE_OFFSET).y;
    let clearance_y = anchor.above(CLEARANCE_HEIGHT).y;
    let mut errors = Vec::new();

    for (x, z) in size.columns(anchor) {
        let pos = BlockPos::new(x, surface_y, z);
        errors.extend(check_surface(world, oracle, actor, pos).into_iter().flatten());
    }
    let surface = errors.len();

    for (x, z) in size.columns(anchor) {
        errors.extend(check_clearance(world, BlockPos::new(x, clearance_y, z)));
    }

    log_summary(anchor, size, surface, &errors);
    errors
}

/// Parallel variant of [`validate_footprint`]. Tiles are checked on the rayon
/// pool; the result is identical, in the same order, to the sequential scan.
#[cfg(feature = "parallel")]
pub fn validate_footprint_par<W, O>(
    world: &W,
    oracle: &O,
    anchor: BlockPos,
    size: FootprintSize,
    actor: ActorId,
) -> Vec<PlacementError>
where
    W: WorldView + Sync + ?Sized,
    O: OwnershipOracle + Sync + ?Sized,
{
    use rayon::prelude::*;

    let surface_y = anchor.above(SURFACE_OFFSET).y;
    let clearance_y = anchor.above(CLEARANCE_HEIGHT).y;
    let columns: Vec<(i32, i32)> = size.columns(anchor).collect();

    // Indexed collects keep scan order regardless of scheduling.
    let surface_tiles: Vec<[Option<PlacementError>; 2]> = columns
        .par_iter()
        .map(|&(x, z)| check_surface(world, oracle, actor, BlockPos::new(x, surface_y, z)))
        .collect();
    let clearance_tiles: Vec<Option<PlacementError>> = columns
        .par_iter()
        .map(|&(x, z)| check_clearance(world, BlockPos::new(x, clearance_y, z)))
        .collect();

    let mut errors: Vec<PlacementError> = surface_tiles.into_iter().flatten().flatten().collect();
    let surface = errors.len();
    errors.extend(clearance_tiles.into_iter().flatten());

    log_summary(anchor, size, surface, &errors);
    errors
}

/// Whether a ship of `size` may be anchored at `anchor`.
pub fn can_place_ship<W, O>(
    world: &W,
    oracle: &O,
    anchor: BlockPos,
    size: FootprintSize,
    actor: ActorId,
) -> bool
where
    W: WorldView + ?Sized,
    O: OwnershipOracle + ?Sized,
{
    validate_footprint(world, oracle, anchor, size, actor).is_empty()
}
