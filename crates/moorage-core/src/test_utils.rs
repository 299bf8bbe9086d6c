//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::id::ActorId;
use crate::ownership::OwnershipOracle;
use crate::pos::BlockPos;
use crate::world::{BlockKind, VoxelWorld};
use std::collections::BTreeSet;

// ===========================================================================
// Actors
// ===========================================================================

pub fn captain() -> ActorId {
    ActorId(1)
}

pub fn stranger() -> ActorId {
    ActorId(2)
}

// ===========================================================================
// Oracles
// ===========================================================================

/// Permits every actor everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl OwnershipOracle for AllowAll {
    fn may_place(&self, _actor: ActorId, _pos: BlockPos) -> bool {
        true
    }
}

/// Denies every actor everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl OwnershipOracle for DenyAll {
    fn may_place(&self, _actor: ActorId, _pos: BlockPos) -> bool {
        false
    }
}

/// Denies exactly the listed positions, for every actor.
#[derive(Debug, Clone, Default)]
pub struct DenyAt(pub BTreeSet<BlockPos>);

impl DenyAt {
    pub fn new(positions: impl IntoIterator<Item = BlockPos>) -> Self {
        Self(positions.into_iter().collect())
    }
}

impl OwnershipOracle for DenyAt {
    fn may_place(&self, _actor: ActorId, pos: BlockPos) -> bool {
        !self.0.contains(&pos)
    }
}

// ===========================================================================
// Worlds
// ===========================================================================

/// A world with a water layer at `surface_y` over the inclusive horizontal
/// box `[min_x, max_x] x [min_z, max_z]`. Everything else is air.
pub fn sea(surface_y: i32, min_x: i32, max_x: i32, min_z: i32, max_z: i32) -> VoxelWorld {
    let mut world = VoxelWorld::new();
    world.fill(
        BlockPos::new(min_x, surface_y, min_z),
        BlockPos::new(max_x, surface_y, max_z),
        BlockKind::Water,
    );
    world
}

/// A calm sea around the origin: water at `y = surface_y` for
/// `x, z in [-64, 64]`, air above.
pub fn open_sea(surface_y: i32) -> VoxelWorld {
    sea(surface_y, -64, 64, -64, 64)
}
