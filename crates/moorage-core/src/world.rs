//! Read-only world access and a sparse in-memory voxel world.

use crate::pos::BlockPos;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Coarse classification of a block, as far as placement rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Air,
    Water,
    /// Anything that is neither air nor water.
    Other,
}

impl BlockKind {
    pub fn is_air(self) -> bool {
        self == BlockKind::Air
    }

    pub fn is_water(self) -> bool {
        self == BlockKind::Water
    }
}

/// Read-only block lookups against a voxel world.
///
/// Implementations must answer for every position; unloaded or out-of-range
/// positions should report whatever the host world reports for them.
pub trait WorldView {
    fn block_kind_at(&self, pos: BlockPos) -> BlockKind;
}

impl<T: WorldView + ?Sized> WorldView for &T {
    fn block_kind_at(&self, pos: BlockPos) -> BlockKind {
        (**self).block_kind_at(pos)
    }
}

// ---------------------------------------------------------------------------
// VoxelWorld
// ---------------------------------------------------------------------------

/// A sparse voxel world. Positions never written read as [`BlockKind::Air`].
#[derive(Debug, Clone, Default)]
pub struct VoxelWorld {
    blocks: BTreeMap<BlockPos, BlockKind>,
}

impl VoxelWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block at `pos`. Setting air removes the entry.
    pub fn set(&mut self, pos: BlockPos, kind: BlockKind) {
        if kind.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, kind);
        }
    }

    /// Reset `pos` to air. Returns the kind that was there.
    pub fn clear(&mut self, pos: BlockPos) -> BlockKind {
        self.blocks.remove(&pos).unwrap_or_default()
    }

    /// Fill the axis-aligned box `[min, max]` (inclusive on every axis).
    /// Corners may be given in any order.
    pub fn fill(&mut self, min: BlockPos, max: BlockPos, kind: BlockKind) {
        let (x0, x1) = (min.x.min(max.x), min.x.max(max.x));
        let (y0, y1) = (min.y.min(max.y), min.y.max(max.y));
        let (z0, z1) = (min.z.min(max.z), min.z.max(max.z));
        for y in y0..=y1 {
            for z in z0..=z1 {
                for x in x0..=x1 {
                    self.set(BlockPos::new(x, y, z), kind);
                }
            }
        }
    }

    /// Number of non-air blocks stored.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl WorldView for VoxelWorld {
    fn block_kind_at(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }
}
