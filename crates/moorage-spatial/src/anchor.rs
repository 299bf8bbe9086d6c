//! Facing-based anchor resolution.
//!
//! A ship is placed ahead of and slightly beside the block the actor picked,
//! sunk a little below it so the hull sits in the water. The offset table is
//! expressed in the actor's frame and mapped to world axes per facing:
//!
//! | facing | offset (dx, dy, dz)            | rotation |
//! |--------|--------------------------------|----------|
//! | South  | (+lateral, drop, +distance)    | Cw270    |
//! | North  | (-lateral, drop, -distance)    | Cw90     |
//! | East   | (+distance, drop, -lateral)    | Cw180    |
//! | West   | (-distance, drop, +lateral)    | None     |

use moorage_core::pos::{BlockPos, Direction, Rotation};
use serde::{Deserialize, Serialize};

/// Where a structure goes, and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    pub position: BlockPos,
    pub rotation: Rotation,
}

/// Offset magnitudes from the reference block to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorOffsets {
    /// Along the facing axis.
    pub distance: i32,
    /// Across the facing axis.
    pub lateral: i32,
    /// Vertical. Negative sinks the anchor below the reference.
    pub drop: i32,
}

impl AnchorOffsets {
    /// Offsets used by the supply ship template.
    pub const SUPPLY_SHIP: AnchorOffsets = AnchorOffsets {
        distance: 14,
        lateral: 5,
        drop: -2,
    };

    /// World-space offset `(dx, dy, dz)` for an actor facing `facing`.
    /// Negation wraps, so any configured magnitude is accepted.
    pub fn offset_for(&self, facing: Direction) -> (i32, i32, i32) {
        let (d, l, v) = (self.distance, self.lateral, self.drop);
        match facing {
            Direction::South => (l, v, d),
            Direction::North => (l.wrapping_neg(), v, d.wrapping_neg()),
            Direction::East => (d, v, l.wrapping_neg()),
            Direction::West => (d.wrapping_neg(), v, l),
        }
    }

    /// Resolve the anchor for a structure placed from `reference` while
    /// facing `facing`.
    pub fn resolve(&self, reference: BlockPos, facing: Direction) -> Anchor {
        let (dx, dy, dz) = self.offset_for(facing);
        Anchor {
            position: reference.offset(dx, dy, dz),
            rotation: rotation_for(facing),
        }
    }
}

impl Default for AnchorOffsets {
    fn default() -> Self {
        Self::SUPPLY_SHIP
    }
}

/// Template rotation matching a facing. Independent of offset magnitudes.
pub fn rotation_for(facing: Direction) -> Rotation {
    match facing {
        Direction::South => Rotation::Cw270,
        Direction::North => Rotation::Cw90,
        Direction::East => Rotation::Cw180,
        Direction::West => Rotation::None,
    }
}

/// Resolve the supply ship anchor for a reference block and facing.
pub fn resolve_anchor(reference: BlockPos, facing: Direction) -> Anchor {
    AnchorOffsets::SUPPLY_SHIP.resolve(reference, facing)
}
