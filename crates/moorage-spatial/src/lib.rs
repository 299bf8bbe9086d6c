//! Spatial placement for multi-tile ship structures.
//!
//! Two pieces cooperate:
//!
//! - [`anchor`] maps a reference block and a facing to the anchor position
//!   and template rotation of the structure.
//! - [`validate`] scans every column of a footprint around that anchor and
//!   reports every rule violation it finds.
//!
//! ```rust,ignore
//! let anchor = resolve_anchor(clicked, Direction::from_yaw(yaw));
//! let size = FootprintSize::SUPPLY_SHIP.rotated(anchor.rotation);
//! let errors = validate_footprint(&world, &areas, anchor.position, size, actor);
//! if errors.is_empty() { /* hand off to the builder */ }
//! ```

use moorage_core::pos::{BlockPos, Rotation};
use serde::{Deserialize, Serialize};
use std::ops::Range;

pub mod anchor;
pub mod validate;

pub use anchor::{Anchor, AnchorOffsets, resolve_anchor};
#[cfg(feature = "parallel")]
pub use validate::validate_footprint_par;
pub use validate::{
    CLEARANCE_HEIGHT, PlacementError, PlacementErrorKind, SURFACE_OFFSET, can_place_ship,
    validate_footprint,
};

/// Largest accepted footprint extent along either axis.
pub const MAX_EXTENT: u32 = 4096;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Errors from spatial operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpatialError {
    #[error("footprint must be at least 1x1, got {width}x{depth}")]
    ZeroExtent { width: u32, depth: u32 },

    #[error("footprint {width}x{depth} exceeds the maximum extent of {max}", max = MAX_EXTENT)]
    TooLarge { width: u32, depth: u32 },
}

/// Horizontal extent of a structure: `width` along x, `depth` along z.
///
/// Both extents are in `1..=MAX_EXTENT`; the constructor and deserialization
/// reject anything else, so a scan never sees a degenerate footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FootprintData")]
pub struct FootprintSize {
    width: u32,
    depth: u32,
}

#[derive(Deserialize)]
struct FootprintData {
    width: u32,
    depth: u32,
}

impl TryFrom<FootprintData> for FootprintSize {
    type Error = SpatialError;

    fn try_from(data: FootprintData) -> Result<Self, Self::Error> {
        FootprintSize::new(data.width, data.depth)
    }
}

impl FootprintSize {
    /// Footprint of the supply ship template in its unrotated orientation.
    pub const SUPPLY_SHIP: FootprintSize = FootprintSize {
        width: 32,
        depth: 20,
    };

    pub fn new(width: u32, depth: u32) -> Result<Self, SpatialError> {
        if width == 0 || depth == 0 {
            return Err(SpatialError::ZeroExtent { width, depth });
        }
        if width > MAX_EXTENT || depth > MAX_EXTENT {
            return Err(SpatialError::TooLarge { width, depth });
        }
        Ok(Self { width, depth })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Return a new footprint rotated by the given rotation.
    /// For 90/270 degrees, width and depth are swapped.
    pub fn rotated(&self, rotation: Rotation) -> Self {
        if rotation.swaps_axes() {
            Self {
                width: self.depth,
                depth: self.width,
            }
        } else {
            *self
        }
    }

    /// Scanned x coordinates around `anchor`, before wrapping.
    ///
    /// The range runs from `anchor.x - width/2 + 1` to `anchor.x + width/2`
    /// inclusive. Odd widths lose one column to the integer division.
    pub fn x_range(&self, anchor: BlockPos) -> Range<i64> {
        shifted(anchor.x, centered_offsets(self.width))
    }

    /// Scanned z coordinates around `anchor`. Same rule as [`Self::x_range`].
    pub fn z_range(&self, anchor: BlockPos) -> Range<i64> {
        shifted(anchor.z, centered_offsets(self.depth))
    }

    /// Every scanned `(x, z)` column in scan order: z ascending, then x
    /// ascending within each z. Columns past the `i32` bounds wrap, matching
    /// [`BlockPos::offset`].
    pub fn columns(self, anchor: BlockPos) -> impl Iterator<Item = (i32, i32)> {
        let dxs = centered_offsets(self.width);
        centered_offsets(self.depth).flat_map(move |dz| {
            dxs.clone()
                .map(move |dx| (anchor.x.wrapping_add(dx), anchor.z.wrapping_add(dz)))
        })
    }

    /// Number of columns [`Self::columns`] yields.
    pub fn column_count(&self) -> usize {
        centered_offsets(self.width).len() * centered_offsets(self.depth).len()
    }
}

/// Offsets from the anchor covered along one axis. `extent` is at most
/// [`MAX_EXTENT`], so the bounds fit in `i32`.
fn centered_offsets(extent: u32) -> Range<i32> {
    let half = (extent / 2) as i32;
    (1 - half)..(half + 1)
}

fn shifted(center: i32, offsets: Range<i32>) -> Range<i64> {
    let center = i64::from(center);
    (center + i64::from(offsets.start))..(center + i64::from(offsets.end))
}
