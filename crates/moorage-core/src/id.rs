use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Identifies a protected area in a [`crate::ownership::ProtectedAreas`] registry.
    pub struct AreaId;
}

/// Identifies an actor (player or automated placer). Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// Identifies a dimension (a separate voxel world sharing one server).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionId(pub i32);

impl DimensionId {
    /// The primary dimension. Structures are placed here unless configured otherwise.
    pub const OVERWORLD: DimensionId = DimensionId(0);
}
