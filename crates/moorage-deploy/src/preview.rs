//! Interfaces to the interactive side: the placement preview and the
//! channel used to tell an actor why nothing happened.

use moorage_core::id::ActorId;
use moorage_core::pos::{BlockPos, Rotation};
use serde::{Deserialize, Serialize};

/// Message key sent when deploying outside the home dimension is refused.
/// Translation happens on the receiving side.
pub const CANT_PLACE_IN_OTHER_DIMENSION: &str = "moorage.deploy.cant_place_in_other_dimension";

/// What the placement preview should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Structure template name.
    pub structure: String,
    /// Suggested anchor. `None` lets the actor pick freely.
    pub anchor: Option<BlockPos>,
    pub rotation: Rotation,
}

/// The interactive placement preview (ghost structure plus confirm controls).
pub trait BuildPreview {
    fn open(&mut self, request: PreviewRequest);
}

/// Delivers a message key to an actor.
pub trait Messenger {
    fn send(&mut self, actor: ActorId, key: &'static str);
}
