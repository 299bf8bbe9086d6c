//! Ownership queries and an in-memory registry of protected areas.
//!
//! A protected area claims every column within a horizontal Chebyshev radius
//! of its center, at every height. Inside a claim only the owner and actors
//! granted the relevant [`Action`] may act.

use crate::id::{ActorId, AreaId};
use crate::pos::BlockPos;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Oracle
// ---------------------------------------------------------------------------

/// Answers whether an actor may place blocks at a position.
pub trait OwnershipOracle {
    fn may_place(&self, actor: ActorId, pos: BlockPos) -> bool;
}

impl<T: OwnershipOracle + ?Sized> OwnershipOracle for &T {
    fn may_place(&self, actor: ActorId, pos: BlockPos) -> bool {
        (**self).may_place(actor, pos)
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Something an actor can be permitted to do inside a protected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    PlaceBlocks,
    BreakBlocks,
}

/// A claimed region of the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedArea {
    pub name: String,
    pub owner: ActorId,
    pub center: BlockPos,
    /// Horizontal Chebyshev radius, in blocks.
    pub radius: u32,
    #[serde(default)]
    grants: BTreeMap<ActorId, BTreeSet<Action>>,
}

impl ProtectedArea {
    pub fn new(name: impl Into<String>, owner: ActorId, center: BlockPos, radius: u32) -> Self {
        Self {
            name: name.into(),
            owner,
            center,
            radius,
            grants: BTreeMap::new(),
        }
    }

    /// Whether this area claims the column containing `pos`.
    pub fn claims(&self, pos: BlockPos) -> bool {
        self.center.horizontal_chebyshev_distance(&pos) <= self.radius
    }

    /// Whether `actor` may perform `action` here. The owner may do anything.
    pub fn permits(&self, actor: ActorId, action: Action) -> bool {
        actor == self.owner
            || self
                .grants
                .get(&actor)
                .is_some_and(|actions| actions.contains(&action))
    }
}

// ---------------------------------------------------------------------------
// ProtectedAreas
// ---------------------------------------------------------------------------

/// Registry of protected areas, queried per tile during placement checks.
#[derive(Debug, Default)]
pub struct ProtectedAreas {
    areas: SlotMap<AreaId, ProtectedArea>,
    /// Registration order. The first registered claim wins on overlap.
    order: Vec<AreaId>,
}

impl ProtectedAreas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, area: ProtectedArea) -> AreaId {
        let id = self.areas.insert(area);
        self.order.push(id);
        id
    }

    pub fn remove(&mut self, id: AreaId) -> Option<ProtectedArea> {
        let area = self.areas.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(area)
    }

    pub fn get(&self, id: AreaId) -> Option<&ProtectedArea> {
        self.areas.get(id)
    }

    /// The area claiming the column at `pos`, if any.
    pub fn area_at(&self, pos: BlockPos) -> Option<AreaId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.areas.get(id).is_some_and(|area| area.claims(pos)))
    }

    /// Grant `action` to `actor` inside an area. Returns false if the area
    /// does not exist.
    pub fn grant(&mut self, id: AreaId, actor: ActorId, action: Action) -> bool {
        let Some(area) = self.areas.get_mut(id) else {
            return false;
        };
        area.grants.entry(actor).or_default().insert(action);
        true
    }

    /// Revoke a previously granted action. Returns whether a grant was removed.
    pub fn revoke(&mut self, id: AreaId, actor: ActorId, action: Action) -> bool {
        let Some(actions) = self
            .areas
            .get_mut(id)
            .and_then(|area| area.grants.get_mut(&actor))
        else {
            return false;
        };
        actions.remove(&action)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl OwnershipOracle for ProtectedAreas {
    fn may_place(&self, actor: ActorId, pos: BlockPos) -> bool {
        match self.area_at(pos).and_then(|id| self.areas.get(id)) {
            None => true,
            Some(area) => area.permits(actor, Action::PlaceBlocks),
        }
    }
}
