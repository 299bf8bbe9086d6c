//! Moorage Core -- shared value types and world capabilities for structure
//! placement in a voxel world.
//!
//! Everything above this crate talks to the world through two narrow,
//! read-only capabilities:
//!
//! - [`world::WorldView`] -- "what kind of block is at this position?"
//! - [`ownership::OwnershipOracle`] -- "may this actor place blocks here?"
//!
//! Both are injected as parameters rather than reached through globals, so
//! placement logic stays deterministic and testable in isolation.
//!
//! # Key Types
//!
//! - [`pos::BlockPos`] -- Integer voxel coordinate with pure translation.
//! - [`pos::Direction`] -- The four horizontal facings.
//! - [`pos::Rotation`] -- Quarter turns applied to a structure template.
//! - [`world::VoxelWorld`] -- Sparse in-memory world (absent blocks are air).
//! - [`ownership::ProtectedAreas`] -- In-memory registry of claimed areas.

pub mod id;
pub mod ownership;
pub mod pos;
pub mod world;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
