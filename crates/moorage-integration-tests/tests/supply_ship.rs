//! Integration test: supply ship deployment end to end.
//!
//! Drives the deployer the way game code would: use the item on a block,
//! take the anchor the preview suggests, and confirm it against a world and
//! a protected area registry. Covers config loading, rotation of the
//! footprint, ownership grants, and the ordering of rejection errors.

use moorage_core::id::DimensionId;
use moorage_core::ownership::{Action, ProtectedArea, ProtectedAreas};
use moorage_core::pos::{BlockPos, Direction, Rotation};
use moorage_core::test_utils::{self, captain, open_sea, stranger};
use moorage_core::world::BlockKind;
use moorage_data::DeployerConfig;
use moorage_data::loader::{Format, deserialize_str};
use moorage_deploy::{
    BuildPreview, DeployError, PreviewRequest, SupplyShipDeployer, UseContext, UseOutcome,
};
use moorage_spatial::{Anchor, FootprintSize, PlacementErrorKind, validate_footprint};
use std::path::Path;

const SEA_LEVEL: i32 = 62;

#[derive(Default)]
struct LastPreview(Option<PreviewRequest>);

impl BuildPreview for LastPreview {
    fn open(&mut self, request: PreviewRequest) {
        self.0 = Some(request);
    }
}

/// Use the deployer on `target` and return the anchor the preview suggested.
fn suggested_anchor(deployer: &SupplyShipDeployer, target: BlockPos, facing: Direction) -> Anchor {
    let ctx = UseContext {
        actor: captain(),
        dimension: DimensionId::OVERWORLD,
        target: Some(target),
        facing,
    };
    let mut preview = LastPreview::default();
    let outcome = deployer.use_on_block(&ctx, &mut preview);
    assert!(matches!(outcome, UseOutcome::PreviewOpened(_)));

    let request = preview.0.expect("preview was not opened");
    Anchor {
        position: request.anchor.expect("preview has no anchor"),
        rotation: request.rotation,
    }
}

fn bundled_deployer() -> SupplyShipDeployer {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../moorage-data/data");
    SupplyShipDeployer::from_dir(dir).unwrap()
}

// ---------------------------------------------------------------------------
// Legal placement
// ---------------------------------------------------------------------------

#[test]
fn supply_ship_deploys_on_open_sea_in_every_facing() {
    let deployer = bundled_deployer();
    let world = open_sea(SEA_LEVEL);
    let areas = ProtectedAreas::new();
    let target = BlockPos::new(0, SEA_LEVEL, 0);

    for facing in Direction::all() {
        let anchor = suggested_anchor(&deployer, target, facing);
        let placement = deployer
            .confirm(&world, &areas, captain(), DimensionId::OVERWORLD, anchor)
            .unwrap_or_else(|e| panic!("{facing:?}: {e}"));

        assert_eq!(placement.structure, "supplyship");
        assert_eq!(placement.anchor, anchor);
        assert_eq!(
            placement.footprint,
            FootprintSize::SUPPLY_SHIP.rotated(anchor.rotation)
        );
    }
}

#[test]
fn south_facing_scans_rotated_footprint() {
    let deployer = bundled_deployer();
    let anchor = suggested_anchor(&deployer, BlockPos::new(0, 64, 0), Direction::South);
    assert_eq!(anchor.position, BlockPos::new(5, 62, 14));
    assert_eq!(anchor.rotation, Rotation::Cw270);

    // Dry land everywhere: each scanned column fails the surface pass once.
    let world = moorage_core::world::VoxelWorld::new();
    let errors = deployer.check(&world, &ProtectedAreas::new(), captain(), anchor);
    let footprint = deployer.footprint_for(anchor.rotation);
    assert_eq!((footprint.width(), footprint.depth()), (20, 32));
    assert_eq!(errors.len(), 20 * 32);

    let xs = errors.iter().map(|e| e.pos.x);
    let zs = errors.iter().map(|e| e.pos.z);
    assert_eq!(xs.clone().min(), Some(5 - 10 + 1));
    assert_eq!(xs.max(), Some(5 + 10));
    assert_eq!(zs.clone().min(), Some(14 - 16 + 1));
    assert_eq!(zs.max(), Some(14 + 16));
    assert!(errors.iter().all(|e| e.pos.y == 64));
}

// ---------------------------------------------------------------------------
// Protected areas
// ---------------------------------------------------------------------------

#[test]
fn protected_area_blocks_until_granted() {
    let deployer = bundled_deployer();
    let world = open_sea(SEA_LEVEL);
    let anchor = suggested_anchor(&deployer, BlockPos::new(0, SEA_LEVEL, 0), Direction::West);

    let mut areas = ProtectedAreas::new();
    let harbor = areas.add(ProtectedArea::new("harbor", stranger(), anchor.position, 2));

    let err = deployer
        .confirm(&world, &areas, captain(), DimensionId::OVERWORLD, anchor)
        .unwrap_err();
    let errors = err.placement_errors();
    // A 5x5 claim entirely inside the hull.
    assert_eq!(errors.len(), 25);
    assert!(
        errors
            .iter()
            .all(|e| e.kind == PlacementErrorKind::InsideProtectedArea)
    );

    // The owner may always build in their own area.
    assert!(
        deployer
            .confirm(&world, &areas, stranger(), DimensionId::OVERWORLD, anchor)
            .is_ok()
    );

    assert!(areas.grant(harbor, captain(), Action::PlaceBlocks));
    assert!(
        deployer
            .confirm(&world, &areas, captain(), DimensionId::OVERWORLD, anchor)
            .is_ok()
    );

    assert!(areas.revoke(harbor, captain(), Action::PlaceBlocks));
    assert!(
        deployer
            .confirm(&world, &areas, captain(), DimensionId::OVERWORLD, anchor)
            .is_err()
    );
}

#[test]
fn break_grant_does_not_permit_placement() {
    let deployer = bundled_deployer();
    let world = open_sea(SEA_LEVEL);
    let anchor = suggested_anchor(&deployer, BlockPos::new(0, SEA_LEVEL, 0), Direction::North);

    let mut areas = ProtectedAreas::new();
    let dock = areas.add(ProtectedArea::new("dock", stranger(), anchor.position, 0));
    areas.grant(dock, captain(), Action::BreakBlocks);

    let err = deployer
        .confirm(&world, &areas, captain(), DimensionId::OVERWORLD, anchor)
        .unwrap_err();
    assert_eq!(err.placement_errors().len(), 1);
    assert_eq!(
        err.placement_errors()[0].pos,
        anchor.position.offset(0, 2, 0)
    );
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn ron_config_drives_deployer() {
    let input = r#"(
        allow_other_dimensions: true,
        structure: (
            name: "skiff",
            footprint: (width: 4, depth: 2),
            offsets: (distance: 3, lateral: 0, drop: -1),
        ),
    )"#;
    let config: DeployerConfig =
        deserialize_str(Format::Ron, input, Path::new("deployer.ron")).unwrap();
    let deployer = SupplyShipDeployer::new(config);

    let anchor = suggested_anchor(&deployer, BlockPos::new(10, SEA_LEVEL, 10), Direction::East);
    assert_eq!(anchor.position, BlockPos::new(13, SEA_LEVEL - 1, 10));
    assert_eq!(anchor.rotation, Rotation::Cw180);

    // Surface sits one above the reference block with this drop.
    let world = open_sea(SEA_LEVEL + 1);
    let placement = deployer
        .confirm(&world, &ProtectedAreas::new(), captain(), DimensionId(7), anchor)
        .unwrap();
    assert_eq!(placement.structure, "skiff");
    assert_eq!(placement.footprint, FootprintSize::new(4, 2).unwrap());
}

#[test]
fn dimension_gate_applies_to_confirm() {
    let deployer = bundled_deployer();
    let world = open_sea(SEA_LEVEL);
    let anchor = suggested_anchor(&deployer, BlockPos::new(0, SEA_LEVEL, 0), Direction::South);

    let err = deployer
        .confirm(&world, &ProtectedAreas::new(), captain(), DimensionId(1), anchor)
        .unwrap_err();
    assert!(matches!(err, DeployError::DimensionNotAllowed { .. }));
}

// ---------------------------------------------------------------------------
// Rejection ordering
// ---------------------------------------------------------------------------

#[test]
fn rejection_lists_surface_then_clearance_in_scan_order() {
    let mut config = DeployerConfig::default();
    config.structure.footprint = FootprintSize::new(8, 8).unwrap();
    let deployer = SupplyShipDeployer::new(config);

    let anchor = Anchor {
        position: BlockPos::new(0, SEA_LEVEL - 2, 0),
        rotation: Rotation::None,
    };
    let mut world = test_utils::sea(SEA_LEVEL, -20, 20, -20, 20);
    // Clearance violations early in scan order, surface violations late.
    world.set(BlockPos::new(-3, SEA_LEVEL + 5, -3), BlockKind::Other);
    world.set(BlockPos::new(4, SEA_LEVEL + 5, -3), BlockKind::Water);
    world.set(BlockPos::new(2, SEA_LEVEL, 4), BlockKind::Other);
    world.set(BlockPos::new(-1, SEA_LEVEL, 4), BlockKind::Air);

    let mut areas = ProtectedAreas::new();
    areas.add(ProtectedArea::new("buoy", stranger(), BlockPos::new(2, 0, 4), 0));

    let err = deployer
        .confirm(&world, &areas, captain(), DimensionId::OVERWORLD, anchor)
        .unwrap_err();
    let got: Vec<_> = err
        .placement_errors()
        .iter()
        .map(|e| (e.kind, e.pos.x, e.pos.y, e.pos.z))
        .collect();

    use PlacementErrorKind::*;
    assert_eq!(
        got,
        vec![
            (NotWater, -1, SEA_LEVEL, 4),
            (NotWater, 2, SEA_LEVEL, 4),
            (InsideProtectedArea, 2, SEA_LEVEL, 4),
            (NeedsAirAbove, -3, SEA_LEVEL + 5, -3),
            (NeedsAirAbove, 4, SEA_LEVEL + 5, -3),
        ]
    );

    // The deployer reports exactly what the validator finds.
    let direct = validate_footprint(
        &world,
        &areas,
        anchor.position,
        FootprintSize::new(8, 8).unwrap(),
        captain(),
    );
    assert_eq!(err.placement_errors(), direct.as_slice());
}
