//! Headless deploy: resolves a supply ship anchor on an open sea, confirms it,
//! then blocks the hull with a protected area and prints the rejection.
//!
//! Run with: `cargo run --package moorage-deploy --example headless_deploy`
//!
//! Set `RUST_LOG` to override the default log filter.

use moorage_core::id::{ActorId, DimensionId};
use moorage_core::ownership::{ProtectedArea, ProtectedAreas};
use moorage_core::pos::{BlockPos, Direction};
use moorage_core::world::{BlockKind, VoxelWorld};
use moorage_deploy::{
    BuildPreview, DeployError, PreviewRequest, SupplyShipDeployer, UseContext, UseOutcome,
};
use moorage_spatial::Anchor;
use tracing_subscriber::EnvFilter;

const SEA_LEVEL: i32 = 62;

struct PrintPreview;

impl BuildPreview for PrintPreview {
    fn open(&mut self, request: PreviewRequest) {
        println!(
            "preview: {} at {:?}, {} quarter turn(s)",
            request.structure,
            request.anchor,
            request.rotation.quarter_turns()
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("moorage_spatial=debug,moorage_deploy=debug,moorage_data=debug")
            }),
        )
        .init();

    let config_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../moorage-data/data");
    let deployer =
        SupplyShipDeployer::from_dir(config_dir).expect("failed to load deployer config");

    let mut world = VoxelWorld::new();
    world.fill(
        BlockPos::new(-128, SEA_LEVEL, -128),
        BlockPos::new(128, SEA_LEVEL, 128),
        BlockKind::Water,
    );

    let captain = ActorId(1);
    let ctx = UseContext {
        actor: captain,
        dimension: DimensionId::OVERWORLD,
        target: Some(BlockPos::new(0, SEA_LEVEL, 0)),
        facing: Direction::from_yaw(0.0),
    };

    let UseOutcome::PreviewOpened(request) = deployer.use_on_block(&ctx, &mut PrintPreview) else {
        println!("deploy blocked");
        return;
    };

    // Confirm exactly where the preview suggested.
    let Some(position) = request.anchor else {
        println!("preview opened without an anchor");
        return;
    };
    let anchor = Anchor {
        position,
        rotation: request.rotation,
    };

    let mut areas = ProtectedAreas::new();
    match deployer.confirm(&world, &areas, captain, DimensionId::OVERWORLD, anchor) {
        Ok(placement) => println!(
            "confirmed {} at {} ({}x{})",
            placement.structure,
            placement.anchor.position,
            placement.footprint.width(),
            placement.footprint.depth()
        ),
        Err(e) => println!("unexpected rejection: {e}"),
    }

    // Someone else claims the water where the hull would sit.
    areas.add(ProtectedArea::new("harbor", ActorId(2), anchor.position, 3));
    world.set(anchor.position.offset(0, 7, 0), BlockKind::Other);

    match deployer.confirm(&world, &areas, captain, DimensionId::OVERWORLD, anchor) {
        Ok(_) => println!("unexpectedly confirmed"),
        Err(DeployError::Rejected { errors }) => {
            println!("rejected with {} error(s):", errors.len());
            for error in &errors {
                println!("  {error}");
            }
        }
        Err(e) => println!("rejected: {e}"),
    }
}
