//! Criterion benchmarks for footprint validation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use moorage_core::pos::{BlockPos, Direction};
use moorage_core::test_utils::{AllowAll, DenyAll, captain, open_sea};
use moorage_core::world::VoxelWorld;
use moorage_spatial::{FootprintSize, resolve_anchor, validate_footprint};

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.sample_size(50);

    let anchor = resolve_anchor(BlockPos::new(0, 62, 0), Direction::North);
    let sea = open_sea(anchor.position.y + 2);
    let land = VoxelWorld::new();
    let size = FootprintSize::SUPPLY_SHIP.rotated(anchor.rotation);

    // Benchmark: legal placement, no errors collected.
    group.bench_function("supply_ship_legal", |b| {
        b.iter(|| {
            validate_footprint(
                black_box(&sea),
                &AllowAll,
                black_box(anchor.position),
                size,
                captain(),
            )
        });
    });

    // Benchmark: every surface tile fails both rules.
    group.bench_function("supply_ship_all_violations", |b| {
        b.iter(|| {
            validate_footprint(
                black_box(&land),
                &DenyAll,
                black_box(anchor.position),
                size,
                captain(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
