// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};
use understory_dnd::navigation::{NextIndexArgs, move_to_next_index};
use understory_dnd::{
    Axis, BoxModel, DimensionMap, DragConfig, DraggableDescriptor, DraggableDimension,
    DraggableId, DropType, DroppableDescriptor, DroppableDimension, DroppableId, DroppableMode,
    ImpactArgs, UserDirection, Viewport, compute_impact, compute_lift_effect,
    resolve_droppable_over,
};

const ITEM: f64 = 40.0;

/// `columns` vertical lists of `rows` items each, side by side.
fn board(columns: u32, rows: u32) -> DimensionMap {
    let mut map = DimensionMap::new();
    for column in 0..columns {
        let x = f64::from(column) * 220.0;
        map.insert_droppable(DroppableDimension::new(
            DroppableDescriptor {
                id: DroppableId(column),
                drop_type: DropType::DEFAULT,
                mode: DroppableMode::Standard,
            },
            Axis::Vertical,
            BoxModel::from_border_box(Rect::new(x, 0.0, x + 200.0, f64::from(rows) * ITEM)),
            Vec2::ZERO,
        ));
        map.extend_draggables((0..rows).map(|row| {
            let y = f64::from(row) * ITEM;
            DraggableDimension::new(
                DraggableDescriptor {
                    id: DraggableId(column * rows + row),
                    index: row as usize,
                    droppable_id: DroppableId(column),
                    drop_type: DropType::DEFAULT,
                },
                BoxModel::from_border_box(Rect::new(x, y, x + 200.0, y + ITEM)),
                Vec2::ZERO,
            )
        }));
    }
    map
}

fn viewport() -> Viewport {
    Viewport::new(Rect::new(0.0, 0.0, 4000.0, 100_000.0), Vec2::ZERO)
}

fn bench_compute_impact(c: &mut Criterion) {
    let mut group = c.benchmark_group("dnd/compute_impact");

    for rows in [16_u32, 256, 2_048] {
        let map = board(4, rows);
        let viewport = viewport();
        let critical = DraggableId(0);
        let lift = compute_lift_effect(critical, &map, &viewport).expect("lift");
        let draggable = map.draggable(critical).expect("critical");
        let config = DragConfig::default();
        group.throughput(Throughput::Elements(u64::from(rows)));

        // Halfway down the home list.
        let page_offset = Vec2::new(0.0, f64::from(rows) * ITEM / 2.0);
        group.bench_with_input(BenchmarkId::new("home", rows), &page_offset, |b, offset| {
            b.iter(|| {
                black_box(compute_impact(&ImpactArgs {
                    page_offset: *offset,
                    draggable,
                    dimensions: &map,
                    previous_impact: &lift.impact,
                    viewport: &viewport,
                    after_critical: &lift.after_critical,
                    user_direction: UserDirection::default(),
                    config: &config,
                }))
            });
        });

        // Same depth in the neighboring list.
        let page_offset = Vec2::new(220.0, f64::from(rows) * ITEM / 2.0);
        group.bench_with_input(BenchmarkId::new("foreign", rows), &page_offset, |b, offset| {
            b.iter(|| {
                black_box(compute_impact(&ImpactArgs {
                    page_offset: *offset,
                    draggable,
                    dimensions: &map,
                    previous_impact: &lift.impact,
                    viewport: &viewport,
                    after_critical: &lift.after_critical,
                    user_direction: UserDirection::default(),
                    config: &config,
                }))
            });
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("dnd/resolve_droppable_over");

    for columns in [4_u32, 32, 256] {
        let map = board(columns, 4);
        let draggable = map.draggable(DraggableId(0)).expect("critical");
        let rect = draggable.page.border_box + Vec2::new(f64::from(columns / 2) * 220.0, 0.0);
        group.throughput(Throughput::Elements(u64::from(columns)));
        group.bench_with_input(BenchmarkId::from_parameter(columns), &rect, |b, rect| {
            b.iter(|| black_box(resolve_droppable_over(*rect, draggable, map.droppables())));
        });
    }

    group.finish();
}

fn bench_keyboard_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("dnd/move_to_next_index");

    for rows in [16_u32, 256, 2_048] {
        let map = board(1, rows);
        let viewport = viewport();
        let critical = DraggableId(0);
        let lift = compute_lift_effect(critical, &map, &viewport).expect("lift");
        let draggable = map.draggable(critical).expect("critical");
        let destination = map.droppable(DroppableId(0)).expect("home");
        group.bench_function(BenchmarkId::from_parameter(rows), |b| {
            b.iter(|| {
                black_box(move_to_next_index(&NextIndexArgs {
                    is_moving_forward: true,
                    draggable,
                    destination,
                    dimensions: &map,
                    previous_impact: &lift.impact,
                    previous_page_border_box_center: draggable.center(),
                    viewport: &viewport,
                    after_critical: &lift.after_critical,
                }))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_impact,
    bench_resolve,
    bench_keyboard_step
);
criterion_main!(benches);
