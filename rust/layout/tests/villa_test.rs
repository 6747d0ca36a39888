// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests over the built-in villa plan

use approx::assert_relative_eq;
use boxplan_layout::{
    generate_building, generate_villa, villa_config, villa_placements, villa_plan, MeshCollector,
    PrimitiveConsumer, PrimitiveKind, SkipReason,
};

#[test]
fn villa_is_two_stacked_floors() {
    let building = generate_villa();

    assert_eq!(building.floors.len(), 2);
    assert_relative_eq!(building.total_height, 20.0);
    assert_relative_eq!(building.floors[0].elevation, 0.0);
    assert_relative_eq!(building.floors[1].elevation, 10.0);
}

#[test]
fn each_placed_room_contributes_a_full_enclosure() {
    let building = generate_villa();

    for floor in &building.floors {
        let walls = floor
            .primitives
            .iter()
            .filter(|p| p.kind == PrimitiveKind::WallSegment)
            .count();
        let floors = floor
            .primitives
            .iter()
            .filter(|p| p.kind == PrimitiveKind::FloorSlab)
            .count();
        let ceilings = floor
            .primitives
            .iter()
            .filter(|p| p.kind == PrimitiveKind::CeilingSlab)
            .count();

        // 4 walls and 2 slabs per enclosed room, nothing stray
        assert_eq!(walls, floors * 4);
        assert_eq!(floors, ceilings);
    }
}

#[test]
fn second_floor_is_offset_by_ground_wall_height() {
    let plan = villa_plan();
    let placements = villa_placements();
    let config = villa_config();
    let building = generate_building(&plan, &placements, &config).unwrap();

    // Re-run the second floor at ground level and compare
    let grounded =
        boxplan_layout::generate_floor(&plan.floors[1], &placements, 0.0, &config).unwrap();
    let second = &building.floors[1];

    assert_eq!(second.primitives.len(), grounded.primitives.len());
    for (elevated, ground) in second.primitives.iter().zip(&grounded.primitives) {
        assert_eq!(elevated.name, ground.name);
        assert_relative_eq!(elevated.center.y - ground.center.y, 10.0);
        assert_relative_eq!(elevated.center.x, ground.center.x);
        assert_relative_eq!(elevated.center.z, ground.center.z);
    }
}

#[test]
fn pool_is_a_single_sunken_basin() {
    let building = generate_villa();

    let pools: Vec<_> = building
        .primitives()
        .filter(|p| p.kind == PrimitiveKind::PoolBasin)
        .collect();
    assert_eq!(pools.len(), 1);

    let pool = pools[0];
    assert_eq!(pool.name, "swimmingPool");
    assert_relative_eq!(pool.width, 9.0);
    assert_relative_eq!(pool.depth, 18.0);
    assert_relative_eq!(pool.height, 5.0);
    // Top of the basin sits at the ground floor plane
    assert_relative_eq!(pool.max_corner().y, 0.0);
    // No walls or slabs carry the pool's name
    assert!(building
        .primitives()
        .all(|p| p.kind == PrimitiveKind::PoolBasin || !p.name.starts_with("swimmingPool")));
}

#[test]
fn double_height_drawing_room() {
    let building = generate_villa();

    let ceiling = building
        .primitives()
        .find(|p| p.name == "drawingRoom_ceiling")
        .unwrap();
    assert_relative_eq!(ceiling.center.y, 14.0);

    let wall = building
        .primitives()
        .find(|p| p.name == "drawingRoom_wallFront")
        .unwrap();
    assert_relative_eq!(wall.height, 14.0);
}

#[test]
fn unplaced_rooms_are_reported_not_fatal() {
    let building = generate_villa();

    let ground = &building.floors[0];
    let lift = ground.skipped.iter().find(|s| s.room == "lift").unwrap();
    assert_eq!(lift.reason, SkipReason::MissingPlacement);

    // barCounter has neither dimensions nor placement; the missing
    // dimension is what makes it unplaceable
    let bar = ground
        .skipped
        .iter()
        .find(|s| s.room == "barCounter")
        .unwrap();
    assert_eq!(bar.reason, SkipReason::MissingDimension);
}

#[test]
fn generation_is_idempotent() {
    let a = generate_villa();
    let b = generate_villa();
    assert_eq!(a, b);
}

#[test]
fn bounds_cover_every_primitive() {
    let building = generate_villa();

    for primitive in building.primitives() {
        assert!(primitive.min_corner().x >= building.bounds.min_x);
        assert!(primitive.min_corner().y >= building.bounds.min_y);
        assert!(primitive.min_corner().z >= building.bounds.min_z);
        assert!(primitive.max_corner().x <= building.bounds.max_x);
        assert!(primitive.max_corner().y <= building.bounds.max_y);
        assert!(primitive.max_corner().z <= building.bounds.max_z);
    }
}

#[test]
fn collector_realizes_whole_building() {
    let building = generate_villa();

    let mut collector = MeshCollector::new();
    collector.consume_all(building.primitives());

    assert_eq!(collector.primitive_count(), building.primitive_count());

    let expected_tris: usize = building.primitive_count() * 12;
    let total_tris: usize = collector
        .kinds()
        .map(|k| collector.mesh(k).unwrap().triangle_count())
        .sum();
    assert_eq!(total_tris, expected_tris);

    // Pool mesh is exactly one box
    let pool = collector.mesh(PrimitiveKind::PoolBasin).unwrap();
    assert_eq!(pool.vertex_count(), 24);
}
