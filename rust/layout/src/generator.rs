// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box primitive generation from floor plan tables
//!
//! A pure transform: given a floor table, a placement table and a config,
//! emit an ordered sequence of axis-aligned box primitives. Identical
//! inputs always yield identical output; nothing is cached or mutated.

use boxplan_core::{Dimension, Floor, FloorPlan};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{
    GeneratedBuilding, GeneratedFloor, LayoutBounds, LayoutConfig, PlacementRule, PlacementTable,
    Point3D, Primitive, PrimitiveKind, SkipReason, SkippedRoom,
};

/// Generate primitives for a whole plan, floors stacked bottom to top.
///
/// Floor N's base elevation is the sum of the wall heights below it. A
/// malformed *wall height* is a hard error since every elevation above
/// depends on it; per-room defects only skip the room.
pub fn generate_building(
    plan: &FloorPlan,
    placements: &PlacementTable,
    config: &LayoutConfig,
) -> Result<GeneratedBuilding> {
    if plan.floors.is_empty() {
        return Err(Error::EmptyPlan);
    }

    let mut floors = Vec::with_capacity(plan.floors.len());
    let mut bounds = LayoutBounds::empty();
    let mut elevation = 0.0;

    for floor in &plan.floors {
        let generated = generate_floor(floor, placements, elevation, config)?;
        for primitive in &generated.primitives {
            bounds.expand(primitive);
        }
        elevation += generated.wall_height;
        floors.push(generated);
    }

    debug!(
        floors = floors.len(),
        total_height = elevation,
        "building generation complete"
    );

    Ok(GeneratedBuilding {
        total_height: elevation,
        bounds,
        floors,
    })
}

/// Generate primitives for a single floor at the given base elevation.
///
/// Rooms are processed in declaration order. A room is emitted only when
/// it has both a parseable dimension and a placement rule; everything
/// else lands in `skipped` with a reason and the pass continues.
pub fn generate_floor(
    floor: &Floor,
    placements: &PlacementTable,
    elevation: f64,
    config: &LayoutConfig,
) -> Result<GeneratedFloor> {
    let wall_height = floor.wall_height_ft().map_err(|e| Error::WallHeight {
        floor: floor.name.clone(),
        text: floor.wall_height.clone(),
        source: e,
    })?;

    let mut primitives = Vec::new();
    let mut skipped = Vec::new();

    for room in &floor.rooms {
        let dimension = match room.resolve_dimensions() {
            None => {
                skipped.push(SkippedRoom {
                    room: room.name.clone(),
                    reason: SkipReason::MissingDimension,
                });
                continue;
            }
            Some(Err(e)) => {
                warn!(room = %room.name, error = %e, "skipping room with malformed dimensions");
                skipped.push(SkippedRoom {
                    room: room.name.clone(),
                    reason: SkipReason::MalformedDimension {
                        text: room.dimensions.clone().unwrap_or_default(),
                    },
                });
                continue;
            }
            Some(Ok(dim)) => dim,
        };

        let placement = match placements.get(&room.name) {
            None => {
                skipped.push(SkippedRoom {
                    room: room.name.clone(),
                    reason: SkipReason::MissingPlacement,
                });
                continue;
            }
            Some(rule) => *rule,
        };

        // Height override, e.g. a double-height drawing room. A broken
        // override degrades to the floor's wall height.
        let height = match room.resolve_height() {
            Some(Ok(h)) => h,
            Some(Err(e)) => {
                warn!(room = %room.name, error = %e, "unparseable height override, using wall height");
                wall_height
            }
            None => wall_height,
        };

        if config.pool_room.as_deref() == Some(room.name.as_str()) {
            primitives.push(pool_basin(&room.name, dimension, placement, elevation, config));
        } else {
            emit_room(
                &mut primitives,
                &room.name,
                dimension,
                height,
                placement,
                elevation,
                config,
            );
        }
    }

    debug!(
        floor = %floor.name,
        elevation,
        primitives = primitives.len(),
        skipped = skipped.len(),
        "floor generated"
    );

    Ok(GeneratedFloor {
        name: floor.name.clone(),
        elevation,
        wall_height,
        primitives,
        skipped,
    })
}

/// Emit the standard room set: floor slab, ceiling slab, four walls.
fn emit_room(
    out: &mut Vec<Primitive>,
    room: &str,
    dim: Dimension,
    height: f64,
    rule: PlacementRule,
    elevation: f64,
    config: &LayoutConfig,
) {
    let cx = rule.x;
    let cy = elevation + rule.y;
    let cz = rule.z;

    out.push(Primitive::new(
        format!("{room}_floor"),
        PrimitiveKind::FloorSlab,
        dim.width,
        config.slab_thickness,
        dim.depth,
        Point3D::new(cx, cy, cz),
    ));

    out.push(Primitive::new(
        format!("{room}_ceiling"),
        PrimitiveKind::CeilingSlab,
        dim.width,
        config.slab_thickness,
        dim.depth,
        Point3D::new(cx, cy + height, cz),
    ));

    out.extend(wall_segments(room, dim, height, cx, cy, cz, config.wall_thickness));

    if config.emit_room_volumes {
        out.push(Primitive::new(
            room,
            PrimitiveKind::RoomVolume,
            dim.width,
            height,
            dim.depth,
            Point3D::new(cx, cy + height / 2.0, cz),
        ));
    }
}

/// Four wall segments forming a closed rectangular perimeter.
///
/// Front/back walls span the full width plus both wall thicknesses so
/// the corners are covered; left/right walls span exactly the depth and
/// butt against them. The outer bounding box of the four segments is
/// `(width + 2t) x height x (depth + 2t)` centered on the room center.
/// Adjacent rooms get independent, possibly doubled walls; no shared
/// wall deduplication is attempted.
fn wall_segments(
    room: &str,
    dim: Dimension,
    height: f64,
    cx: f64,
    cy: f64,
    cz: f64,
    thickness: f64,
) -> Vec<Primitive> {
    let wall_cy = cy + height / 2.0;
    let span = dim.width + thickness * 2.0;

    vec![
        Primitive::new(
            format!("{room}_wallFront"),
            PrimitiveKind::WallSegment,
            span,
            height,
            thickness,
            Point3D::new(cx, wall_cy, cz - dim.depth / 2.0 - thickness / 2.0),
        ),
        Primitive::new(
            format!("{room}_wallBack"),
            PrimitiveKind::WallSegment,
            span,
            height,
            thickness,
            Point3D::new(cx, wall_cy, cz + dim.depth / 2.0 + thickness / 2.0),
        ),
        Primitive::new(
            format!("{room}_wallLeft"),
            PrimitiveKind::WallSegment,
            thickness,
            height,
            dim.depth,
            Point3D::new(cx - dim.width / 2.0 - thickness / 2.0, wall_cy, cz),
        ),
        Primitive::new(
            format!("{room}_wallRight"),
            PrimitiveKind::WallSegment,
            thickness,
            height,
            dim.depth,
            Point3D::new(cx + dim.width / 2.0 + thickness / 2.0, wall_cy, cz),
        ),
    ]
}

/// A pool basin: one sunken volume, no walls or slabs.
fn pool_basin(
    room: &str,
    dim: Dimension,
    rule: PlacementRule,
    elevation: f64,
    config: &LayoutConfig,
) -> Primitive {
    Primitive::new(
        room,
        PrimitiveKind::PoolBasin,
        dim.width,
        config.pool_depth,
        dim.depth,
        Point3D::new(
            rule.x,
            elevation + rule.y - config.pool_depth / 2.0,
            rule.z,
        ),
    )
}
