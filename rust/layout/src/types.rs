// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for box primitive generation

use nalgebra::Point3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A 3D point (simplified for serialization)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(p: &Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// Primitive classification, used by renderers to key materials
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    RoomVolume,
    WallSegment,
    FloorSlab,
    CeilingSlab,
    PoolBasin,
}

impl PrimitiveKind {
    /// Every kind, in a stable order for deterministic iteration
    pub const ALL: [PrimitiveKind; 5] = [
        PrimitiveKind::RoomVolume,
        PrimitiveKind::WallSegment,
        PrimitiveKind::FloorSlab,
        PrimitiveKind::CeilingSlab,
        PrimitiveKind::PoolBasin,
    ];

    /// Stable lowercase label, used for OBJ material names
    pub fn label(&self) -> &'static str {
        match self {
            PrimitiveKind::RoomVolume => "room",
            PrimitiveKind::WallSegment => "wall",
            PrimitiveKind::FloorSlab => "floor",
            PrimitiveKind::CeilingSlab => "ceiling",
            PrimitiveKind::PoolBasin => "pool",
        }
    }
}

/// An axis-aligned box with world-space extents and center.
///
/// The sole output unit of the layout core; a rendering collaborator
/// realizes each primitive as a mesh and keys its material off `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Name of the emitting element, e.g. `kitchen_wallFront`
    pub name: String,
    pub kind: PrimitiveKind,
    /// Extent along x
    pub width: f64,
    /// Extent along y (vertical)
    pub height: f64,
    /// Extent along z
    pub depth: f64,
    /// World-space center
    pub center: Point3D,
}

impl Primitive {
    pub fn new(
        name: impl Into<String>,
        kind: PrimitiveKind,
        width: f64,
        height: f64,
        depth: f64,
        center: Point3D,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            width,
            height,
            depth,
            center,
        }
    }

    /// Minimum corner of the box
    pub fn min_corner(&self) -> Point3D {
        Point3D::new(
            self.center.x - self.width / 2.0,
            self.center.y - self.height / 2.0,
            self.center.z - self.depth / 2.0,
        )
    }

    /// Maximum corner of the box
    pub fn max_corner(&self) -> Point3D {
        Point3D::new(
            self.center.x + self.width / 2.0,
            self.center.y + self.height / 2.0,
            self.center.z + self.depth / 2.0,
        )
    }
}

/// World-space center offset for a named room.
///
/// Placement is a second, independent input next to the floor table:
/// the table says what rooms exist, the rules say where they sit. A room
/// is emitted only when it has both a parseable dimension and a rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlacementRule {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PlacementRule {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Room name to placement rule lookup
pub type PlacementTable = FxHashMap<String, PlacementRule>;

/// Build a placement table from (room, rule) pairs; the last rule wins
/// per room name.
pub fn placement_table<I, S>(rules: I) -> PlacementTable
where
    I: IntoIterator<Item = (S, PlacementRule)>,
    S: Into<String>,
{
    rules
        .into_iter()
        .map(|(name, rule)| (name.into(), rule))
        .collect()
}

/// Configuration for primitive generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Wall thickness in layout units
    pub wall_thickness: f64,
    /// Floor and ceiling slab thickness
    pub slab_thickness: f64,
    /// Basin depth for the pool room
    pub pool_depth: f64,
    /// Room realized as a pool basin instead of an enclosed room
    pub pool_room: Option<String>,
    /// Also emit one `RoomVolume` box per enclosed room (off by default;
    /// renderers that shade interiors want these, wireframe viewers do not)
    pub emit_room_volumes: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 0.5,
            slab_thickness: 0.2,
            pool_depth: 5.0,
            pool_room: None,
            emit_room_volumes: false,
        }
    }
}

/// Why a room contributed no primitives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SkipReason {
    /// No dimension string declared
    MissingDimension,
    /// No placement rule for the room
    MissingPlacement,
    /// Dimension string failed the feet-inches grammar
    MalformedDimension { text: String },
}

/// A room omitted from the output, with the reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkippedRoom {
    pub room: String,
    pub reason: SkipReason,
}

/// Primitives generated for one floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFloor {
    pub name: String,
    /// Base elevation of the floor plane
    pub elevation: f64,
    /// Wall height in feet
    pub wall_height: f64,
    pub primitives: Vec<Primitive>,
    /// Rooms omitted from this floor
    pub skipped: Vec<SkippedRoom>,
}

/// Bounds of the generated layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

impl LayoutBounds {
    /// Empty bounds, the identity for `expand`
    pub fn empty() -> Self {
        Self {
            min_x: f64::MAX,
            min_y: f64::MAX,
            min_z: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
            max_z: f64::MIN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Grow to cover `primitive`
    pub fn expand(&mut self, primitive: &Primitive) {
        let min = primitive.min_corner();
        let max = primitive.max_corner();
        self.min_x = self.min_x.min(min.x);
        self.min_y = self.min_y.min(min.y);
        self.min_z = self.min_z.min(min.z);
        self.max_x = self.max_x.max(max.x);
        self.max_y = self.max_y.max(max.y);
        self.max_z = self.max_z.max(max.z);
    }
}

/// Generated building: stacked floors plus overall extents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBuilding {
    /// Total stacked height in feet
    pub total_height: f64,
    pub bounds: LayoutBounds,
    pub floors: Vec<GeneratedFloor>,
}

impl GeneratedBuilding {
    /// Iterate over every primitive across all floors
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.floors.iter().flat_map(|f| f.primitives.iter())
    }

    /// Total primitive count
    pub fn primitive_count(&self) -> usize {
        self.floors.iter().map(|f| f.primitives.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let p = Primitive::new(
            "den",
            PrimitiveKind::RoomVolume,
            10.0,
            8.0,
            6.0,
            Point3D::new(1.0, 4.0, -2.0),
        );
        assert_eq!(p.min_corner(), Point3D::new(-4.0, 0.0, -5.0));
        assert_eq!(p.max_corner(), Point3D::new(6.0, 8.0, 1.0));
    }

    #[test]
    fn test_bounds_expand() {
        let mut bounds = LayoutBounds::empty();
        assert!(bounds.is_empty());

        bounds.expand(&Primitive::new(
            "a",
            PrimitiveKind::FloorSlab,
            2.0,
            2.0,
            2.0,
            Point3D::new(0.0, 0.0, 0.0),
        ));
        bounds.expand(&Primitive::new(
            "b",
            PrimitiveKind::FloorSlab,
            2.0,
            2.0,
            2.0,
            Point3D::new(5.0, 0.0, 0.0),
        ));

        assert!(!bounds.is_empty());
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 6.0);
    }

    #[test]
    fn test_placement_table_last_wins() {
        let table = placement_table([
            ("den", PlacementRule::new(0.0, 0.0, 0.0)),
            ("den", PlacementRule::new(5.0, 0.0, 0.0)),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table["den"].x, 5.0);
    }
}
