// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan data model
//!
//! A plan is an ordered stack of floors; each floor carries its rooms in
//! declaration order plus a wall-height string. The table is read-only
//! configuration data; dimensions are resolved on demand, never cached.

use serde::{Deserialize, Serialize};

use crate::dimension::{parse_dimensions, parse_length, Dimension};
use crate::error::Result;

/// A single room entry in a floor table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Room name, unique within its floor
    pub name: String,
    /// Footprint as a width x depth string, e.g. `17' - 9" x 12' - 0"`.
    /// Rooms without one are not yet placeable.
    pub dimensions: Option<String>,
    /// Height override, e.g. `double height (14')`. Absent means the
    /// floor's wall height applies.
    pub height: Option<String>,
}

impl RoomSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimensions: None,
            height: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Resolve the footprint, if a dimension string is present.
    ///
    /// `None` means "no dimension declared" (skip, not an error); `Some(Err)`
    /// means the string exists but does not parse.
    pub fn resolve_dimensions(&self) -> Option<Result<Dimension>> {
        self.dimensions.as_deref().map(parse_dimensions)
    }

    /// Resolve the height override in feet, if one is declared
    pub fn resolve_height(&self) -> Option<Result<f64>> {
        self.height.as_deref().map(parse_length)
    }
}

/// One storey of a plan: rooms in declaration order plus wall height
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub name: String,
    pub rooms: Vec<RoomSpec>,
    /// Wall height string, e.g. `10 feet`
    pub wall_height: String,
}

impl Floor {
    pub fn new(name: impl Into<String>, wall_height: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            wall_height: wall_height.into(),
        }
    }

    pub fn with_room(mut self, room: RoomSpec) -> Self {
        self.rooms.push(room);
        self
    }

    /// Look up a room by name
    pub fn room(&self, name: &str) -> Option<&RoomSpec> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Wall height in feet
    pub fn wall_height_ft(&self) -> Result<f64> {
        parse_length(&self.wall_height)
    }
}

/// A complete plan: floors ordered bottom to top
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorPlan {
    pub floors: Vec<Floor>,
}

impl FloorPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floor(mut self, floor: Floor) -> Self {
        self.floors.push(floor);
        self
    }

    pub fn floor(&self, name: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.name == name)
    }

    /// Base elevation of floor `index`: the sum of wall heights below it
    pub fn elevation_of(&self, index: usize) -> Result<f64> {
        let mut elevation = 0.0;
        for floor in self.floors.iter().take(index) {
            elevation += floor.wall_height_ft()?;
        }
        Ok(elevation)
    }

    /// Total stacked height of all floors
    pub fn total_height(&self) -> Result<f64> {
        self.elevation_of(self.floors.len())
    }
}
