// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Boxplan Layout
//!
//! Box primitive generation from dimensioned floor plan tables.
//!
//! The pipeline is strictly one-way:
//!
//! 1. A [`FloorPlan`](boxplan_core::FloorPlan) table declares what rooms
//!    exist and how big they are (imperial dimension strings).
//! 2. A [`PlacementTable`] declares where placed rooms sit.
//! 3. [`generate_building`] turns both into an ordered sequence of
//!    [`Primitive`] boxes: four walls, a floor slab and a ceiling slab
//!    per room, plus a sunken basin for the pool room.
//! 4. A [`PrimitiveConsumer`] realizes the primitives; the built-in
//!    [`MeshCollector`] produces one triangle mesh per primitive kind.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxplan_layout::{generate_villa, MeshCollector, PrimitiveConsumer};
//!
//! let building = generate_villa();
//! assert_eq!(building.floors.len(), 2);
//!
//! let mut collector = MeshCollector::new();
//! collector.consume_all(building.primitives());
//! assert_eq!(collector.primitive_count(), building.primitive_count());
//! ```
//!
//! Rooms missing a dimension or a placement rule are skipped and
//! reported, never fatal; the layout is a best-effort rendering input,
//! not a validator.

pub mod error;
pub mod generator;
pub mod mesh;
pub mod types;
pub mod villa;

pub use error::{Error, Result};
pub use generator::{generate_building, generate_floor};
pub use mesh::{box_mesh, Mesh, MeshCollector, PrimitiveConsumer};
pub use types::{
    placement_table, GeneratedBuilding, GeneratedFloor, LayoutBounds, LayoutConfig, PlacementRule,
    PlacementTable, Point3D, Primitive, PrimitiveKind, SkipReason, SkippedRoom,
};
pub use villa::{generate_villa, villa_config, villa_placements, villa_plan};
