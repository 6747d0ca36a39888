// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in two-storey villa plan
//!
//! The dimension strings are carried verbatim from the architectural
//! drawing's room schedule, typographic quotes and all. Rooms without a
//! placement rule are present in the table but never emitted; the
//! placement set covers the rooms the reference layout actually draws.

use boxplan_core::{Floor, FloorPlan, RoomSpec};

use crate::generator::generate_building;
use crate::types::{
    placement_table, GeneratedBuilding, LayoutConfig, PlacementRule, PlacementTable,
};

/// The villa's two-floor room table
pub fn villa_plan() -> FloorPlan {
    let ground = Floor::new("groundFloor", "10 feet")
        .with_room(RoomSpec::new("garage").with_dimensions("2 cars"))
        // The drawing leaves the foyer undimensioned; 15 x 20 is the
        // footprint the reference layout always used for it
        .with_room(RoomSpec::new("foyer").with_dimensions("15' - 0\" x 20' - 0\""))
        .with_room(
            RoomSpec::new("drawingRoom")
                .with_dimensions("17.9' x 12'")
                .with_height("double height (14')"),
        )
        .with_room(RoomSpec::new("kitchen").with_dimensions("10' - 3\" x 12' - 7.5\""))
        .with_room(RoomSpec::new("kitchenDining").with_dimensions("14' - 9\" x 10' - 4.5\""))
        .with_room(RoomSpec::new("lounge").with_dimensions("8' - 3\" x 14' - 3\""))
        .with_room(RoomSpec::new("store").with_dimensions("7' - 9\" x 5' - 0\""))
        .with_room(RoomSpec::new("servant").with_dimensions("7' - 9\" x 6' - 0\""))
        .with_room(RoomSpec::new("homeTheater").with_dimensions("13' - 4\" x 19' - 4\""))
        .with_room(RoomSpec::new("poolDeck").with_dimensions("8' - 3\" x 12' - 4.5\""))
        .with_room(RoomSpec::new("swimmingPool").with_dimensions("9' - 0\" x 18' - 0\""))
        .with_room(RoomSpec::new("openBar").with_dimensions("9' - 9\" x 8' - 4.5\""))
        .with_room(RoomSpec::new("barCounter"))
        .with_room(RoomSpec::new("power"))
        .with_room(RoomSpec::new("toilet").with_dimensions("7' - 6\" x 4' - 6\""))
        .with_room(RoomSpec::new("sitOut").with_dimensions("9' - 0\" x 8' - 9\""))
        .with_room(RoomSpec::new("garden").with_dimensions("9' - 0\" x 8' - 6\""))
        .with_room(RoomSpec::new("lift").with_dimensions("5' - 0\" x 5' - 0\""));

    let second = Floor::new("secondFloor", "10 feet")
        .with_room(RoomSpec::new("masterBedroom").with_dimensions("21' - 9\" x 14' - 0\""))
        .with_room(RoomSpec::new("dress").with_dimensions("9' - 0\" x 7' - 9\""))
        .with_room(RoomSpec::new("toilet1").with_dimensions("9' - 0\" x 5' - 6\""))
        .with_room(RoomSpec::new("secondBedroom").with_dimensions("16' - 0\" x 12' - 1.5\""))
        .with_room(
            RoomSpec::new("livingRoomOrOptionalBedroom")
                .with_dimensions("21' - 9\" x 12' - 0\""),
        )
        .with_room(RoomSpec::new("puja"))
        .with_room(RoomSpec::new("openTerrace").with_dimensions("9' - 0\" x 12' - 0\""))
        .with_room(RoomSpec::new("coveredTerrace").with_dimensions("9' - 0\" x 12' - 10.5\""))
        .with_room(RoomSpec::new("walkInCloset").with_dimensions("7' - 9\" x 5' - 0\""))
        .with_room(RoomSpec::new("toilet2").with_dimensions("5' - 4\" x 7' - 6\""));

    FloorPlan::new().with_floor(ground).with_floor(second)
}

/// Placement rules for the rooms the reference layout draws
pub fn villa_placements() -> PlacementTable {
    placement_table([
        // Ground floor
        ("foyer", PlacementRule::new(0.0, 0.0, 0.0)),
        ("drawingRoom", PlacementRule::new(20.0, 0.0, 0.0)),
        ("kitchenDining", PlacementRule::new(10.0, 0.0, -25.0)),
        ("swimmingPool", PlacementRule::new(35.0, 0.0, 5.0)),
        ("poolDeck", PlacementRule::new(30.0, 0.0, -5.0)),
        // Second floor
        ("masterBedroom", PlacementRule::new(0.0, 0.0, 0.0)),
        ("secondBedroom", PlacementRule::new(-20.0, 0.0, 0.0)),
        (
            "livingRoomOrOptionalBedroom",
            PlacementRule::new(20.0, 0.0, 0.0),
        ),
        ("openTerrace", PlacementRule::new(15.0, 0.0, -30.0)),
    ])
}

/// Layout configuration for the villa: the swimming pool is the one
/// room realized as a sunken basin
pub fn villa_config() -> LayoutConfig {
    LayoutConfig {
        pool_room: Some("swimmingPool".to_string()),
        ..Default::default()
    }
}

/// Generate the complete villa
pub fn generate_villa() -> GeneratedBuilding {
    generate_building(&villa_plan(), &villa_placements(), &villa_config()).unwrap()
}
