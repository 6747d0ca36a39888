// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Boxplan Core
//!
//! Imperial dimension parsing and the floor plan data model, built with
//! [nom](https://docs.rs/nom).
//!
//! ## Overview
//!
//! - **Dimension parsing**: feet-inches strings (`17' - 9"`), decimal
//!   feet (`17.9'`) and spelled-out feet (`10 feet`) resolved to decimal
//!   feet, including width x depth pairs.
//! - **Floor plan model**: rooms with optional dimension and height
//!   strings, floors with wall heights, stacked elevations.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxplan_core::{parse_dimensions, parse_length};
//!
//! let dim = parse_dimensions("17' - 9\" x 12' - 0\"").unwrap();
//! assert_eq!(dim.width, 17.75);
//! assert_eq!(dim.depth, 12.0);
//!
//! assert_eq!(parse_length("10 feet").unwrap(), 10.0);
//! ```
//!
//! Rooms without a dimension string are "not yet placeable" rather than
//! erroneous; a string that fails the grammar is a recoverable
//! [`Error::Malformed`] and downstream layers choose whether to skip the
//! room or abort.

pub mod dimension;
pub mod error;
pub mod floorplan;

pub use dimension::{parse_dimensions, parse_length, Dimension};
pub use error::{Error, Result};
pub use floorplan::{Floor, FloorPlan, RoomSpec};
