// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for layout generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during layout generation.
///
/// Per-room problems (missing or malformed dimensions, missing placement
/// rules) are never errors; they degrade to skipped rooms so a partially
/// malformed table still yields a best-effort building. Only defects
/// that poison a whole floor or the whole pass surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Floor plan has no floors")]
    EmptyPlan,

    #[error("Unparseable wall height {text:?} for floor {floor}")]
    WallHeight {
        floor: String,
        text: String,
        #[source]
        source: boxplan_core::Error,
    },
}
