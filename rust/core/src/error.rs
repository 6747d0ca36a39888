// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for dimension parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing dimension strings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No feet-inches quantity found in {text:?}")]
    Malformed { text: String },

    #[error("Expected a width x depth pair in {text:?}")]
    MissingSeparator { text: String },
}

impl Error {
    pub(crate) fn malformed(text: &str) -> Self {
        Error::Malformed {
            text: text.to_string(),
        }
    }
}
