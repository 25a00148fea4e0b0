// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Core identifier types for the train catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a train in the catalog.
///
/// Wraps a zero-based `usize`. The catalog never grows or shrinks after
/// construction, so an index stays valid for the process lifetime once it
/// has been checked against [`Catalog::len`](crate::Catalog::len).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TrainIndex(pub usize);

impl TrainIndex {
    /// Converts a 1-based train number, as shown to users, into an index.
    ///
    /// Returns `None` for `0`.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(TrainIndex)
    }

    /// Returns the 1-based train number for display.
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for TrainIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::TrainIndex;

    #[test]
    fn number_round_trips_through_index() {
        assert_eq!(TrainIndex::from_number(1), Some(TrainIndex(0)));
        assert_eq!(TrainIndex::from_number(5).map(|i| i.number()), Some(5));
    }

    #[test]
    fn zero_is_not_a_train_number() {
        assert_eq!(TrainIndex::from_number(0), None);
    }
}
