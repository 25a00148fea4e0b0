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

//! Train records and route search results.

use crate::base::TrainIndex;
use serde::{Deserialize, Serialize};

/// A train as it appears in the catalog seed.
///
/// Deserializes from `name,source,destination,seats` rows; the seat column
/// may also be spelled `seats_available`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Train {
    pub name: String,
    pub source: String,
    pub destination: String,
    #[serde(alias = "seats")]
    pub seats_available: u32,
}

impl Train {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        seats_available: u32,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
            seats_available,
        }
    }

    /// Returns true if the train runs from `source` to `destination`.
    ///
    /// Station names are compared exactly, including case.
    pub fn serves(&self, source: &str, destination: &str) -> bool {
        self.source == source && self.destination == destination
    }
}

/// One row of a route search: where the train sits in the catalog and how
/// many seats it had when the row was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub index: TrainIndex,
    pub name: String,
    pub seats_available: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_matches_exact_route_only() {
        let train = Train::new("Express 101", "CityA", "CityB", 50);
        assert!(train.serves("CityA", "CityB"));
        assert!(!train.serves("CityB", "CityA"));
        assert!(!train.serves("citya", "cityb"));
    }
}
