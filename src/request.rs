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

//! Booking requests waiting for settlement.

use crate::base::TrainIndex;
use crate::error::BookingError;
use serde::Serialize;

/// A request to book `seats` seats on one train.
///
/// Construction rejects a blank requester and a zero seat count. Whether
/// the train index exists is checked against the catalog at intake, see
/// [`Engine::book`](crate::Engine::book).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    requester: String,
    train: TrainIndex,
    seats: u32,
}

impl BookingRequest {
    /// Creates a validated booking request.
    ///
    /// # Errors
    ///
    /// - [`BookingError::EmptyRequester`] - `requester` is empty or whitespace.
    /// - [`BookingError::InvalidSeatCount`] - `seats` is zero.
    pub fn new(
        requester: impl Into<String>,
        train: TrainIndex,
        seats: u32,
    ) -> Result<Self, BookingError> {
        let requester = requester.into();
        if requester.trim().is_empty() {
            return Err(BookingError::EmptyRequester);
        }
        if seats == 0 {
            return Err(BookingError::InvalidSeatCount);
        }
        Ok(Self {
            requester,
            train,
            seats,
        })
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn train(&self) -> TrainIndex {
        self.train
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }
}
