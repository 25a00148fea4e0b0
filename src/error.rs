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

//! Error types for booking intake and queue operations.
//!
//! Running out of seats is not an error here: settlement reports it as a
//! [`RejectReason`](crate::RejectReason) on the affected record.

use crate::base::TrainIndex;
use thiserror::Error;

/// Booking errors.
///
/// Every variant is recoverable and is returned before any state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The queue already holds `capacity` requests
    #[error("booking queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    /// There is nothing to dequeue
    #[error("no bookings in the queue")]
    QueueEmpty,

    /// Train index outside the catalog
    #[error("invalid train selection {index} (catalog has {len} trains)")]
    InvalidTrainIndex { index: TrainIndex, len: usize },

    /// Zero seats requested
    #[error("invalid number of seats (must be positive)")]
    InvalidSeatCount,

    /// Requester name is empty or blank
    #[error("requester name must not be empty")]
    EmptyRequester,
}
