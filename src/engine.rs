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

//! Booking engine.
//!
//! The [`Engine`] ties the catalog and the booking queue together and is the
//! single entry point the CLI talks to:
//!
//! - **Search**: list trains on a route with their current seat counts.
//! - **Book**: validate a request and place it at the tail of the queue.
//! - **Settle**: drain the queue and apply each request to the catalog.
//!
//! # Concurrency
//!
//! The engine can be shared between threads. Queue operations are atomic,
//! each train's seat counter has its own lock, and settlement passes are
//! serialized so the catalog only ever has one writer.

use crate::base::TrainIndex;
use crate::booking_queue::{BookingQueue, DEFAULT_QUEUE_CAPACITY};
use crate::catalog::Catalog;
use crate::error::BookingError;
use crate::request::BookingRequest;
use crate::settlement::{self, SettlementReport};
use crate::train::RouteMatch;
use parking_lot::Mutex;
use tracing::debug;

/// Application context owning the catalog and the booking queue.
///
/// # Invariants
///
/// - Every queued request names a train that exists in the catalog.
/// - Requests are settled in the order they were booked.
/// - At most one settlement pass runs at a time.
#[derive(Debug)]
pub struct Engine {
    catalog: Catalog,
    queue: BookingQueue,
    /// Held for the duration of a settlement pass.
    settlement: Mutex<()>,
}

impl Engine {
    /// Creates an engine over `catalog` with a queue of `queue_capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `queue_capacity` is zero.
    pub fn new(catalog: Catalog, queue_capacity: usize) -> Self {
        Engine {
            catalog,
            queue: BookingQueue::new(queue_capacity),
            settlement: Mutex::new(()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn queue(&self) -> &BookingQueue {
        &self.queue
    }

    /// Trains running from `source` to `destination`, in catalog order.
    pub fn search<'a>(
        &'a self,
        source: &'a str,
        destination: &'a str,
    ) -> impl Iterator<Item = RouteMatch> + 'a {
        self.catalog.find_by_route(source, destination)
    }

    /// Queues a booking request for the next settlement pass.
    ///
    /// # Errors
    ///
    /// - [`BookingError::InvalidTrainIndex`] - `train` is not in the catalog.
    /// - [`BookingError::EmptyRequester`] - `requester` is blank.
    /// - [`BookingError::InvalidSeatCount`] - `seats` is zero.
    /// - [`BookingError::QueueFull`] - the queue has no free slot.
    pub fn book(&self, requester: &str, train: TrainIndex, seats: u32) -> Result<(), BookingError> {
        if !self.catalog.contains(train) {
            return Err(BookingError::InvalidTrainIndex {
                index: train,
                len: self.catalog.len(),
            });
        }
        let request = BookingRequest::new(requester, train, seats)?;
        self.queue.enqueue(request)?;
        debug!(requester, train = train.number(), seats, "booking accepted for settlement");
        Ok(())
    }

    /// Settles every request queued when the call starts.
    ///
    /// A second caller blocks until the running pass has finished.
    pub fn settle(&self) -> SettlementReport {
        let _pass = self.settlement.lock();
        settlement::settle(&self.queue, &self.catalog)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Catalog::sample(), DEFAULT_QUEUE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_rejects_unknown_train_without_queueing() {
        let engine = Engine::default();
        assert_eq!(
            engine.book("alice", TrainIndex(5), 1),
            Err(BookingError::InvalidTrainIndex {
                index: TrainIndex(5),
                len: 5
            })
        );
        assert!(engine.queue().is_empty());
    }

    #[test]
    fn book_rejects_zero_seats_without_queueing() {
        let engine = Engine::default();
        assert_eq!(
            engine.book("alice", TrainIndex(0), 0),
            Err(BookingError::InvalidSeatCount)
        );
        assert!(engine.queue().is_empty());
    }

    #[test]
    fn settle_applies_queue_to_catalog() {
        let engine = Engine::default();
        engine.book("alice", TrainIndex(1), 30).unwrap();
        let report = engine.settle();
        assert_eq!(report.accepted().count(), 1);
        assert_eq!(engine.catalog().seats_available(TrainIndex(1)), Some(0));
    }
}
