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

//! Bounded FIFO queue of pending booking requests.
//!
//! Requests are stored in a fixed ring of slots. The ring tracks its head and
//! an explicit element count, so "empty" (`len == 0`) and "full"
//! (`len == capacity`) can never be confused and all `capacity` slots hold
//! requests when the queue is full.

use crate::error::BookingError;
use crate::request::BookingRequest;
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Capacity used when none is configured.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Fill level of a [`BookingQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    Empty,
    Partial,
    Full,
}

#[derive(Debug)]
struct Ring {
    slots: Box<[Option<BookingRequest>]>,
    /// Slot holding the oldest request.
    head: usize,
    len: usize,
}

impl Ring {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.len <= self.capacity(),
            "Invariant violated: queue length {} exceeds capacity {}",
            self.len,
            self.capacity()
        );
        debug_assert!(
            self.head < self.capacity(),
            "Invariant violated: head {} out of bounds",
            self.head
        );
    }

    fn push(&mut self, request: BookingRequest) -> Result<(), BookingRequest> {
        if self.len == self.capacity() {
            return Err(request);
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(request);
        self.len += 1;
        self.assert_invariants();
        Ok(())
    }

    fn pop(&mut self) -> Option<BookingRequest> {
        if self.len == 0 {
            return None;
        }
        let request = self.slots[self.head].take()?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        self.assert_invariants();
        Some(request)
    }

    fn iter(&self) -> impl Iterator<Item = &BookingRequest> {
        (0..self.len).filter_map(move |offset| {
            self.slots[(self.head + offset) % self.capacity()].as_ref()
        })
    }
}

/// A bounded, strictly FIFO queue of booking requests.
///
/// Each operation runs inside a single lock around the ring state, so the
/// queue can be shared by reference between intake and settlement.
///
/// # Example
///
/// ```
/// use rail_booking_rs::{BookingError, BookingQueue, BookingRequest, QueueState, TrainIndex};
///
/// let queue = BookingQueue::new(1);
/// let request = BookingRequest::new("alice", TrainIndex(0), 2).unwrap();
/// queue.enqueue(request.clone()).unwrap();
/// assert_eq!(queue.state(), QueueState::Full);
///
/// assert_eq!(queue.dequeue(), Ok(request));
/// assert_eq!(queue.dequeue(), Err(BookingError::QueueEmpty));
/// ```
#[derive(Debug)]
pub struct BookingQueue {
    ring: Mutex<Ring>,
}

impl BookingQueue {
    /// Creates an empty queue holding at most `capacity` requests.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "BookingQueue capacity must be > 0");
        Self {
            ring: Mutex::new(Ring::with_capacity(capacity)),
        }
    }

    /// Appends a request at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::QueueFull`] if the queue already holds
    /// `capacity` requests. The queue is left unchanged.
    pub fn enqueue(&self, request: BookingRequest) -> Result<(), BookingError> {
        let mut ring = self.ring.lock();
        let capacity = ring.capacity();

        match ring.push(request) {
            Ok(()) => {
                debug!(len = ring.len, capacity, "booking request queued");
                Ok(())
            }
            Err(rejected) => {
                warn!(
                    requester = rejected.requester(),
                    capacity, "booking queue is full, request rejected"
                );
                Err(BookingError::QueueFull { capacity })
            }
        }
    }

    /// Removes and returns the request at the head.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::QueueEmpty`] if there is nothing queued.
    pub fn dequeue(&self) -> Result<BookingRequest, BookingError> {
        let mut ring = self.ring.lock();
        let request = ring.pop().ok_or(BookingError::QueueEmpty)?;
        debug!(requester = request.requester(), len = ring.len, "booking request dequeued");
        Ok(request)
    }

    pub fn state(&self) -> QueueState {
        let ring = self.ring.lock();
        match ring.len {
            0 => QueueState::Empty,
            n if n == ring.capacity() => QueueState::Full,
            _ => QueueState::Partial,
        }
    }

    pub fn len(&self) -> usize {
        self.ring.lock().len
    }

    pub fn capacity(&self) -> usize {
        self.ring.lock().capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.state() == QueueState::Empty
    }

    pub fn is_full(&self) -> bool {
        self.state() == QueueState::Full
    }

    /// Returns the queued requests, oldest first, without removing them.
    pub fn pending(&self) -> Vec<BookingRequest> {
        self.ring.lock().iter().cloned().collect()
    }
}

impl Default for BookingQueue {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}
