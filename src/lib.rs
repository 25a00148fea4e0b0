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

//! # Rail Booking
//!
//! This library provides an in-memory railway reservation simulator: a fixed
//! catalog of trains with live seat counts, a bounded FIFO queue of booking
//! requests, and a batch settlement pass that applies queued requests to the
//! catalog in arrival order.
//!
//! ## Core Components
//!
//! - [`Engine`]: Application context owning the catalog and the queue
//! - [`Catalog`]: Fixed list of trains with atomic seat reservation
//! - [`BookingQueue`]: Bounded ring buffer with explicit empty/full states
//! - [`settle`]: One settlement pass producing a [`SettlementReport`]
//! - [`BookingError`]: Error types for intake and queue operations
//!
//! ## Example
//!
//! ```
//! use rail_booking_rs::{Engine, Outcome, RejectReason, TrainIndex};
//!
//! let engine = Engine::default();
//!
//! // Queue two requests for Express 101 (50 seats)
//! engine.book("alice", TrainIndex(0), 10).unwrap();
//! engine.book("bob", TrainIndex(0), 45).unwrap();
//!
//! // Settle them in arrival order
//! let report = engine.settle();
//! assert_eq!(report.records()[0].outcome, Outcome::Accepted);
//! assert_eq!(
//!     report.records()[1].outcome,
//!     Outcome::Rejected(RejectReason::InsufficientSeats { requested: 45, available: 40 })
//! );
//! assert_eq!(engine.catalog().seats_available(TrainIndex(0)), Some(40));
//! ```

mod base;
pub mod booking_queue;
pub mod catalog;
mod engine;
pub mod error;
mod request;
pub mod settlement;
mod train;

pub use base::TrainIndex;
pub use booking_queue::{BookingQueue, DEFAULT_QUEUE_CAPACITY, QueueState};
pub use catalog::Catalog;
pub use engine::Engine;
pub use error::BookingError;
pub use request::BookingRequest;
pub use settlement::{Outcome, RejectReason, SettlementRecord, SettlementReport, settle};
pub use train::{RouteMatch, Train};
