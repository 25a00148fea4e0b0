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

//! Batch settlement of queued booking requests.
//!
//! A settlement pass drains the requests that are in the queue when the pass
//! starts, oldest first, and resolves each one against the catalog with a
//! single check-and-decrement. Each request is either fully accepted or
//! rejected; nothing is split or retried.
//!
//! Running out of seats is an expected outcome and is reported on the
//! record. It never stops the pass.

use crate::base::TrainIndex;
use crate::booking_queue::BookingQueue;
use crate::catalog::Catalog;
use crate::request::BookingRequest;
use serde::Serialize;
use std::fmt;
use tracing::{error, info, warn};

/// Why a request was not booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// More seats were requested than remained when the request was settled.
    InsufficientSeats { requested: u32, available: u32 },
    /// The request names a train the catalog does not have. Intake through
    /// [`Engine::book`](crate::Engine::book) never lets this happen.
    UnknownTrain,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSeats { .. } => write!(f, "insufficient seats"),
            Self::UnknownTrain => write!(f, "unknown train"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Accepted,
    Rejected(RejectReason),
}

/// Result of settling one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementRecord {
    pub requester: String,
    pub train: TrainIndex,
    /// `None` only for [`RejectReason::UnknownTrain`].
    pub train_name: Option<String>,
    pub seats: u32,
    pub outcome: Outcome,
}

impl SettlementRecord {
    pub fn is_accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self.outcome {
            Outcome::Accepted => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

/// Records of one settlement pass, in the order the requests were queued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettlementReport {
    records: Vec<SettlementRecord>,
}

impl SettlementReport {
    pub fn records(&self) -> &[SettlementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn accepted(&self) -> impl Iterator<Item = &SettlementRecord> {
        self.records.iter().filter(|r| r.is_accepted())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &SettlementRecord> {
        self.records.iter().filter(|r| !r.is_accepted())
    }
}

impl IntoIterator for SettlementReport {
    type Item = SettlementRecord;
    type IntoIter = std::vec::IntoIter<SettlementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Runs one settlement pass.
///
/// Only the requests queued when the pass starts are processed; anything
/// enqueued while it runs is left for the next pass. Callers sharing the
/// queue and catalog between threads must make sure only one pass runs at
/// a time, which [`Engine::settle`](crate::Engine::settle) does.
pub fn settle(queue: &BookingQueue, catalog: &Catalog) -> SettlementReport {
    let pending = queue.len();
    let mut records = Vec::with_capacity(pending);

    for _ in 0..pending {
        // Another consumer drained the queue under us.
        let Ok(request) = queue.dequeue() else {
            break;
        };
        records.push(resolve(request, catalog));
    }

    let report = SettlementReport { records };
    info!(
        processed = report.len(),
        accepted = report.accepted().count(),
        rejected = report.rejected().count(),
        "settlement pass complete"
    );
    report
}

fn resolve(request: BookingRequest, catalog: &Catalog) -> SettlementRecord {
    let train = request.train();
    let seats = request.seats();
    let train_name = catalog.name(train).map(str::to_owned);

    let outcome = match catalog.reserve(train, seats) {
        Ok(remaining) => {
            info!(
                requester = request.requester(),
                train = train.number(),
                seats,
                remaining,
                "booking accepted"
            );
            Outcome::Accepted
        }
        Err(reason @ RejectReason::InsufficientSeats { available, .. }) => {
            warn!(
                requester = request.requester(),
                train = train.number(),
                seats,
                available,
                "booking rejected: insufficient seats"
            );
            Outcome::Rejected(reason)
        }
        Err(reason @ RejectReason::UnknownTrain) => {
            error!(
                requester = request.requester(),
                train = train.number(),
                "booking rejected: train not in catalog"
            );
            Outcome::Rejected(reason)
        }
    };

    SettlementRecord {
        requester: request.requester().to_owned(),
        train,
        train_name,
        seats,
        outcome,
    }
}
