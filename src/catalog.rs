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

//! Train catalog.
//!
//! The catalog is a fixed, ordered list of trains built once at startup.
//! Route data never changes; only the seat counters do, and only through
//! [`Catalog::try_reserve`].
//!
//! # Example
//!
//! ```
//! use rail_booking_rs::{Catalog, TrainIndex};
//!
//! let catalog = Catalog::sample();
//! let matches: Vec<_> = catalog.find_by_route("CityA", "CityB").collect();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].index, TrainIndex(0));
//!
//! assert!(catalog.try_reserve(TrainIndex(0), 10));
//! assert_eq!(catalog.seats_available(TrainIndex(0)), Some(40));
//! ```

use crate::base::TrainIndex;
use crate::settlement::RejectReason;
use crate::train::{RouteMatch, Train};
use parking_lot::Mutex;

#[derive(Debug)]
struct CatalogEntry {
    name: String,
    source: String,
    destination: String,
    seats: Mutex<u32>,
}

impl CatalogEntry {
    fn snapshot(&self) -> Train {
        Train {
            name: self.name.clone(),
            source: self.source.clone(),
            destination: self.destination.clone(),
            seats_available: *self.seats.lock(),
        }
    }
}

impl From<Train> for CatalogEntry {
    fn from(train: Train) -> Self {
        Self {
            name: train.name,
            source: train.source,
            destination: train.destination,
            seats: Mutex::new(train.seats_available),
        }
    }
}

/// Authoritative seat inventory.
///
/// # Invariants
///
/// - The number of trains is fixed at construction.
/// - Seat counts never go up and never go below zero.
/// - A failed reservation leaves the counter untouched.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds the catalog from an ordered seed. Train `i` of the seed gets
    /// index `TrainIndex(i)`.
    pub fn new(trains: Vec<Train>) -> Self {
        Self {
            entries: trains.into_iter().map(CatalogEntry::from).collect(),
        }
    }

    /// The five-train network the simulator ships with.
    pub fn sample() -> Self {
        Self::new(vec![
            Train::new("Express 101", "CityA", "CityB", 50),
            Train::new("Express 202", "CityB", "CityC", 30),
            Train::new("Express 303", "CityA", "CityC", 20),
            Train::new("Express 404", "CityC", "CityD", 40),
            Train::new("Express 505", "CityD", "CityA", 25),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, index: TrainIndex) -> bool {
        index.0 < self.entries.len()
    }

    /// Returns a snapshot of the train at `index`.
    pub fn get(&self, index: TrainIndex) -> Option<Train> {
        self.entries.get(index.0).map(CatalogEntry::snapshot)
    }

    pub fn name(&self, index: TrainIndex) -> Option<&str> {
        self.entries.get(index.0).map(|entry| entry.name.as_str())
    }

    pub fn seats_available(&self, index: TrainIndex) -> Option<u32> {
        self.entries.get(index.0).map(|entry| *entry.seats.lock())
    }

    /// Iterates over snapshots of every train in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (TrainIndex, Train)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (TrainIndex(i), entry.snapshot()))
    }

    /// Lazily yields every train running from `source` to `destination`, in
    /// catalog order.
    ///
    /// Each call rescans the catalog and has no side effects. No match is an
    /// empty iterator, not an error.
    pub fn find_by_route<'a>(
        &'a self,
        source: &'a str,
        destination: &'a str,
    ) -> impl Iterator<Item = RouteMatch> + 'a {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, entry)| entry.source == source && entry.destination == destination)
            .map(|(i, entry)| RouteMatch {
                index: TrainIndex(i),
                name: entry.name.clone(),
                seats_available: *entry.seats.lock(),
            })
    }

    /// Takes `seats` seats from the train at `index` if that many are left.
    ///
    /// Returns `false` without touching the counter when `seats` is zero,
    /// exceeds the remaining seats, or `index` is not in the catalog.
    pub fn try_reserve(&self, index: TrainIndex, seats: u32) -> bool {
        self.reserve(index, seats).is_ok()
    }

    /// Check-and-decrement under the train's lock. Returns the seats left
    /// after the reservation.
    pub(crate) fn reserve(&self, index: TrainIndex, seats: u32) -> Result<u32, RejectReason> {
        let entry = self
            .entries
            .get(index.0)
            .ok_or(RejectReason::UnknownTrain)?;

        let mut available = entry.seats.lock();
        if seats == 0 || seats > *available {
            return Err(RejectReason::InsufficientSeats {
                requested: seats,
                available: *available,
            });
        }
        *available -= seats;
        Ok(*available)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_has_five_trains() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.name(TrainIndex(2)), Some("Express 303"));
        assert_eq!(catalog.seats_available(TrainIndex(4)), Some(25));
        assert!(catalog.contains(TrainIndex(4)));
        assert!(!catalog.contains(TrainIndex(5)));
    }

    #[test]
    fn reserve_decrements_seats() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.reserve(TrainIndex(0), 10), Ok(40));
        assert_eq!(catalog.seats_available(TrainIndex(0)), Some(40));
    }

    #[test]
    fn reserve_exact_remaining_seats() {
        let catalog = Catalog::new(vec![Train::new("T", "A", "B", 3)]);
        assert!(catalog.try_reserve(TrainIndex(0), 3));
        assert_eq!(catalog.seats_available(TrainIndex(0)), Some(0));
        assert!(!catalog.try_reserve(TrainIndex(0), 1));
    }

    #[test]
    fn failed_reserve_does_not_mutate() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.reserve(TrainIndex(2), 21),
            Err(RejectReason::InsufficientSeats {
                requested: 21,
                available: 20
            })
        );
        assert_eq!(catalog.seats_available(TrainIndex(2)), Some(20));
    }

    #[test]
    fn zero_seat_reserve_fails() {
        let catalog = Catalog::sample();
        assert!(!catalog.try_reserve(TrainIndex(0), 0));
        assert_eq!(catalog.seats_available(TrainIndex(0)), Some(50));
    }

    #[test]
    fn unknown_train_reserve_fails() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.reserve(TrainIndex(9), 1),
            Err(RejectReason::UnknownTrain)
        );
    }

    #[test]
    fn find_by_route_preserves_catalog_order() {
        let catalog = Catalog::new(vec![
            Train::new("First", "A", "B", 1),
            Train::new("Other", "B", "A", 1),
            Train::new("Second", "A", "B", 2),
        ]);
        let names: Vec<_> = catalog.find_by_route("A", "B").map(|m| m.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn find_by_route_sees_reservations() {
        let catalog = Catalog::sample();
        catalog.try_reserve(TrainIndex(0), 5);
        let matches: Vec<_> = catalog.find_by_route("CityA", "CityB").collect();
        assert_eq!(matches[0].seats_available, 45);
    }

    #[test]
    fn iter_yields_snapshots_in_order() {
        let catalog = Catalog::sample();
        let indices: Vec<_> = catalog.iter().map(|(i, _)| i.0).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        let (_, last) = catalog.iter().last().unwrap();
        assert_eq!(last, Train::new("Express 505", "CityD", "CityA", 25));
    }
}
