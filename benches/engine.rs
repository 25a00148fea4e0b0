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

//! Benchmarks for the booking engine.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Queue enqueue/dequeue cycles
//! - Booking intake throughput
//! - Settlement throughput with accepted and rejected requests
//! - Concurrent intake from multiple threads

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rail_booking_rs::{BookingQueue, BookingRequest, Catalog, Engine, Train, TrainIndex};
use rayon::prelude::*;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_request(id: usize, seats: u32) -> BookingRequest {
    BookingRequest::new(format!("user-{id}"), TrainIndex(0), seats).unwrap()
}

fn big_train(seats: u32) -> Catalog {
    Catalog::new(vec![Train::new("Express 101", "CityA", "CityB", seats)])
}

// =============================================================================
// Queue Benchmarks
// =============================================================================

fn bench_queue_cycle(c: &mut Criterion) {
    c.bench_function("queue_enqueue_dequeue", |b| {
        let queue = BookingQueue::new(128);
        let request = make_request(0, 1);
        b.iter(|| {
            queue.enqueue(black_box(request.clone())).unwrap();
            black_box(queue.dequeue().unwrap());
        })
    });
}

fn bench_booking_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_throughput");

    for count in [100usize, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let engine = Engine::new(big_train(u32::MAX), count);
                for _ in 0..count {
                    engine.book("user", TrainIndex(0), 1).unwrap();
                }
                black_box(&engine);
            })
        });
    }
    group.finish();
}

// =============================================================================
// Settlement Benchmarks
// =============================================================================

fn bench_settlement(c: &mut Criterion) {
    let mut group = c.benchmark_group("settlement");

    for count in [100usize, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("all_accepted", count), count, |b, &count| {
            b.iter(|| {
                let engine = Engine::new(big_train(u32::MAX), count);
                for _ in 0..count {
                    engine.book("user", TrainIndex(0), 1).unwrap();
                }
                black_box(engine.settle());
            })
        });

        // Only the first half fits
        group.bench_with_input(BenchmarkId::new("half_rejected", count), count, |b, &count| {
            b.iter(|| {
                let engine = Engine::new(big_train((count / 2) as u32), count);
                for _ in 0..count {
                    engine.book("user", TrainIndex(0), 1).unwrap();
                }
                black_box(engine.settle());
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let catalog = Catalog::sample();
    c.bench_function("find_by_route", |b| {
        b.iter(|| black_box(catalog.find_by_route("CityA", "CityC").count()))
    });
}

// =============================================================================
// Concurrent Benchmarks
// =============================================================================

fn bench_concurrent_booking(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_booking");
    let count = 10_000;
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("rayon_intake", |b| {
        b.iter(|| {
            let engine = Engine::new(Catalog::sample(), count);
            (0..count).into_par_iter().for_each(|i| {
                let _ = engine.book("user", TrainIndex(i % 5), 1);
            });
            black_box(engine.settle());
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_queue_cycle,
    bench_booking_throughput,
    bench_settlement,
    bench_search,
    bench_concurrent_booking,
);
criterion_main!(benches);
