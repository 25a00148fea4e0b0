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

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use csv::{ReaderBuilder, Trim};
use rail_booking_rs::{
    BookingError, Catalog, DEFAULT_QUEUE_CAPACITY, Engine, Outcome, RejectReason, TrainIndex,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Railway Booking - Queue and settle train reservations
///
/// Reads commands line by line from stdin (or a script file) and prints
/// the results to stdout.
#[derive(Parser, Debug)]
#[command(name = "rail-booking-rs")]
#[command(about = "An in-memory railway booking simulator", long_about = None)]
struct Args {
    /// Path to a CSV catalog of trains
    ///
    /// Expected format: name,source,destination,seats
    /// Defaults to the built-in five-train network.
    #[arg(long, value_name = "FILE", env = "RAIL_CATALOG")]
    catalog: Option<PathBuf>,

    /// Maximum number of pending booking requests
    #[arg(
        long,
        value_name = "N",
        env = "RAIL_QUEUE_CAPACITY",
        default_value_t = DEFAULT_QUEUE_CAPACITY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    capacity: usize,

    /// Read commands from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let catalog = match &args.catalog {
        Some(path) => match File::open(path).map_err(csv::Error::from).and_then(load_catalog) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Catalog::sample(),
    };

    let engine = Engine::new(catalog, args.capacity);

    let result = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => run_commands(&engine, BufReader::new(file), io::stdout().lock()),
            Err(e) => {
                eprintln!("Error opening script '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => run_commands(&engine, io::stdin().lock(), io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Load a train catalog from CSV.
///
/// # CSV Format
///
/// ```csv
/// name,source,destination,seats
/// Express 101,CityA,CityB,50
/// ```
///
/// Row order defines train numbers, so unlike a lenient import a malformed
/// row fails the whole load.
///
/// # Errors
///
/// Returns a CSV error if the reader fails or any row does not parse.
pub fn load_catalog<R: Read>(reader: R) -> Result<Catalog, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let trains = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(Catalog::new(trains))
}

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Search {
        source: &'a str,
        destination: &'a str,
    },
    Book {
        requester: &'a str,
        train: &'a str,
        seats: &'a str,
    },
    Queue,
    Process,
    Trains,
    Help,
    Exit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = match (words.next()?, words.next(), words.next(), words.next()) {
            ("search", Some(source), Some(destination), None) => Command::Search {
                source,
                destination,
            },
            ("book", Some(requester), Some(train), Some(seats)) => Command::Book {
                requester,
                train,
                seats,
            },
            ("queue", None, ..) => Command::Queue,
            ("process", None, ..) => Command::Process,
            ("trains", None, ..) => Command::Trains,
            ("help", None, ..) => Command::Help,
            ("exit" | "quit", None, ..) => Command::Exit,
            _ => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(command)
    }
}

const HELP: &str = "Commands:
  search <source> <destination>
  book <username> <train number> <seats>
  queue
  process
  trains
  exit";

/// Run commands against the engine until `exit` or end of input.
///
/// Blank lines are ignored; unrecognized lines print a hint and the loop
/// continues.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run_commands<R: BufRead, W: Write>(
    engine: &Engine,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Search {
                source,
                destination,
            }) => search(engine, source, destination, &mut output)?,
            Some(Command::Book {
                requester,
                train,
                seats,
            }) => book(engine, requester, train, seats, &mut output)?,
            Some(Command::Queue) => show_queue(engine, &mut output)?,
            Some(Command::Process) => process_bookings(engine, &mut output)?,
            Some(Command::Trains) => show_trains(engine, &mut output)?,
            Some(Command::Help) => writeln!(output, "{HELP}")?,
            Some(Command::Exit) => break,
            None => writeln!(output, "Invalid command! Type 'help' for a list of commands.")?,
        }
    }

    writeln!(output, "Thank you for using the Railway Booking System!")?;
    output.flush()
}

fn search<W: Write>(
    engine: &Engine,
    source: &str,
    destination: &str,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Available trains:")?;
    let mut found = false;
    for route in engine.search(source, destination) {
        found = true;
        writeln!(
            output,
            "{}. {} (Seats available: {})",
            route.index.number(),
            route.name,
            route.seats_available
        )?;
    }
    if !found {
        writeln!(output, "No trains available for the specified route.")?;
    }
    Ok(())
}

fn book<W: Write>(
    engine: &Engine,
    requester: &str,
    train: &str,
    seats: &str,
    output: &mut W,
) -> io::Result<()> {
    // Validate user input here so only well-formed requests reach the engine.
    let Some(train) = train
        .parse::<usize>()
        .ok()
        .and_then(TrainIndex::from_number)
        .filter(|index| engine.catalog().contains(*index))
    else {
        return writeln!(output, "Invalid train selection!");
    };
    let Some(seats) = seats.parse::<u32>().ok().filter(|seats| *seats > 0) else {
        return writeln!(output, "Invalid number of seats!");
    };

    match engine.book(requester, train, seats) {
        Ok(()) => writeln!(
            output,
            "Booking request for {requester} has been added to the queue."
        ),
        Err(BookingError::QueueFull { .. }) => writeln!(
            output,
            "Booking queue is full! Cannot accept more bookings."
        ),
        Err(e) => writeln!(output, "Booking rejected: {e}"),
    }
}

fn show_queue<W: Write>(engine: &Engine, output: &mut W) -> io::Result<()> {
    let pending = engine.queue().pending();
    if pending.is_empty() {
        return writeln!(output, "No bookings in the queue.");
    }
    writeln!(
        output,
        "Pending bookings ({}/{}):",
        pending.len(),
        engine.queue().capacity()
    )?;
    for (position, request) in pending.iter().enumerate() {
        writeln!(
            output,
            "{}. {} - {} seat(s) on train {}",
            position + 1,
            request.requester(),
            request.seats(),
            engine.catalog().name(request.train()).unwrap_or("?")
        )?;
    }
    Ok(())
}

fn process_bookings<W: Write>(engine: &Engine, output: &mut W) -> io::Result<()> {
    for record in engine.settle() {
        let train_name = record.train_name.as_deref().unwrap_or("?");
        match record.outcome {
            Outcome::Accepted => writeln!(
                output,
                "Booking successful! {} has booked {} seat(s) on train {}.",
                record.requester, record.seats, train_name
            )?,
            Outcome::Rejected(RejectReason::InsufficientSeats { .. }) => writeln!(
                output,
                "Booking failed for {}! Not enough seats available on train {}.",
                record.requester, train_name
            )?,
            Outcome::Rejected(RejectReason::UnknownTrain) => writeln!(
                output,
                "Booking failed for {}! Train {} does not exist.",
                record.requester,
                record.train.number()
            )?,
        }
    }
    writeln!(output, "All bookings have been processed.")
}

fn show_trains<W: Write>(engine: &Engine, output: &mut W) -> io::Result<()> {
    for (index, train) in engine.catalog().iter() {
        writeln!(
            output,
            "{}. {} {} -> {} (Seats available: {})",
            index.number(),
            train.name,
            train.source,
            train.destination,
            train.seats_available
        )?;
    }
    Ok(())
}
