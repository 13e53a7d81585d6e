// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapty terminal driver.
//!
//! Wires the session to a console map and list, a file store and a fixed
//! position, then feeds it commands read from stdin, one per line:
//!
//! ```text
//! click <lat> <lng>
//! kind <running|cycling>
//! submit <running|cycling> <distance km> <duration min> <cadence|elevation>
//! cancel
//! select <workout id>
//! list
//! reset
//! quit
//! ```

use anyhow::Context;
use mapty::{
    config::Config,
    db::FileStore,
    models::{Coordinates, WorkoutForm, WorkoutKind},
    services::{entry_fields, ConsoleMap, ConsoleRenderer, FixedGeolocator},
    session::MapStatus,
    Session, SessionEvent,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        storage_dir = %config.storage_dir.display(),
        key = %config.storage_key,
        "Starting Mapty"
    );

    let store = FileStore::open(&config.storage_dir).context("Failed to open workout storage")?;
    let geolocator = FixedGeolocator::new(config.home_position);

    let mut session = Session::restore(
        config,
        ConsoleMap::new(std::io::stdout()),
        ConsoleRenderer::new(std::io::stdout()),
        store,
    );

    session.locate(&geolocator).await;
    // The console map has nothing to load asynchronously
    if session.map_status() == MapStatus::Loading {
        session.handle(SessionEvent::MapReady);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Command::Nothing) => {}
            Ok(Command::Quit) => break,
            Ok(Command::List) => {
                for workout in session.workouts() {
                    let details: Vec<String> = entry_fields(workout)
                        .into_iter()
                        .map(|f| format!("{} {}", f.value, f.unit))
                        .collect();
                    println!(
                        "{}  {}  {}  ({} clicks)",
                        workout.id(),
                        workout.description(),
                        details.join(", "),
                        workout.clicks()
                    );
                }
            }
            Ok(Command::Event(event)) => session.handle(event),
            Err(message) => eprintln!("{message}"),
        }

        if session.renderer().reload_requested() {
            println!("Session reset, start mapty again.");
            break;
        }
    }

    Ok(())
}

/// One line of input.
#[derive(Debug, PartialEq)]
enum Command {
    Event(SessionEvent),
    List,
    Quit,
    Nothing,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = words.split_first() else {
        return Ok(Command::Nothing);
    };

    let event = match (verb, args) {
        ("click", [lat, lng]) => {
            let coords = Coordinates::new(number(lat), number(lng)).map_err(|e| e.to_string())?;
            SessionEvent::LocationSelected(coords)
        }
        ("kind", [kind]) => SessionEvent::KindChanged(parse_kind(kind)?),
        ("submit", [kind, distance, duration, input]) => SessionEvent::FormSubmitted(WorkoutForm {
            kind: parse_kind(kind)?,
            distance: number(distance),
            duration: number(duration),
            kind_input: number(input),
        }),
        ("cancel", []) => SessionEvent::FormCancelled,
        ("select", [id]) => SessionEvent::EntrySelected((*id).into()),
        ("reset", []) => SessionEvent::Reset,
        ("list", []) => return Ok(Command::List),
        ("quit" | "exit", []) => return Ok(Command::Quit),
        _ => return Err(format!("Unrecognized command: {}", line.trim())),
    };

    Ok(Command::Event(event))
}

fn parse_kind(word: &str) -> Result<WorkoutKind, String> {
    word.parse().map_err(|e: mapty::error::AppError| e.to_string())
}

/// Lenient number parsing: anything unparsable becomes NaN and fails form
/// validation like an empty input field would.
fn number(word: &str) -> f64 {
    word.parse().unwrap_or(f64::NAN)
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mapty=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
