//! Batch command implementation.
//!
//! Each invocation of the other commands starts from freshly seeded stores.
//! `batch` instead runs many requests against one engine, so later requests
//! see the effect of earlier ones.
//!
//! One request per line, fields separated by whitespace:
//!
//! ```text
//! # comments and blank lines are ignored
//! availability 2023-01-01 2023-01-10
//! available    2023-01-04 2023-01-06
//! price        2023-07-01 2023-07-07
//! reserve      2023-01-04 2023-01-06 Bob Johnson
//! amend        2023-01-07 2023-01-08 Bob Johnson
//! cancel       Bob Johnson
//! list
//! ```
//!
//! The whole input is parsed before anything runs; a malformed line aborts
//! the batch without touching the engine.

use crate::error::CliError;
use crate::output::{
    write_availability, write_cancellation, write_parking_available, write_price,
    write_reservation_response, write_reservations,
};
use crate::utils::{load_configuration, open_facade, output_format, parse_date, GlobalOptions};
use carpark::config::OutputFormat;
use carpark::facade::{
    AvailabilityResponse, CancellationResponse, ParkingAvailabilityResponse, PriceResponse,
    ReservationResponse,
};
use carpark::{RequestFacade, Reservation};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Run a file of requests against one engine.
#[derive(Args)]
pub struct BatchCommand {
    /// Request file; reads standard input when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Exit with status 1 if any reserve, amend or cancel was rejected
    #[arg(long)]
    pub strict: bool,
}

/// A single parsed batch line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Free spaces per day.
    Availability(NaiveDate, NaiveDate),
    /// Whether the whole range is free.
    Available(NaiveDate, NaiveDate),
    /// Per-day prices and total.
    Price(NaiveDate, NaiveDate),
    /// Reserve a range under a name.
    Reserve(NaiveDate, NaiveDate, String),
    /// Move a named reservation.
    Amend(NaiveDate, NaiveDate, String),
    /// Cancel a named reservation.
    Cancel(String),
    /// Current reservations.
    List,
}

impl Request {
    /// Parse one non-comment line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut fields = line.split_whitespace();
        let verb = fields.next().ok_or("empty request")?.to_lowercase();

        let mut date = |label: &str| -> Result<NaiveDate, String> {
            fields
                .next()
                .ok_or_else(|| format!("{verb}: missing {label} date"))
                .and_then(parse_date)
        };

        let request = match verb.as_str() {
            "availability" => Self::Availability(date("start")?, date("end")?),
            "available" => Self::Available(date("start")?, date("end")?),
            "price" => Self::Price(date("start")?, date("end")?),
            "reserve" => {
                let (from, to) = (date("start")?, date("end")?);
                Self::Reserve(from, to, rest(&mut fields))
            }
            "amend" => {
                let (from, to) = (date("start")?, date("end")?);
                Self::Amend(from, to, rest(&mut fields))
            }
            "cancel" => Self::Cancel(rest(&mut fields)),
            "list" => Self::List,
            other => return Err(format!("unknown request '{other}'")),
        };

        match request {
            Self::Availability(..) | Self::Available(..) | Self::Price(..) | Self::List => {
                if let Some(extra) = fields.next() {
                    return Err(format!("{verb}: unexpected argument '{extra}'"));
                }
            }
            _ => {}
        }

        Ok(request)
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::Availability(..) => "availability",
            Self::Available(..) => "available",
            Self::Price(..) => "price",
            Self::Reserve(..) => "reserve",
            Self::Amend(..) => "amend",
            Self::Cancel(_) => "cancel",
            Self::List => "list",
        }
    }
}

// Names may contain spaces; an empty name is left for the engine to reject.
fn rest<'a>(fields: &mut impl Iterator<Item = &'a str>) -> String {
    fields.collect::<Vec<_>>().join(" ")
}

/// Parse a whole batch, skipping blank lines and `#` comments.
///
/// Returns each request with its 1-based line number.
pub fn parse_batch(input: &str) -> Result<Vec<(usize, Request)>, CliError> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            Request::parse(line)
                .map(|request| (number, request))
                .map_err(|msg| CliError::InvalidArguments(format!("line {number}: {msg}")))
        })
        .collect()
}

/// Response to one batch request.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// See [`Request::Availability`].
    Availability(AvailabilityResponse),
    /// See [`Request::Available`].
    Available(ParkingAvailabilityResponse),
    /// See [`Request::Price`].
    Price(PriceResponse),
    /// See [`Request::Reserve`] and [`Request::Amend`].
    Reservation(ReservationResponse),
    /// See [`Request::Cancel`].
    Cancellation(CancellationResponse),
    /// See [`Request::List`].
    Reservations(Vec<Reservation>),
}

impl Outcome {
    /// `false` only for a rejected reserve, amend or cancel.
    pub fn accepted(&self) -> bool {
        match self {
            Self::Reservation(r) => r.accepted,
            Self::Cancellation(c) => c.accepted,
            _ => true,
        }
    }

    fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), CliError> {
        match self {
            Self::Availability(r) => write_availability(out, format, r),
            Self::Available(r) => write_parking_available(out, format, r),
            Self::Price(r) => write_price(out, format, r),
            Self::Reservation(r) => write_reservation_response(out, format, r),
            Self::Cancellation(r) => write_cancellation(out, format, r),
            Self::Reservations(r) => write_reservations(out, format, r),
        }
    }
}

/// A request's line number, kind and outcome, as emitted in JSON.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    /// 1-based line in the input.
    pub line: usize,
    /// Request kind, e.g. `reserve`.
    pub request: &'static str,
    /// What the facade answered.
    pub response: Outcome,
}

/// Run parsed requests in order against one facade.
pub fn run_batch(facade: &mut RequestFacade, requests: Vec<(usize, Request)>) -> Vec<BatchEntry> {
    requests
        .into_iter()
        .map(|(line, request)| {
            log::debug!("Batch line {line}: {}", request.label());
            let label = request.label();
            let response = match request {
                Request::Availability(from, to) => {
                    Outcome::Availability(facade.check_availability(from, to))
                }
                Request::Available(from, to) => {
                    Outcome::Available(facade.is_parking_available(from, to))
                }
                Request::Price(from, to) => Outcome::Price(facade.quote_price(from, to)),
                Request::Reserve(from, to, name) => {
                    Outcome::Reservation(facade.reserve(from, to, &name))
                }
                Request::Amend(from, to, name) => {
                    Outcome::Reservation(facade.amend(from, to, &name))
                }
                Request::Cancel(name) => Outcome::Cancellation(facade.cancel(&name)),
                Request::List => Outcome::Reservations(facade.list_reservations()),
            };
            BatchEntry {
                line,
                request: label,
                response,
            }
        })
        .collect()
}

impl BatchCommand {
    /// Execute the batch command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = output_format(&config);
        if format == OutputFormat::Csv {
            return Err(CliError::InvalidArguments(
                "batch output supports table and json formats only".to_string(),
            ));
        }

        let input = self.read_input()?;
        let requests = parse_batch(&input)?;
        log::info!("Running {} batch request(s)", requests.len());

        let mut facade = open_facade(&config)?;
        let entries = run_batch(&mut facade, requests);

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &entries)?;
                writeln!(handle)?;
            }
            _ => {
                for (index, entry) in entries.iter().enumerate() {
                    if index > 0 {
                        writeln!(handle)?;
                    }
                    writeln!(handle, "# line {}: {}", entry.line, entry.request)?;
                    entry.response.write(&mut handle, format)?;
                }
            }
        }

        let rejected = entries.iter().filter(|e| !e.response.accepted()).count();
        if self.strict && rejected > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{rejected} batch request(s) rejected"
            )));
        }
        Ok(())
    }

    fn read_input(&self) -> Result<String, CliError> {
        match self.file {
            Some(ref path) if path.as_os_str() != "-" => {
                if !path.exists() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                Ok(fs::read_to_string(path)?)
            }
            _ => {
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }
}
