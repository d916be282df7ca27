//! Rendering of facade responses as table, JSON or CSV.
//!
//! Every writer takes any `io::Write`, so commands hand in a locked stdout and
//! tests hand in a buffer.

use crate::error::CliError;
use carpark::config::OutputFormat;
use carpark::facade::{
    AvailabilityResponse, CancellationResponse, ParkingAvailabilityResponse, PriceResponse,
    ReservationResponse,
};
use carpark::Reservation;
use serde::Serialize;
use std::io::Write;

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, header: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, header: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
    let header_line = header
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;
    for row in rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "yes" } else { "no" })
}

/// Write free spaces per day.
pub fn write_availability<W: Write>(
    out: &mut W,
    format: OutputFormat,
    response: &AvailabilityResponse,
) -> Result<(), CliError> {
    const HEADER: [&str; 2] = ["date", "spaces_available"];
    let rows: Vec<Vec<String>> = response
        .spaces
        .iter()
        .map(|s| vec![s.date.to_string(), s.spaces_available.to_string()])
        .collect();

    match format {
        OutputFormat::Table => write_table(out, &HEADER, &rows),
        OutputFormat::Json => write_json(out, response),
        OutputFormat::Csv => write_csv(out, &HEADER, &rows),
    }
}

/// Write whether a whole range is free.
pub fn write_parking_available<W: Write>(
    out: &mut W,
    format: OutputFormat,
    response: &ParkingAvailabilityResponse,
) -> Result<(), CliError> {
    const HEADER: [&str; 3] = ["from", "to", "available"];
    let rows = vec![vec![
        response.from.to_string(),
        response.to.to_string(),
        yes_no(response.is_space_available),
    ]];

    match format {
        OutputFormat::Table => write_table(out, &HEADER, &rows),
        OutputFormat::Json => write_json(out, response),
        OutputFormat::Csv => write_csv(out, &HEADER, &rows),
    }
}

/// Write per-day prices.
///
/// The table form ends with a `TOTAL` line; CSV carries only the days.
pub fn write_price<W: Write>(
    out: &mut W,
    format: OutputFormat,
    response: &PriceResponse,
) -> Result<(), CliError> {
    const HEADER: [&str; 2] = ["date", "price"];
    let rows: Vec<Vec<String>> = response
        .prices
        .iter()
        .map(|q| vec![q.date.to_string(), q.price.to_string()])
        .collect();

    match format {
        OutputFormat::Table => {
            write_table(out, &HEADER, &rows)?;
            writeln!(out, "TOTAL\t{}", response.total)?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, response),
        OutputFormat::Csv => write_csv(out, &HEADER, &rows),
    }
}

/// Write the outcome of a reserve or amend request.
pub fn write_reservation_response<W: Write>(
    out: &mut W,
    format: OutputFormat,
    response: &ReservationResponse,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", response.status)?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, response),
        OutputFormat::Csv => write_csv(
            out,
            &["name", "from", "to", "accepted", "status"],
            &[vec![
                response.name.clone(),
                response.from.to_string(),
                response.to.to_string(),
                response.accepted.to_string(),
                response.status.clone(),
            ]],
        ),
    }
}

/// Write the outcome of a cancel request.
pub fn write_cancellation<W: Write>(
    out: &mut W,
    format: OutputFormat,
    response: &CancellationResponse,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", response.status)?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, response),
        OutputFormat::Csv => write_csv(
            out,
            &["name", "accepted", "status"],
            &[vec![
                response.name.clone(),
                response.accepted.to_string(),
                response.status.clone(),
            ]],
        ),
    }
}

/// Write the current reservations.
pub fn write_reservations<W: Write>(
    out: &mut W,
    format: OutputFormat,
    reservations: &[Reservation],
) -> Result<(), CliError> {
    const HEADER: [&str; 4] = ["name", "from", "to", "days"];
    let rows: Vec<Vec<String>> = reservations
        .iter()
        .map(|r| {
            vec![
                r.name().to_string(),
                r.from().to_string(),
                r.to().to_string(),
                r.days().to_string(),
            ]
        })
        .collect();

    match format {
        OutputFormat::Table => write_table(out, &HEADER, &rows),
        OutputFormat::Json => write_json(out, reservations),
        OutputFormat::Csv => write_csv(out, &HEADER, &rows),
    }
}
