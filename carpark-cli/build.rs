//! Build script for carpark-cli.
//!
//! Renders a man page into `OUT_DIR/man` with clap_mangen. The command tree is
//! declared here by hand because a build script cannot depend on the crate it
//! builds; keep it in step with src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn date_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("DATE")
            .required(true)
            .help("First day of the range (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("DATE")
            .required(true)
            .help("Last day of the range, inclusive (YYYY-MM-DD)"),
    )
}

fn name_arg(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("name")
            .long("name")
            .value_name("NAME")
            .required(true)
            .help("Customer name the reservation is held under"),
    )
}

fn build_cli() -> Command {
    Command::new("carpark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check parking availability, quote prices and manage reservations")
        .long_about(
            "Command-line tool for a single car park: per-day availability, seasonal \
             pricing, and named reservations over date ranges",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("CARPARK_CONFIG"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory holding config.yaml")
                .value_name("PATH")
                .global(true)
                .env("CARPARK_DATA_DIR"),
        )
        .arg(
            Arg::new("no-seed")
                .long("no-seed")
                .help("Start with empty stores, ignoring configured seed data")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: table, json or csv")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            date_args(Command::new("availability").about("Show free spaces per day")),
            date_args(
                Command::new("available").about("Check whether a whole range can be reserved"),
            ),
            date_args(Command::new("price").about("Quote per-day prices and the total")),
            name_arg(date_args(
                Command::new("reserve").about("Reserve a space for every day in a range"),
            )),
            name_arg(date_args(
                Command::new("amend").about("Move an existing reservation to a new range"),
            )),
            name_arg(Command::new("cancel").about("Cancel a reservation")),
            Command::new("list").about("List current reservations"),
            Command::new("batch")
                .about("Run a file of requests against one engine")
                .arg(Arg::new("file").value_name("FILE")),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("file").value_name("FILE")),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("carpark.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
