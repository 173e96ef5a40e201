//! Print the lines of an input that were not seen before.
//!
//! Every line is hashed into a fixed-width digest and checked against a sorted index of the digests
//! seen so far. Lines that were not seen before are recorded and printed to stdout, in input
//! order. Logs are written to stderr.
//!
//! # Usage
//!
//! Deduplicate stdin using 128-bit digests:
//!
//! ```sh
//! cat urls.txt | cargo run --release --bin hashsearch-dedup
//! ```
//!
//! Skip lines that were already processed in a previous run (the known lines are bulk loaded with
//! a single sort) and use 64-bit digests to halve memory usage:
//!
//! ```sh
//! cargo run --release --bin hashsearch-dedup -- --width 64 --known processed.txt --input urls.txt
//! ```

use clap::{value_parser, Arg, ArgAction, Command};
use hashsearch_cryptography::{Fnv128a, Fnv64a, Hasher};
use hashsearch_tracker::Tracker;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{debug, error, info};

mod dedup;

fn main() -> ExitCode {
    // Parse arguments
    let matches = Command::new("hashsearch-dedup")
        .about("print the lines of an input that were not seen before")
        .arg(
            Arg::new("width")
                .long("width")
                .default_value("128")
                .value_parser(["64", "128"])
                .help("Width of the digests (in bits) used to identify lines"),
        )
        .arg(
            Arg::new("known")
                .long("known")
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("File of lines to treat as already seen"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("File to deduplicate (defaults to stdin)"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .action(ArgAction::SetTrue)
                .help("Log all stored digests once done"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .get_matches();

    // Create logger
    let level = if matches.get_flag("verbose") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    // Run with the requested digest width
    let known = matches.get_one::<PathBuf>("known");
    let input = matches.get_one::<PathBuf>("input");
    let dump = matches.get_flag("dump");
    let result = match matches.get_one::<String>("width").map(String::as_str) {
        Some("64") => run::<Fnv64a>(known, input, dump),
        _ => run::<Fnv128a>(known, input, dump),
    };
    match result {
        Ok(summary) => {
            info!(
                lines = summary.lines,
                unique = summary.unique,
                duplicates = summary.duplicates,
                "deduplicated input"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(?err, "failed to deduplicate input");
            ExitCode::FAILURE
        }
    }
}

fn run<H: Hasher>(
    known: Option<&PathBuf>,
    input: Option<&PathBuf>,
    dump: bool,
) -> io::Result<dedup::Summary> {
    let tracker = Tracker::<H>::new();

    // Bulk load lines that were already seen
    if let Some(path) = known {
        let loaded = dedup::load(&tracker, BufReader::new(File::open(path)?))?;
        info!(?path, loaded, "loaded known lines");
    }

    // Filter the input
    let mut stdout = BufWriter::new(io::stdout().lock());
    let summary = match input {
        Some(path) => {
            debug!(?path, "reading input");
            dedup::filter(&tracker, BufReader::new(File::open(path)?), &mut stdout)?
        }
        None => {
            debug!("reading stdin");
            dedup::filter(&tracker, io::stdin().lock(), &mut stdout)?
        }
    };
    stdout.flush()?;

    if dump {
        for (position, digest) in tracker.snapshot().iter().enumerate() {
            info!(position, ?digest, "stored digest");
        }
    }
    Ok(summary)
}
