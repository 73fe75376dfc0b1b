//! Trace-driven cache simulator CLI.
//!
//! This binary provides the single entry point for a simulation run. It performs:
//! 1. **Configuration:** Parse and validate the cache geometry flags (`-s`, `-b`, `-E`).
//! 2. **Replay:** Stream the trace file through the cache engine in file order.
//! 3. **Reporting:** Print the final statistics as text or JSON, plus one outcome line per record in verbose mode.
//!
//! Exit status: 0 when every record was processed; any configuration, I/O,
//! or trace-format error prints a single diagnostic and exits non-zero.

use std::process;

use clap::Parser;
use serde::Serialize;

use cachesim_core::sim::replay::replay;
use cachesim_core::{CacheGeometry, CacheSim, CacheStats, SimError, TraceReader};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replay a memory trace against a configurable set-associative cache and\nreport hit/miss/eviction statistics with write-back (dirty byte) accounting.\n\nTrace format: one access per line, `<op> <hex-address>,<decimal-size>` with\nop L (load) or S (store).\n\nExamples:\n  csim -s 4 -E 2 -b 5 -t traces/qsort.trace\n  csim -s 0 -E 1 -b 0 -t trace.txt -v\n  csim -s 4 -E 2 -b 5 -t trace.txt --json"
)]
struct Cli {
    /// Number of set index bits (the cache has 2^S sets).
    #[arg(short = 's', long = "set-bits", value_name = "S")]
    set_bits: u32,

    /// Number of block offset bits (blocks are 2^B bytes).
    #[arg(short = 'b', long = "block-bits", value_name = "B")]
    block_bits: u32,

    /// Number of lines per set (associativity).
    #[arg(short = 'E', long = "assoc", value_name = "E")]
    assoc: usize,

    /// Memory trace file to replay.
    #[arg(short = 't', long = "trace", value_name = "FILE")]
    trace: String,

    /// Report the effect of each memory operation.
    #[arg(short, long)]
    verbose: bool,

    /// Emit the final report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

/// Report shape for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    geometry: &'a CacheGeometry,
    records: u64,
    stats: &'a CacheStats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let geometry = match CacheGeometry::new(cli.set_bits, cli.block_bits, cli.assoc) {
        Ok(geometry) => geometry,
        Err(e) => {
            eprintln!("[!] Invalid geometry: {e}");
            eprintln!("    usage: csim -s <S> -b <B> -E <E> -t <trace> [-v] [--json]");
            process::exit(1);
        }
    };

    if !cli.json {
        println!("Set index bits:    {}", geometry.index_bits);
        println!("Block offset bits: {}", geometry.offset_bits);
        println!("Lines per set:     {}", geometry.associativity);
        println!("Trace file:        {}", cli.trace);
    }

    let reader = match TraceReader::open(&cli.trace) {
        Ok(reader) => reader,
        Err(e) => fatal(&e),
    };

    let mut cache = match CacheSim::new(geometry) {
        Ok(cache) => cache,
        Err(e) => fatal(&SimError::Geometry(e)),
    };

    let verbose = cli.verbose;
    let records = match replay(&mut cache, reader, |record, outcome| {
        if verbose {
            println!(
                "{} {:x},{} {}",
                record.op,
                record.addr.val(),
                record.size,
                outcome
            );
        }
    }) {
        Ok(records) => records,
        Err(e) => fatal(&e),
    };

    if cli.json {
        let report = Report {
            geometry: cache.geometry(),
            records,
            stats: cache.stats(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("\n[!] FATAL: could not serialize report: {e}");
                process::exit(1);
            }
        }
    } else {
        cache.stats().print();
    }
}

/// Prints one diagnostic for a fatal error and exits non-zero.
fn fatal(err: &SimError) -> ! {
    eprintln!("\n[!] FATAL: {err}");
    process::exit(1);
}
