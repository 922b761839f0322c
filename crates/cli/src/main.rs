//! Cache hierarchy simulator CLI.
//!
//! Reads a two-level cache configuration and a memory access trace, drives
//! the hierarchy one access at a time, and writes one `"<L1> <L2>"` outcome
//! line per trace record (NA=0, RH=1, RM=2, WH=3, WM=4). By default the
//! results go to `<trace>.out` next to the trace file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use memsim_core::sim::trace::TraceReader;
use memsim_core::{HierarchyConfig, SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    version,
    about = "Two-level set-associative cache hierarchy simulator",
    long_about = "Simulates an L1/L2 cache hierarchy over a memory access trace.\n\n\
        The config file holds a label and three integers per level: block size in\n\
        bytes, associativity (0 = fully associative, 1 = direct-mapped, N = N-way),\n\
        and total size in KiB.\n\n\
        Each trace line is `R <hexaddr>` or `W <hexaddr>`. One output line is\n\
        written per trace line: the numeric L1 and L2 outcomes.\n\n\
        Example:\n  memsim cacheconfig.txt trace.txt"
)]
struct Cli {
    /// Cache configuration file.
    config: PathBuf,

    /// Memory access trace file.
    trace: PathBuf,

    /// Output file for per-access results (defaults to `<trace>.out`).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print per-level hit/miss statistics after the run.
    #[arg(short, long)]
    stats: bool,

    /// Increase log verbosity (-v: debug, -vv: trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("memsim: {e}");
        process::exit(1);
    }
}

/// Loads the config, opens trace and output, and drives the simulation.
fn run(cli: &Cli) -> Result<(), SimError> {
    let config = HierarchyConfig::from_path(&cli.config)?;
    let mut sim = Simulator::new(&config)?;

    let out_path = cli.output.clone().unwrap_or_else(|| {
        let mut path = cli.trace.clone().into_os_string();
        path.push(".out");
        PathBuf::from(path)
    });

    let records = TraceReader::open(&cli.trace)?;
    let mut out = BufWriter::new(File::create(&out_path)?);

    let processed = sim.run(records, &mut out)?;
    eprintln!(
        "{processed} accesses simulated, results written to {}",
        out_path.display()
    );
    if cli.stats {
        sim.stats.print();
    }
    Ok(())
}

/// Installs the log subscriber; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
