//! MIPS Pipeline Hazard Scheduler CLI.
//!
//! The main executable. It handles command-line argument parsing, loads the
//! source program, runs the scheduler and writes the resolved schedule.
//!
//! # Usage
//!
//! ```text
//! mips-scheduler --file prog.s --policy reorder
//! mips-scheduler --file prog.s --config configs/default.toml --output out/prog.s
//! mips-scheduler --file prog.s_RESULT --resolved --policy stall
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use mips_scheduler::common::Error;
use mips_scheduler::config::{Config, PolicySelector};
use mips_scheduler::sim::{default_destination, load_program, load_schedule, write_schedule};

/// Command-line arguments for the hazard scheduler.
#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS Pipeline Hazard Scheduler")]
struct Args {
    /// Assembly source file to schedule.
    #[arg(short, long)]
    file: PathBuf,

    /// Resolution policy (stall, reorder, forward, best or 0-3); overrides the config.
    #[arg(short, long)]
    policy: Option<String>,

    /// Destination of the resolved schedule; defaults to the input path plus the configured suffix.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read the input as a schedule written by a previous run (`op rt, rs, imm` operand order).
    #[arg(long)]
    resolved: bool,

    /// Log every hazard and resolution.
    #[arg(long)]
    trace: bool,

    /// Print statistics as JSON instead of the text report.
    #[arg(long)]
    stats_json: bool,
}

/// Main entry point for the hazard scheduler.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the optional TOML configuration.
/// 2. **Loader**: Decodes the source file; malformed lines are reported and kept inert.
/// 3. **Scheduling**: Runs the selected policy over the program.
/// 4. **Output**: Writes the resolved schedule and prints statistics.
fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[!] {}", e);
            process::exit(1);
        }
    };

    init_tracing(args.trace || config.general.trace || cfg!(feature = "always-trace"));

    if let Err(e) = run(&args, config) {
        eprintln!("[!] {}", e);
        process::exit(1);
    }
}

fn init_tracing(trace: bool) {
    let default = if trace { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args, mut config: Config) -> Result<(), Error> {
    if let Some(policy) = &args.policy {
        config.scheduler.policy = PolicySelector::Name(policy.clone());
    }
    let scheduler = config.build_scheduler()?;

    let program = if args.resolved {
        load_schedule(&args.file)?
    } else {
        load_program(&args.file)?
    };

    let outcome = scheduler.run(&program.schedule);

    let destination = args
        .output
        .clone()
        .unwrap_or_else(|| default_destination(&args.file, &config.output.suffix));

    println!("[*] Policy:      {}", scheduler.policy());
    println!("[*] Source:      {}", args.file.display());

    if let Err(e) = write_schedule(&destination, &outcome.schedule) {
        // The schedule is still valid; show it so the run is not lost.
        print!("{}", outcome.schedule);
        return Err(e);
    }
    println!("[*] Destination: {}", destination.display());

    if args.stats_json {
        match outcome.stats.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("failed to render statistics: {}", e),
        }
    } else {
        outcome.stats.print();
    }
    Ok(())
}
