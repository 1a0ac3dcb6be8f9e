//! MIPS Single-Cycle Simulator CLI.
//!
//! Loads a program image (and optionally a data image) into the simulated
//! memories, runs the CPU until an undecodable word or the cycle limit, and
//! reports the final state.
//!
//! # Usage
//!
//! ```text
//! mips-sim --program prog.hex [--data data.hex] [--config sim.toml] [--trace] [--json]
//! ```

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use mips_sim::common::SimError;
use mips_sim::config::Config;
use mips_sim::core::{Cpu, RunOutcome};
use mips_sim::sim::loader;

/// Command-line arguments for the simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS Single-Cycle Datapath Simulator")]
struct Args {
    /// Program image (hex text, or big-endian binary with a `.bin` extension).
    #[arg(short, long)]
    program: String,

    /// Initial data memory image, same formats as the program.
    #[arg(short, long)]
    data: Option<String>,

    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Overrides `general.max_cycles` (0 = unbounded).
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Trace every stage of every cycle.
    #[arg(long)]
    trace: bool,

    /// Print the final state as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn init_logging(trace: bool) {
    let default_level = if trace { "trace" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.trace {
        config.general.trace_instructions = true;
    }
    if let Some(limit) = args.max_cycles {
        config.general.max_cycles = limit;
    }

    init_logging(config.general.trace_instructions);

    let program = loader::load_image(&args.program)?;
    let data = match &args.data {
        Some(path) => loader::load_image(path)?,
        None => Vec::new(),
    };
    tracing::info!(
        program = %args.program,
        words = program.len(),
        start_pc = %config.general.start_pc,
        "loaded program"
    );

    let mut cpu = Cpu::new(&config, &program, &data)?;

    let outcome = match cpu.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("{}", e);
            cpu.dump_state();
            cpu.stats.print();
            return Err(e);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&cpu.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("failed to serialize state: {}", e),
        }
        return Ok(());
    }

    match outcome {
        RunOutcome::Halted { pc, word, reason } => {
            println!(
                "\n[*] Halted at pc {:#010x}: word {:#010x} ({})",
                pc, word, reason
            );
        }
        RunOutcome::CycleLimit => {
            println!("\n[*] Stopped after {} cycles", cpu.stats.cycles);
        }
    }
    cpu.dump_state();
    cpu.stats.print();
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    }
}
