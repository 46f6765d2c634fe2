//! Branch predictor simulator CLI.
//!
//! This binary provides a single entry point for trace-driven simulation. It performs:
//! 1. **Trace loading:** Parse a text trace of retired branches.
//! 2. **Simulation:** Run the configured predictor over the trace in retirement order.
//! 3. **Reporting:** Print sectioned statistics, emit JSON, or write a result file.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::{fs, process};

use bpsim_core::config::{Config, PredictorKind};
use bpsim_core::sim::loader;
use bpsim_core::sim::Simulation;

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "Trace-driven branch predictor simulator",
    long_about = "Run a branch predictor over a trace of retired conditional branches.\n\nA trace is a text file with one `<address> <outcome>` pair per line.\n\nExamples:\n  bpsim run -f traces/gcc.txt\n  bpsim run -f traces/gcc.txt -p tournament -o result.out\n  bpsim run -f traces/gcc.txt -c config.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a predictor over a branch trace.
    Run {
        /// Trace file to simulate.
        #[arg(short, long)]
        file: String,

        /// Predictor algorithm (overrides the config file).
        #[arg(short, long, value_enum)]
        predictor: Option<PredictorArg>,

        /// JSON configuration file (defaults are used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Write the result file (four counters plus correctness).
        #[arg(short, long)]
        output: Option<String>,

        /// Print the report as JSON instead of the sectioned summary.
        #[arg(long)]
        json: bool,
    },
}

/// Predictor selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PredictorArg {
    /// Always predict not-taken.
    Static,
    /// Per-address saturating bias.
    Bimodal,
    /// Global history, XOR-folded with the address.
    Gshare,
    /// Per-address history patterns.
    Local,
    /// Meta-predicted gshare/local hybrid.
    Tournament,
}

impl From<PredictorArg> for PredictorKind {
    fn from(arg: PredictorArg) -> Self {
        match arg {
            PredictorArg::Static => Self::Static,
            PredictorArg::Bimodal => Self::Bimodal,
            PredictorArg::Gshare => Self::GShare,
            PredictorArg::Local => Self::Local,
            PredictorArg::Tournament => Self::Tournament,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            predictor,
            config,
            output,
            json,
        } => cmd_run(&file, predictor, config, output, json),
    }
}

/// Runs the simulator: loads the trace, drives the predictor, reports.
///
/// Exits the process with code 1 on unreadable traces, bad configuration,
/// or output-file errors.
fn cmd_run(
    file: &str,
    predictor: Option<PredictorArg>,
    config_path: Option<String>,
    output: Option<String>,
    json: bool,
) {
    let mut config = config_path.map_or_else(Config::default, |path| load_config(&path));
    if let Some(arg) = predictor {
        config.predictor = arg.into();
    }

    let events = loader::read_trace(file).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not load trace '{}': {}", file, e);
        process::exit(1);
    });

    let mut sim = Simulation::new(&config).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Invalid predictor configuration: {}", e);
        process::exit(1);
    });

    println!(
        "[*] Simulating {} branch events with the {:?} predictor",
        events.len(),
        config.predictor
    );
    sim.run(events);

    if json {
        match serde_json::to_string_pretty(&sim.report()) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("\n[!] FATAL: Could not serialize report: {}", e);
                process::exit(1);
            }
        }
    } else {
        sim.accumulator().print();
    }

    if let Some(path) = output {
        write_result_file(&path, &sim);
        println!("[*] Result written to {}", path);
    }
}

/// Reads and deserializes a JSON configuration file.
///
/// Exits the process with code 1 when the file is unreadable or malformed.
fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read config '{}': {}", path, e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not parse config '{}': {}", path, e);
        process::exit(1);
    })
}

/// Writes the result file in the four-counter format.
///
/// Exits the process with code 1 when the file cannot be written.
fn write_result_file(path: &str, sim: &Simulation) {
    let mut file = fs::File::create(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not create '{}': {}", path, e);
        process::exit(1);
    });
    sim.accumulator().write_result(&mut file).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not write '{}': {}", path, e);
        process::exit(1);
    });
    file.flush().unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not flush '{}': {}", path, e);
        process::exit(1);
    });
}
