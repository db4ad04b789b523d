//! `verify-toffoli` binary: checks the black-box Toffoli decomposition.
//!
//! Without arguments it fills the two black boxes with U3(π/2, 0, π) and
//! U3(0, 0, -π/4) and prints the unitary check, both truth tables and a
//! PASS/FAIL summary.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | PASS: unitaries agree up to phase and truth tables match |
//! | 1    | FAIL: at least one check did not pass |
//! | 2    | ERROR: invalid arguments or ambiguous outcome in strict mode |
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin verify-toffoli
//!
//! # Try other black-box angles
//! cargo run --bin verify-toffoli -- --first 0,0,-pi/4 --second pi/2,0,pi
//!
//! # Fail when an output is not a basis state
//! cargo run --bin verify-toffoli -- --min-dominance 0.99
//! ```

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use toffoli_verify::config::{U3Angles, VerifyConfig, DEFAULT_ATOL};
use toffoli_verify::task;
use toffoli_verify::verification::{exit_code, EXIT_ERROR};

#[derive(Parser, Debug)]
#[command(
    name = "verify-toffoli",
    version,
    about = "Check a Clifford+T decomposition with two black-box U3 gates against CCX",
    long_about = None,
)]
struct Args {
    /// Angles θ,φ,λ of the first black box, e.g. `pi/2,0,pi`
    #[arg(long, default_value = "pi/2,0,pi", value_parser = parse_angles, allow_hyphen_values = true)]
    first: U3Angles,

    /// Angles θ,φ,λ of the second black box, e.g. `0,0,-pi/4`
    #[arg(long, default_value = "0,0,-pi/4", value_parser = parse_angles, allow_hyphen_values = true)]
    second: U3Angles,

    /// Absolute tolerance of the unitary comparison
    #[arg(long, default_value_t = DEFAULT_ATOL)]
    atol: f64,

    /// Fail when an output's most likely basis state is below this probability
    #[arg(long)]
    min_dominance: Option<f64>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_angles(s: &str) -> Result<U3Angles, String> {
    s.parse().map_err(|e: toffoli_verify::QuantumError| e.to_string())
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::WARN))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = VerifyConfig {
        first: args.first,
        second: args.second,
        atol: args.atol,
        min_dominance: args.min_dominance,
    };

    let outcome = task::verify(&config);

    match &outcome {
        Ok(report) if args.json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("ERROR: {e}");
                std::process::exit(EXIT_ERROR);
            }
        },
        Ok(report) => print!("{report}"),
        Err(e) => eprintln!("ERROR: {e}"),
    }

    std::process::exit(exit_code(&outcome));
}
