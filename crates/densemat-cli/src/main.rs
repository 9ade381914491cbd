//! densemat - dense matrix toolbox
//!
//! Usage:
//!   densemat det --matrix "1,2;3,4"                 # Determinant
//!   densemat invert --matrix "4,7;2,6" --verify     # Inverse, checked against I
//!   densemat multiply --left "1,2;3,4" --right "5;6"
//!   densemat transpose --matrix "1,2,3;4,5,6"
//!   densemat normalize AAPL_data.csv --method zscore
//!   densemat train-xor --epochs 1000 --seed 42

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod literal;
mod output;

use commands::normalize::Method;
use commands::{det, invert, multiply, normalize, train_xor, transpose};

/// densemat - dense matrices over integers and floats
///
/// Matrix literals separate rows with ';' and values with ','.
#[derive(Parser)]
#[command(name = "densemat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Determinant of a square matrix
    Det {
        /// Matrix literal, e.g. "1,2;3,4"
        #[arg(short, long)]
        matrix: String,
    },

    /// Inverse of a square matrix
    Invert {
        /// Matrix literal, e.g. "4,7;2,6"
        #[arg(short, long)]
        matrix: String,

        /// Check that A * A^-1 is the identity
        #[arg(long)]
        verify: bool,
    },

    /// Matrix product LEFT * RIGHT
    Multiply {
        /// Left operand literal
        #[arg(short, long)]
        left: String,

        /// Right operand literal
        #[arg(short, long)]
        right: String,
    },

    /// Transpose of a matrix
    Transpose {
        /// Matrix literal
        #[arg(short, long)]
        matrix: String,
    },

    /// Load a stock CSV and normalize its open/high/low/close/volume features
    Normalize {
        /// Path to a Date,Open,High,Low,Close[,Adj Close],Volume CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Normalization method
        #[arg(long, value_enum, default_value = "minmax")]
        method: Method,

        /// Largest price accepted as valid
        #[arg(long)]
        max_price: Option<f64>,

        /// Write the fitted parameters as JSON to this path
        #[arg(long, value_name = "PATH")]
        save_params: Option<PathBuf>,
    },

    /// Train the single-layer sigmoid network on XOR
    TrainXor {
        /// Number of passes over the four samples
        #[arg(long, default_value_t = 1000)]
        epochs: usize,

        /// Delta-rule learning rate
        #[arg(long, default_value_t = 0.5)]
        learning_rate: f64,

        /// Seed for weight initialization
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Det { matrix } => det::run(&matrix, cli.json),

        Commands::Invert { matrix, verify } => invert::run(&matrix, verify, cli.json),

        Commands::Multiply { left, right } => multiply::run(&left, &right, cli.json),

        Commands::Transpose { matrix } => transpose::run(&matrix, cli.json),

        Commands::Normalize {
            file,
            method,
            max_price,
            save_params,
        } => normalize::run(
            &file,
            method,
            max_price,
            save_params.as_deref(),
            cli.json,
            cli.quiet,
        ),

        Commands::TrainXor {
            epochs,
            learning_rate,
            seed,
        } => train_xor::run(epochs, learning_rate, seed, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["densemat", "det", "-m", "1,2;3,4", "--json"]).expect("valid");
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Det { .. }));
    }

    #[test]
    fn test_parse_normalize_method() {
        let cli = Cli::try_parse_from(["densemat", "normalize", "a.csv", "--method", "zscore"])
            .expect("valid");
        match cli.command {
            Commands::Normalize { method, file, .. } => {
                assert_eq!(method, Method::Zscore);
                assert_eq!(file, PathBuf::from("a.csv"));
            }
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["densemat", "-v", "-q", "train-xor"]).is_err());
    }
}
