//! CLI for the closed-form quadratic and cubic solvers.
//!
//! Provides:
//! - Solving a single quadratic or cubic from its coefficients
//! - Comparing the closed-form solvers' residuals against general-purpose root finders, over
//!   random polynomials

mod compare;
mod solvers;
mod stats;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use cubic_core::{parse_log_level, solve_cubic, solve_quadratic, RootSet};
use log::{info, LevelFilter};

#[derive(Parser)]
#[command(name = "cubic")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CUBIC_BUILD_SHA"), ")"))]
#[command(about = "Closed-form quadratic and cubic solver", long_about = None)]
struct Cli {
    /// Log level: off, error, warn, info, debug, trace (overrides RUST_LOG)
    #[arg(short, long, global = true, value_parser = parse_log_level)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a quadratic (3 coefficients) or cubic (4 coefficients), highest-degree first
    Solve {
        #[arg(num_args = 3..=4, required = true, allow_negative_numbers = true)]
        coeffs: Vec<f64>,

        /// Print roots as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Compare residuals of the closed-form solver and reference solvers on random polynomials
    Compare {
        /// Polynomial degree
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u8).range(2..=3))]
        degree: u8,

        /// Coefficients (or roots, with --real-roots) are drawn uniformly from [-max, max]
        #[arg(short, long, default_value = "100000")]
        max: f64,

        /// Polynomials per run
        #[arg(short, default_value = "100000")]
        n: usize,

        /// Number of runs
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// RNG seed
        #[arg(short, long, default_value = "5098359162415")]
        seed: u64,

        /// Generate polynomials from uniformly drawn real roots
        #[arg(long)]
        real_roots: bool,

        /// Print reports as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn print_roots<const N: usize>(roots: &RootSet<f64, N>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(roots)?);
    } else {
        println!("{:?}: {}", roots.degree(), roots);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = cli.log_level {
        logger.filter_level(level);
    }
    logger.init();

    match cli.command {
        Commands::Solve { coeffs, json } => {
            match *coeffs.as_slice() {
                [ a, b, c ] => print_roots(&solve_quadratic(a, b, c)?, json)?,
                [ a, b, c, d ] => print_roots(&solve_cubic(a, b, c, d)?, json)?,
                _ => bail!("expected 3 or 4 coefficients, got {}", coeffs.len()),
            }
        }
        Commands::Compare { degree, max, n, runs, seed, real_roots, json } => {
            if !(max.is_finite() && max > 0.) {
                bail!("--max must be positive and finite, got {}", max);
            }
            let config = compare::Config { degree: degree as usize, max, n, runs, seed, real_roots };
            info!("Comparing solvers: {:?}", config);
            let reports = compare::run(&config);
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}", report);
                }
            }
        }
    }
    Ok(())
}
