//! Closed-form solvers for quadratic and cubic equations with real coefficients.
//!
//! Both solvers return every root, real or complex, with multiplicity:
//!
//! ```
//! use cubic_core::{solve_cubic, Complex};
//!
//! let roots = solve_cubic(1f64, -6., 11., -6.).unwrap().sorted();
//! assert!((roots[0].re - 1.).abs() < 1e-12);
//! assert!(roots.iter().all(Complex::is_real));
//! ```
//!
//! A leading coefficient that is zero, or too small to divide the others by without overflow,
//! reduces the effective degree (cubic → quadratic → linear); an input with no non-constant term
//! fails with [`SolveError::Degenerate`].

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod error;
pub mod math;

pub use error::{Result, SolveError};
pub use math::complex::Complex;
pub use math::cubic::solve_cubic;
pub use math::is_zero::Tolerance;
pub use math::poly::{eval, residual, residual_bound, vieta};
pub use math::quadratic::{solve_quadratic, Arg};
pub use math::roots::{Degree, RootSet};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: &str) -> std::result::Result<log::LevelFilter, String> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "error" => Ok(log::LevelFilter::Error),
        "warn" => Ok(log::LevelFilter::Warn),
        "info" | "" => Ok(log::LevelFilter::Info),
        "debug" => Ok(log::LevelFilter::Debug),
        "trace" => Ok(log::LevelFilter::Trace),
        level => Err(format!("invalid log level: {}", level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level("warn"), Ok(log::LevelFilter::Warn));
        assert_eq!(parse_log_level(""), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level("loud"), Err("invalid log level: loud".to_string()));
    }
}
