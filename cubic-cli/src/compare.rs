//! Drive the closed-form solver with random coefficient vectors, and compare its residuals against
//! general-purpose root finders.

use std::fmt;

use cubic_core::{residual, Complex};
use log::{debug, info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::{solvers::{Solver, SOLVERS}, stats::Residuals};

#[derive(Clone, Debug)]
pub struct Config {
    /// 2 or 3
    pub degree: usize,
    /// Coefficients (or roots, with `real_roots`) are drawn uniformly from `[-max, max]`
    pub max: f64,
    /// Polynomials per run
    pub n: usize,
    pub runs: usize,
    pub seed: u64,
    /// Build each polynomial from `degree` uniformly drawn real roots, instead of drawing its
    /// coefficients directly
    pub real_roots: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolverReport {
    pub solver: Solver,
    pub residuals: Residuals,
    /// Polynomials the solver returned no root set for
    pub unsolved: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub run: usize,
    pub n: usize,
    pub max: f64,
    pub solvers: Vec<SolverReport>,
    /// Polynomials where the closed-form and companion solvers disagree on the number of real roots
    pub real_count_mismatches: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm comparison | Run {} | N {} | Max {:.2e}:", self.run, self.n, self.max)?;
        for report in &self.solvers {
            writeln!(f, "{:<12} | {} | Unsolved: {}", report.solver.name(), report.residuals, report.unsolved)?;
        }
        write!(f, "Real-root count mismatches: {}", self.real_count_mismatches)
    }
}

/// Coefficients (highest-degree first) of `lead · Π (x - rᵢ)`.
pub fn coeffs_from_roots(lead: f64, roots: &[ f64 ]) -> Vec<f64> {
    let mut coeffs = vec![ lead ];
    for r in roots {
        let mut next = coeffs.clone();
        next.push(0.);
        for (i, c) in coeffs.iter().enumerate() {
            next[i + 1] -= r * c;
        }
        coeffs = next;
    }
    coeffs
}

pub fn generate(rng: &mut StdRng, config: &Config) -> Vec<Vec<f64>> {
    let max = config.max;
    (0..config.n).map(|_| {
        if config.real_roots {
            let lead = rng.gen_range(-max..=max);
            let roots: Vec<f64> = (0..config.degree).map(|_| rng.gen_range(-max..=max)).collect();
            coeffs_from_roots(lead, &roots)
        } else {
            (0..=config.degree).map(|_| rng.gen_range(-max..=max)).collect()
        }
    }).collect()
}

fn num_reals(roots: &[ Complex<f64> ]) -> usize {
    roots.iter().filter(|r| r.is_real()).count()
}

/// Solve every polynomial with every solver, and summarize residuals per solver.
pub fn run_once(run: usize, polys: &[ Vec<f64> ], max: f64) -> RunReport {
    // Each entry holds one polynomial's root sets, in `SOLVERS` order
    let solved: Vec<Vec<Option<Vec<Complex<f64>>>>> = polys
        .par_iter()
        .map(|coeffs| SOLVERS.iter().map(|solver| solver.solve(coeffs)).collect())
        .collect();

    let mut real_count_mismatches = 0;
    for (coeffs, roots) in polys.iter().zip(solved.iter()) {
        if let [ Some(closed_form), Some(companion), .. ] = roots.as_slice() {
            if num_reals(closed_form) != num_reals(companion) {
                warn!("Mismatch in number of real roots for polynomial {:?} | Out: {:?} | Ans: {:?}", coeffs, closed_form, companion);
                real_count_mismatches += 1;
            }
        }
    }

    let solvers = SOLVERS.iter().enumerate().map(|(idx, solver)| {
        let mut unsolved = 0;
        let mut values = vec![];
        for (coeffs, roots) in polys.iter().zip(solved.iter()) {
            match &roots[idx] {
                Some(roots) => values.extend(roots.iter().map(|r| residual(coeffs, *r))),
                None => {
                    debug!("{}: no roots for {:?}", solver.name(), coeffs);
                    unsolved += 1;
                },
            }
        }
        SolverReport { solver: *solver, residuals: Residuals::new(&values), unsolved }
    }).collect();

    RunReport { run, n: polys.len(), max, solvers, real_count_mismatches }
}

pub fn run(config: &Config) -> Vec<RunReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.runs).map(|run| {
        let polys = generate(&mut rng, config);
        info!("run {}: solving {} degree-{} polynomials", run, polys.len(), config.degree);
        run_once(run, &polys, config.max)
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn config(degree: usize, real_roots: bool) -> Config {
        Config { degree, max: 1e2, n: 500, runs: 2, seed: 5098359162415, real_roots }
    }

    #[test]
    fn expand_roots() {
        assert_eq!(coeffs_from_roots(1., &[ 1., 2., 3. ]), vec![ 1., -6., 11., -6. ]);
        assert_eq!(coeffs_from_roots(2., &[ -1., 1. ]), vec![ 2., 0., -2. ]);
        assert_eq!(coeffs_from_roots(5., &[]), vec![ 5. ]);
    }

    #[test]
    fn generate_shapes() {
        let mut rng = StdRng::seed_from_u64(1);
        for (degree, real_roots) in [ (2, false), (3, false), (3, true) ] {
            let polys = generate(&mut rng, &config(degree, real_roots));
            assert_eq!(polys.len(), 500);
            assert!(polys.iter().all(|p| p.len() == degree + 1));
        }
        let polys = generate(&mut rng, &config(3, false));
        assert!(polys.iter().flatten().all(|c| c.abs() <= 1e2));
    }

    #[test]
    fn deterministic() {
        let config = config(3, false);
        assert_eq!(run(&config), run(&config));
    }

    #[test]
    fn cubic_reports() {
        let reports = run(&config(3, false));
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.n, 500);
            let solvers: Vec<Solver> = report.solvers.iter().map(|s| s.solver).collect();
            assert_eq!(solvers, SOLVERS.to_vec());
            let closed_form = &report.solvers[0];
            assert_eq!(closed_form.unsolved, 0);
            assert_eq!(closed_form.residuals.count, 3 * 500);
            assert!(closed_form.residuals.max.is_finite());
            assert!(closed_form.residuals.mean <= closed_form.residuals.max);
            let companion = &report.solvers[1];
            assert_eq!(companion.residuals.count, 3 * 500);
        }
    }

    #[test]
    fn real_rooted_quadratics() {
        let reports = run(&config(2, true));
        for report in &reports {
            assert_eq!(report.real_count_mismatches, 0, "{}", report);
            let roots_crate = &report.solvers[2];
            assert_eq!(roots_crate.solver, Solver::RootsCrate);
            assert_eq!(roots_crate.residuals.count, 2 * 500);
        }
    }

    #[test]
    fn display() {
        let report = RunReport {
            run: 0,
            n: 1,
            max: 1e5,
            solvers: vec![ SolverReport { solver: Solver::ClosedForm, residuals: Residuals::new(&[ 0.5 ]), unsolved: 0 } ],
            real_count_mismatches: 0,
        };
        assert_eq!(
            report.to_string(),
            "Algorithm comparison | Run 0 | N 1 | Max 1.00e5:\n\
             Closed-form  | MAE: 0.5000000000000000 | MAE Std: 0.0000000000000000 | EMax: 0.5000000000000000 | Roots: 1 | Unsolved: 0\n\
             Real-root count mismatches: 0",
        );
    }
}
