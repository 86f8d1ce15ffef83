//! The solvers a comparison run drives: the closed-form solver under test, and two references.

use cubic_core::{solve_cubic, solve_quadratic, Complex};
use nalgebra::{Matrix2, Matrix3};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Solver {
    /// `cubic_core`'s closed-form solvers
    ClosedForm,
    /// Eigenvalues of the companion matrix; general-purpose, returns complex roots too
    Companion,
    /// The `roots` crate; real roots only
    RootsCrate,
}

pub static SOLVERS: [ Solver; 3 ] = [ Solver::ClosedForm, Solver::Companion, Solver::RootsCrate ];

impl Solver {
    pub fn name(&self) -> &'static str {
        match self {
            Solver::ClosedForm => "Closed-form",
            Solver::Companion => "Companion",
            Solver::RootsCrate => "roots crate",
        }
    }

    /// Roots of the polynomial with `coeffs` (highest-degree first, 3 or 4 of them), or `None`
    /// when this solver has no root set for it.
    pub fn solve(&self, coeffs: &[ f64 ]) -> Option<Vec<Complex<f64>>> {
        match self {
            Solver::ClosedForm => closed_form(coeffs),
            Solver::Companion => companion(coeffs),
            Solver::RootsCrate => roots_crate(coeffs).map(|rs| rs.into_iter().map(Complex::re).collect()),
        }
    }
}

/// Effective roots from [`solve_quadratic`] / [`solve_cubic`]; `None` on a degenerate input.
pub fn closed_form(coeffs: &[ f64 ]) -> Option<Vec<Complex<f64>>> {
    match *coeffs {
        [ a, b, c ] => solve_quadratic(a, b, c).ok().map(|roots| roots.effective().to_vec()),
        [ a, b, c, d ] => solve_cubic(a, b, c, d).ok().map(|roots| roots.effective().to_vec()),
        _ => None,
    }
}

/// Eigenvalues of the monic polynomial's companion matrix.
pub fn companion(coeffs: &[ f64 ]) -> Option<Vec<Complex<f64>>> {
    let (&lead, rest) = coeffs.split_first()?;
    if lead == 0. {
        return None;
    }
    let monic: Vec<f64> = rest.iter().map(|c| c / lead).collect();
    let eigenvalues: Vec<nalgebra::Complex<f64>> = match monic.as_slice() {
        [ c1, c0 ] => Matrix2::new(
            -c1, -c0,
            1., 0.,
        ).complex_eigenvalues().iter().cloned().collect(),
        [ c2, c1, c0 ] => Matrix3::new(
            -c2, -c1, -c0,
            1., 0., 0.,
            0., 1., 0.,
        ).complex_eigenvalues().iter().cloned().collect(),
        _ => return None,
    };
    Some(eigenvalues.into_iter().map(|z| Complex::new(z.re, z.im)).collect())
}

/// Real roots from the `roots` crate.
pub fn roots_crate(coeffs: &[ f64 ]) -> Option<Vec<f64>> {
    match *coeffs {
        [ a, b, c ] => Some(roots::find_roots_quadratic(a, b, c).as_ref().to_vec()),
        [ a, b, c, d ] => Some(roots::find_roots_cubic(a, b, c, d).as_ref().to_vec()),
        _ => None,
    }
}
