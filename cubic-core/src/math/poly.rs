//! Evaluation of real-coefficient polynomials at complex points, and the residual / Vieta checks
//! used to judge a solve.
//!
//! Coefficients are always highest-degree first: `[a, b, c, d]` is `a·x³ + b·x² + c·x + d`.

use num_traits::Float;

use super::{complex::Complex, is_zero::scale};

/// Horner evaluation of `coeffs` at `x`.
pub fn eval<D: Float>(coeffs: &[ D ], x: Complex<D>) -> Complex<D> {
    coeffs.iter().fold(Complex::re(D::zero()), |acc, c| acc * x + *c)
}

/// `|p(x)|`
pub fn residual<D: Float>(coeffs: &[ D ], x: Complex<D>) -> D {
    eval(coeffs, x).norm()
}

/// Bound on a root's residual that scales with the coefficient and root magnitudes:
/// `factor · ε · max|coeffs| · (1 + |x|)ⁿ` for a degree-`n` polynomial.
pub fn residual_bound<D: Float>(coeffs: &[ D ], x: Complex<D>, factor: D) -> D {
    let n = coeffs.len().saturating_sub(1) as i32;
    factor * D::epsilon() * scale(coeffs) * (D::one() + x.norm()).powi(n)
}

/// Elementary symmetric polynomials `e₁ … eₙ` of `roots`.
pub fn elementary_symmetric<D: Float>(roots: &[ Complex<D> ]) -> Vec<Complex<D>> {
    let zero = Complex::re(D::zero());
    let mut e = vec![ zero; roots.len() + 1 ];
    e[0] = Complex::re(D::one());
    for (i, r) in roots.iter().enumerate() {
        for k in (1..=i + 1).rev() {
            e[k] = e[k] + e[k - 1] * *r;
        }
    }
    e.split_off(1)
}

/// Largest discrepancy between Vieta's relations for `roots` and the coefficient ratios of the
/// polynomial they came from.
///
/// `coeffs` must describe the *effective* polynomial: its leading coefficient is the one the roots
/// were solved against, and `coeffs.len() == roots.len() + 1`. The relation checked for the `k`-th
/// symmetric polynomial is `eₖ = (-1)ᵏ · coeffs[k] / coeffs[0]`.
pub fn vieta<D: Float>(coeffs: &[ D ], roots: &[ Complex<D> ]) -> D {
    let lead = coeffs[0];
    elementary_symmetric(roots)
        .into_iter()
        .zip(coeffs[1..].iter())
        .enumerate()
        .map(|(k, (e, c))| {
            let sign = if k % 2 == 0 { -D::one() } else { D::one() };
            (e - Complex::re(sign * *c / lead)).norm()
        })
        .fold(D::zero(), D::max)
}

/// Coefficients with negligible leading entries removed, matching a root set's effective degree.
pub fn effective_coeffs<D: Float>(coeffs: &[ D ], degree: usize) -> &[ D ] {
    &coeffs[coeffs.len() - degree - 1..]
}
