use std::fmt;

use log::debug;
use num_traits::Float;

use crate::error::{Result, SolveError};

use super::{complex::Complex, is_zero::{self, IsZero, Tolerance}, roots::{Degree, RootSet}};

pub type Roots<D> = RootSet<D, 2>;

pub trait Arg
: Float
+ Tolerance
+ From<f32>
+ Into<f64>
+ fmt::Debug
{}

impl Arg for f64 {}
impl Arg for f32 {}

/// Both roots of `a·x² + b·x + c`.
///
/// An `a` that is zero, or so small that `b / a` or `c / a` overflows, reduces to the linear root
/// `-c / b`, returned twice. Fails with [`SolveError::Degenerate`] when `b` is negligible in the
/// same sense.
pub fn solve_quadratic<D: Arg>(a: D, b: D, c: D) -> Result<Roots<D>> {
    if is_zero::negligible_lead(a, &[ b, c ]) {
        if is_zero::negligible_lead(b, &[ c ]) {
            debug!("solve_quadratic({:?}, {:?}, {:?}): degenerate", a, b, c);
            return Err(SolveError::Degenerate { degree: 2 });
        }
        let x = Complex::re(-c / b);
        debug!("solve_quadratic({:?}, {:?}, {:?}): linear root {:?}", a, b, c, x);
        return Ok(Roots::padded(&[ x ], Degree::Linear));
    }
    Ok(Roots::padded(&quadratic_roots(a, b, c), Degree::Quadratic))
}

/// Roots of `a·x² + b·x + c` for non-negligible `a`.
///
/// Coefficients are first divided by a power of two near the largest of them, so that `b² - 4ac`
/// neither underflows nor overflows. The larger-magnitude root comes from
/// `q = -(b + sign(b)·√D) / 2`, which never cancels, and the other from `c / q`.
pub(crate) fn quadratic_roots<D: Arg>(a: D, b: D, c: D) -> [ Complex<D>; 2 ] {
    let half: D = 0.5f32.into();
    let two: D = 2f32.into();
    let four: D = 4f32.into();
    let k = is_zero::pow2_scale(is_zero::scale(&[ a, b, c ]));
    let (a, b, c) = (a / k, b / k, c / k);
    let b2 = b * b;
    let ac4 = four * a * c;
    let mut disc = b2 - ac4;
    if disc < D::zero() && disc.is_finite() && disc.is_zero_within(D::BRANCH, b2.max(ac4.abs())) {
        disc = D::zero();
    }
    if disc >= D::zero() || disc.is_nan() {
        let sign = if b >= D::zero() { D::one() } else { -D::one() };
        let q = -half * (b + sign * disc.sqrt());
        let r1 = q / a;
        let r2 = if q == D::zero() { D::zero() } else { c / q };
        debug!("quadratic_roots({:?}, {:?}, {:?}) / {:?}: disc {:?}, reals {:?}, {:?}", a, b, c, k, disc, r1, r2);
        [ Complex::re(r1), Complex::re(r2) ]
    } else {
        let re = -b / (two * a);
        let im = (-disc).sqrt() / (two * a);
        debug!("quadratic_roots({:?}, {:?}, {:?}) / {:?}: disc {:?}, complex {:?} ± {:?}i", a, b, c, k, disc, re, im);
        Complex::conj_pair(re, im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::math::poly::{residual, residual_bound, vieta};

    use test_log::test;

    fn reals(r0: f64, r1: f64) -> Roots<f64> {
        Roots::padded(&[ Complex::re(r0), Complex::re(r1) ], Degree::Quadratic)
    }

    fn check_residuals(a: f64, b: f64, c: f64, roots: &Roots<f64>, factor: f64) {
        let coeffs = [ a, b, c ];
        for r in roots.iter() {
            let res = residual(&coeffs, *r);
            let bound = residual_bound(&coeffs, *r, factor);
            assert!(res <= bound, "residual {} > {} for root {} of {:?}", res, bound, r, coeffs);
        }
    }

    #[test]
    fn distinct_reals() {
        let roots = solve_quadratic(1., -3., 2.).unwrap();
        assert_eq!(roots.degree(), Degree::Quadratic);
        assert_relative_eq!(roots, reals(1., 2.));
        assert_eq!(roots.num_reals(), 2);
    }

    #[test]
    fn double_root() {
        let roots = solve_quadratic(1., -2., 1.).unwrap();
        assert_eq!(roots.to_vec(), vec![ Complex::re(1.); 2 ]);
        let roots = solve_quadratic(4., 4., 1.).unwrap();
        assert_relative_eq!(roots, reals(-0.5, -0.5));
    }

    #[test]
    fn rounded_double_root() {
        // b² - 4ac rounds to a tiny nonzero value; the roots stay real and within √ε of 0.1
        let roots = solve_quadratic(1., -0.2, 0.01).unwrap();
        assert!(roots.iter().all(|r| r.im == 0.));
        assert_relative_eq!(roots, reals(0.1, 0.1), max_relative = 1e-7);
    }

    #[test]
    fn complex_pair() {
        let roots = solve_quadratic(1., 0., 1.).unwrap();
        assert_eq!(roots.to_vec(), vec![ Complex::new(0., 1.), Complex::new(0., -1.) ]);
        assert_eq!(roots.num_reals(), 0);

        // 2x² - 4x + 10: 1 ± 2i
        let roots = solve_quadratic(2., -4., 10.).unwrap();
        assert_relative_eq!(roots[0], Complex::new(1., 2.));
        assert_eq!(roots[1], roots[0].conj());

        // Negative leading coefficient: conjugates either way round
        let roots = solve_quadratic(-1., 0., -4.).unwrap();
        assert_relative_eq!(roots, Roots::padded(&Complex::conj_pair(0., 2.), Degree::Quadratic));
    }

    #[test]
    fn zero_constant() {
        let roots = solve_quadratic(2., -6., 0.).unwrap();
        assert_eq!(roots.sorted().to_vec(), vec![ Complex::re(0.), Complex::re(3.) ]);
        let roots = solve_quadratic(3., 0., 0.).unwrap();
        assert_eq!(roots.to_vec(), vec![ Complex::re(0.); 2 ]);
    }

    #[test]
    fn linear() {
        let roots = solve_quadratic(0., 5., 10.).unwrap();
        assert_eq!(roots.degree(), Degree::Linear);
        assert_eq!(roots.to_vec(), vec![ Complex::re(-2.); 2 ]);
        assert_eq!(roots.effective(), &[ Complex::re(-2.) ]);

        // Leading coefficient so small that `b / a` overflows
        let roots = solve_quadratic(1e-310, 2., -1.).unwrap();
        assert_eq!(roots.degree(), Degree::Linear);
        assert_eq!(roots[0], Complex::re(0.5));

        let roots = solve_quadratic(0., 1., 3.).unwrap();
        assert_eq!(roots.effective(), &[ Complex::re(-3.) ]);
    }

    #[test]
    fn small_leading_coefficient() {
        // Both roots are representable, so the quadratic term is kept
        let roots = solve_quadratic(1e-20, 2., -1.).unwrap();
        assert_eq!(roots.degree(), Degree::Quadratic);
        assert_relative_eq!(roots, reals(-2e20, 0.5), max_relative = 1e-14);
        check_residuals(1e-20, 2., -1., &roots, 4.);
    }

    #[test]
    fn degenerate() {
        for c in [ 0., 1., -7.5, 1e300 ] {
            assert_eq!(solve_quadratic(0., 0., c), Err(SolveError::Degenerate { degree: 2 }));
        }
        assert_eq!(solve_quadratic(1e-320, -1e-320, 1.), Err(SolveError::Degenerate { degree: 2 }));
    }

    #[test]
    fn cancellation() {
        let roots = solve_quadratic(1., 1e8, 1.).unwrap().sorted();
        assert_relative_eq!(roots[0].re, -1e8, max_relative = 1e-15);
        assert_relative_eq!(roots[1].re, -1e-8, max_relative = 1e-15);
        check_residuals(1., 1e8, 1., &roots, 4.);

        let roots = solve_quadratic(1., -1e8, 1.).unwrap().sorted();
        assert_relative_eq!(roots[0].re, 1e-8, max_relative = 1e-15);
        assert_relative_eq!(roots[1].re, 1e8, max_relative = 1e-15);
        check_residuals(1., -1e8, 1., &roots, 4.);
    }

    #[test]
    fn wide_magnitudes() {
        // x² + 1e17·x + 1
        let roots = solve_quadratic(1., 1e17, 1.).unwrap();
        assert_relative_eq!(roots, reals(-1e17, -1e-17), max_relative = 1e-15);
        check_residuals(1., 1e17, 1., &roots, 4.);

        // x² - x, and its reversal -x + 1 with a zero constant
        let roots = solve_quadratic(1., -1., 0.).unwrap();
        assert_eq!(roots.sorted().to_vec(), vec![ Complex::re(0.), Complex::re(1.) ]);
        for r in roots.iter() {
            assert_eq!(residual(&[ 1., -1., 0. ], *r), 0.);
        }
    }

    #[test]
    fn scale_invariance() {
        let half_sqrt3 = 3f64.sqrt() / 2.;
        for scale in [ 1e-300, 1e-200, 1e-5, -3., 1e5, 1e200, 1e300 ] {
            // x² + x + 1: -1/2 ± (√3/2)i
            let roots = solve_quadratic(scale, scale, scale).unwrap();
            assert_eq!(roots.num_reals(), 0, "{:e}: {:?}", scale, roots);
            assert_relative_eq!(roots, Roots::padded(&Complex::conj_pair(-0.5, half_sqrt3), Degree::Quadratic), max_relative = 1e-14);

            // x² - 3x + 2
            let roots = solve_quadratic(scale, -3. * scale, 2. * scale).unwrap();
            assert_relative_eq!(roots, reals(1., 2.), max_relative = 1e-14);
        }
    }

    #[test]
    fn non_finite_propagates() {
        let roots = solve_quadratic(1., f64::NAN, 1.).unwrap();
        assert!(roots.iter().all(|r| r.re.is_nan()));
        let roots = solve_quadratic(f64::INFINITY, 1., 1.).unwrap();
        assert!(roots.iter().any(|r| !r.is_finite()));
    }

    #[test]
    fn single_precision() {
        let roots = solve_quadratic(1f32, -3., 2.).unwrap();
        assert_relative_eq!(roots, Roots::padded(&[ Complex::re(1f32), Complex::re(2.) ], Degree::Quadratic));
    }

    #[test]
    fn sweep() {
        let vals = [ -1e3, -10., -1., -0.1, 0., 0.1, 1., 10., 1e3 ];
        for (i, &r0) in vals.iter().enumerate() {
            for &r1 in &vals[i..] {
                for scale in [ 1e-3, 1., -7., 1e4 ] {
                    let [ a, b, c ] = [ 1., -(r0 + r1), r0 * r1 ].map(|c| c * scale);
                    let roots = solve_quadratic(a, b, c).unwrap();
                    assert_relative_eq!(roots, reals(r0, r1), max_relative = 1e-7, epsilon = 1e-7);
                    check_residuals(a, b, c, &roots, 32.);
                    assert!(vieta(&[ a, b, c ], roots.effective()) <= 1e-12 * (1. + (r0 * r1).abs() + (r0 + r1).abs()));
                }
            }
        }
    }

    #[test]
    fn complex_sweep() {
        let vals = [ -10., -1., -0.1, 0., 0.1, 1., 10. ];
        for re in vals {
            for im in [ 0.1, 1., 10. ] {
                let [ z0, z1 ] = Complex::conj_pair(re, im);
                let [ a, b, c ] = [ 1., -2. * re, re * re + im * im ];
                let roots = solve_quadratic(a, b, c).unwrap();
                assert_relative_eq!(roots, Roots::padded(&[ z0, z1 ], Degree::Quadratic), max_relative = 1e-10, epsilon = 1e-10);
                assert_eq!(roots[0], roots[1].conj());
                check_residuals(a, b, c, &roots, 32.);
            }
        }
    }
}
