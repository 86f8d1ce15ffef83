use std::cmp::Ordering;

use log::debug;

use crate::error::{Result, SolveError};

use super::{
    cbrt::cbrt,
    complex::Complex,
    is_zero::{self, IsZero},
    quadratic::{self, Arg},
    roots::{Degree, RootSet},
};

pub type Roots<D> = RootSet<D, 3>;

/// All three roots of `a·x³ + b·x² + c·x + d`.
///
/// An `a` that is zero, or so small that dividing `b`, `c` or `d` by it overflows, cascades down to
/// [`quadratic::solve_quadratic`] on `(b, c, d)`, then to the linear root; the effective degree is
/// reported by [`RootSet::degree`] and the unused slots repeat the last effective root. Fails with
/// [`SolveError::Degenerate`] when `a`, `b` and `c` are all negligible.
pub fn solve_cubic<D: Arg>(a: D, b: D, c: D, d: D) -> Result<Roots<D>> {
    if is_zero::negligible_lead(a, &[ b, c, d ]) {
        let roots = quadratic::solve_quadratic(b, c, d).map_err(|_| SolveError::Degenerate { degree: 3 })?;
        debug!("solve_cubic({:?}, {:?}, {:?}, {:?}): {:?} after dropping leading coefficient", a, b, c, d, roots.degree());
        return Ok(Roots::padded(roots.effective(), roots.degree()));
    }
    if d == D::zero() {
        // x = 0 is a root; divide it out
        let [ r1, r2 ] = quadratic::quadratic_roots(a, b, c);
        debug!("solve_cubic({:?}, {:?}, {:?}, {:?}): zero root, then {:?}, {:?}", a, b, c, d, r1, r2);
        return Ok(Roots::padded(&[ Complex::re(D::zero()), r1, r2 ], Degree::Cubic));
    }
    Ok(Roots::padded(&cubic_scaled(b / a, c / a, d / a), Degree::Cubic))
}

/// Roots of the monic `x³ + a1·x² + a2·x + a3`.
///
/// The cubic is first rescaled (`x = k·y`, with `k` a power of two near the root magnitude) so that
/// the branch quantities below stay finite. Substituting `y = t - a1/3` then gives the depressed
/// `t³ + p·t + q`, whose discriminant-like `h = (q/2)² + (p/3)³` selects the branch: a triple root
/// when `p` and `q` vanish, three real roots (trigonometric) when `h <= 0`, and otherwise one real
/// root and a conjugate pair (Cardano). Roots much smaller than the largest are recomputed from
/// Vieta's relations, since the shift by `a1/3` wipes out their low-order digits.
pub fn cubic_scaled<D: Arg>(a1: D, a2: D, a3: D) -> [ Complex<D>; 3 ] {
    let two: D = 2f32.into();
    let three: D = 3f32.into();

    // Magnitude of the roots, which sets the scale that rounding errors in `p` and `q` are relative to
    let s = (a1 / three).abs().max(a2.abs().sqrt()).max(a3.abs().cbrt());
    let k = is_zero::pow2_scale(s);
    let (a1, a2, a3, s) = (a1 / k, a2 / k / k, a3 / k / k / k, s / k);

    let a13 = a1 / three;
    let p = a2 - a1 * a13;
    let q = two * a13 * a13 * a13 - a13 * a2 + a3;
    let half_q = q / two;
    let p3 = p / three;
    let hq2 = half_q * half_q;
    let p33 = p3 * p3 * p3;
    let h = hq2 + p33;
    let s2 = s * s;
    debug!("cubic_scaled({:?}, {:?}, {:?}) / {:?}: p {:?}, q {:?}, h {:?}, s {:?}", a1, a2, a3, k, p, q, h, s);

    let roots = if p.is_zero_within(D::BRANCH, s2) && q.is_zero_within(D::BRANCH, s2 * s) {
        let r = -cbrt(a3);
        debug!("  triple root {:?}", r);
        [ Complex::re(r); 3 ]
    } else if p < D::zero() && h.le_zero_within(D::BRANCH, hq2.max(p33.abs())) {
        refine_reals(depressed_trig(p3, half_q).map(|t| t - a13), a2, a3)
    } else {
        let (re, pair) = depressed_cardano(p3, half_q, h);
        refine_mixed(re - a13, pair.map(|t| t - a13), a2, a3)
    };
    roots.map(|r| r * k)
}

/// Three real roots of `t³ + p·t + q` (`p < 0`, `h <= 0`), from `p/3` and `q/2`.
fn depressed_trig<D: Arg>(p3: D, half_q: D) -> [ D; 3 ] {
    let two: D = 2f32.into();
    let three: D = 3f32.into();
    let j = (-p3).sqrt();
    // |arg| can overshoot 1 by rounding when roots coincide
    let arg = (-half_q / (j * j * j)).max(-D::one()).min(D::one());
    let k3 = arg.acos() / three;
    let m = k3.cos();
    let n = three.sqrt() * k3.sin();
    let roots = [ two * j * m, -j * (m + n), -j * (m - n) ];
    debug!("  trig: j {:?}, arg {:?}, roots {:?}", j, arg, roots);
    roots
}

/// One real root and a conjugate pair of `t³ + p·t + q` (`h > 0`, or `p >= 0`), from `p/3`, `q/2`
/// and `h`.
///
/// Only the larger-magnitude Cardano term goes through a cube root; the other follows from
/// `S·U = -p/3`, so that neither is the result of cancellation.
fn depressed_cardano<D: Arg>(p3: D, half_q: D, h: D) -> (D, [ Complex<D>; 2 ]) {
    let two: D = 2f32.into();
    let three: D = 3f32.into();
    let sqrt_h = if h > D::zero() { h.sqrt() } else { D::zero() };
    let s = -half_q + sqrt_h;
    let u = -half_q - sqrt_h;
    let big = cbrt(if s.abs() > u.abs() { s } else { u });
    let small = if big == D::zero() { D::zero() } else { -p3 / big };
    let sum = big + small;
    let re = -sum / two;
    let im = (big - small).abs() * three.sqrt() / two;
    debug!("  cardano: sqrt(h) {:?}, S+U {:?}, {:?} ± {:?}i", sqrt_h, sum, re, im);
    (sum, Complex::conj_pair(re, im))
}

/// The two roots other than `x1` of `x³ + a1·x² + a2·x + a3`, from `x2·x3 = -a3/x1` and
/// `x2 + x3 = (a2 - x2·x3)/x1`. Accurate when `x1` is the largest root, and well separated from the
/// other two.
fn deflate<D: Arg>(x1: D, a2: D, a3: D) -> [ Complex<D>; 2 ] {
    let prod = -a3 / x1;
    let sum = (a2 - prod) / x1;
    quadratic::quadratic_roots(D::one(), -sum, prod)
}

/// Three real roots from the trigonometric branch, with the small ones recomputed.
///
/// When both smaller roots are well below the largest, they come from [`deflate`] (and may turn out
/// to be a conjugate pair, when `h` was within rounding of zero); otherwise only the smallest is
/// recomputed, as `-a3 / (x1·x2)`.
fn refine_reals<D: Arg>(mut xs: [ D; 3 ], a2: D, a3: D) -> [ Complex<D>; 3 ] {
    let two: D = 2f32.into();
    xs.sort_by(|l, r| r.abs().partial_cmp(&l.abs()).unwrap_or(Ordering::Equal));
    let [ x1, x2, _ ] = xs;
    if two * x2.abs() < x1.abs() {
        let [ c0, c1 ] = deflate(x1, a2, a3);
        debug!("  deflated from {:?}: {:?}, {:?}", x1, c0, c1);
        [ Complex::re(x1), c0, c1 ]
    } else if x1 * x2 != D::zero() {
        let x3 = -a3 / (x1 * x2);
        debug!("  smallest root {:?} -> {:?}", xs[2], x3);
        [ x1, x2, x3 ].map(Complex::re)
    } else {
        xs.map(Complex::re)
    }
}

/// A real root and a conjugate pair from the Cardano branch, with whichever is much smaller
/// recomputed: the pair via [`deflate`], or the real root as `-a3 / |z|²`.
fn refine_mixed<D: Arg>(x: D, pair: [ Complex<D>; 2 ], a2: D, a3: D) -> [ Complex<D>; 3 ] {
    let two: D = 2f32.into();
    let z = pair[0].norm();
    if two * z < x.abs() {
        let [ c0, c1 ] = deflate(x, a2, a3);
        debug!("  deflated from {:?}: {:?}, {:?}", x, c0, c1);
        [ Complex::re(x), c0, c1 ]
    } else if x.abs() < z {
        let r = -a3 / (z * z);
        debug!("  real root {:?} -> {:?}", x, r);
        [ Complex::re(r), pair[0], pair[1] ]
    } else {
        [ Complex::re(x), pair[0], pair[1] ]
    }
}
