use num_traits::Float;

/// Tolerances used for branch selection and root classification, per float width.
pub trait Tolerance: Float {
    /// Depressed-cubic quantities and the quadratic discriminant are compared against zero with
    /// this relative tolerance.
    const BRANCH: Self;
    /// A root is real when `|im| <= REAL · max(1, |re|)`.
    const REAL: Self;
}

impl Tolerance for f64 {
    const BRANCH: f64 = 16. * f64::EPSILON;
    // √ε = 2⁻²⁶
    const REAL: f64 = 1.4901161193847656e-8;
}

impl Tolerance for f32 {
    const BRANCH: f32 = 16. * f32::EPSILON;
    const REAL: f32 = 3.4526698e-4;
}

pub trait IsZero {
    fn is_zero_within(&self, tol: Self, scale: Self) -> bool;
    fn le_zero_within(&self, tol: Self, scale: Self) -> bool;
}

impl<D: Tolerance> IsZero for D {
    fn is_zero_within(&self, tol: D, scale: D) -> bool {
        self.abs() <= tol * scale
    }
    fn le_zero_within(&self, tol: D, scale: D) -> bool {
        *self <= tol * scale
    }
}

/// Largest finite magnitude among `coeffs`, or zero if there is none.
///
/// Non-finite entries are skipped so that an `Inf` or `NaN` coefficient flows through the solver
/// arithmetic instead of setting the scale.
pub fn scale<D: Float>(coeffs: &[D]) -> D {
    coeffs
        .iter()
        .filter(|c| c.is_finite())
        .fold(D::zero(), |max, c| max.max(c.abs()))
}

/// Whether a leading coefficient `lead` can be dropped: it is zero, or dividing one of the finite
/// lower-order coefficients `rest` by it overflows.
///
/// A non-finite `lead` is kept, so that it propagates into the roots.
pub fn negligible_lead<D: Float>(lead: D, rest: &[D]) -> bool {
    lead == D::zero()
        || (lead.is_finite() && rest.iter().any(|c| c.is_finite() && !(*c / lead).is_finite()))
}

/// `2^floor(log2(x))`, a power of two within a factor of two of `x`; one when `x` is zero or
/// non-finite.
///
/// Dividing coefficients by a power of two is exact (barring underflow), so roots of the rescaled
/// polynomial map back without extra rounding.
pub fn pow2_scale<D: Float>(x: D) -> D {
    if x > D::zero() && x.is_finite() {
        x.log2().floor().exp2()
    } else {
        D::one()
    }
}
