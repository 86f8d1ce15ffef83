use std::{fmt::{self, Display, Formatter}, ops::{Add, Mul, Sub}};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::is_zero::Tolerance;

/// A root. Real roots are stored with a zero (or negligible) imaginary part; see [`Complex::is_real`].
#[derive(
    Clone, Copy, Debug, PartialEq,
    Serialize, Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
)]
pub struct Complex<D> {
    pub re: D,
    pub im: D,
}

impl<D: Float> Complex<D> {
    pub fn new(re: D, im: D) -> Self {
        Self { re, im }
    }
    pub fn re(re: D) -> Self {
        Self { re, im: D::zero() }
    }
    /// `re ± i·im`, positive imaginary part first.
    pub fn conj_pair(re: D, im: D) -> [ Self; 2 ] {
        let im = im.abs();
        [ Self { re, im }, Self { re, im: -im } ]
    }
    pub fn conj(&self) -> Self {
        Self { re: self.re, im: -self.im }
    }
    pub fn norm(&self) -> D {
        self.re.hypot(self.im)
    }
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl<D: Tolerance> Complex<D> {
    pub fn is_real(&self) -> bool {
        self.im.abs() <= D::REAL * self.re.abs().max(D::one())
    }
}

impl<D: Float> Add<D> for Complex<D> {
    type Output = Self;
    fn add(self, rhs: D) -> Self::Output {
        Self { re: self.re + rhs, im: self.im }
    }
}

impl<D: Float> Sub<D> for Complex<D> {
    type Output = Self;
    fn sub(self, rhs: D) -> Self::Output {
        Self { re: self.re - rhs, im: self.im }
    }
}

impl<D: Float> Mul<D> for Complex<D> {
    type Output = Self;
    fn mul(self, rhs: D) -> Self::Output {
        Self { re: self.re * rhs, im: self.im * rhs }
    }
}

impl<D: Float> Mul for Complex<D> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        let Complex { re: a, im: b } = self;
        let Complex { re: c, im: d } = rhs;
        Self {
            re: a * c - b * d,
            im: a * d + b * c,
        }
    }
}

impl<D: Display + Float> Display for Complex<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

/// Scalars whose complex pairs can be compared with `approx`.
pub trait Eq: AbsDiffEq<Epsilon = Self> + RelativeEq + Clone {}
impl Eq for f64 {}
impl Eq for f32 {}

impl<D: Eq> AbsDiffEq for Complex<D> {
    type Epsilon = D::Epsilon;
    fn default_epsilon() -> Self::Epsilon {
        D::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon.clone()) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl<D: Eq> RelativeEq for Complex<D> {
    fn default_max_relative() -> Self::Epsilon {
        D::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.re.relative_eq(&other.re, epsilon.clone(), max_relative.clone()) && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}
