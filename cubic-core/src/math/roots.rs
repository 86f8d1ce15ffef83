use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use derive_more::Deref;
use itertools::Itertools;
use log::debug;
use num_traits::Float;
use ordered_float::OrderedFloat;
use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::{complex::{self, Complex}, is_zero::Tolerance};

/// Effective degree of a solved polynomial, after leading coefficients that are (near-)zero have
/// been dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Degree {
    Linear = 1,
    Quadratic = 2,
    Cubic = 3,
}

impl Degree {
    pub fn get(self) -> usize {
        self as usize
    }
}

/// `N` roots (with multiplicity) of a degree-`N` input.
///
/// When the effective degree is lower than `N`, the trailing slots repeat the last effective root,
/// so every slot always holds a value. Order carries no meaning; compare with [`RootSet::align`] or
/// the `approx` impls, or canonicalize with [`RootSet::sorted`]. Both comparisons look only at the
/// effective roots, so which root the padding repeats does not matter.
#[derive(Clone, Copy, Debug, Deref, PartialEq)]
pub struct RootSet<D, const N: usize> {
    #[deref]
    roots: [ Complex<D>; N ],
    degree: Degree,
}

impl<D: Float + Into<f64>, const N: usize> RootSet<D, N> {
    /// Pad `effective` out to `N` slots by repeating its last root.
    ///
    /// `effective` must be non-empty, and no longer than `N`.
    pub(crate) fn padded(effective: &[ Complex<D> ], degree: Degree) -> Self {
        debug_assert_eq!(effective.len(), degree.get());
        let last = effective[effective.len() - 1];
        let roots = std::array::from_fn(|i| effective.get(i).copied().unwrap_or(last));
        RootSet { roots, degree }
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// The roots of the effective polynomial, without padding.
    pub fn effective(&self) -> &[ Complex<D> ] {
        &self.roots[..self.degree.get().min(N)]
    }

    /// Copy with roots ordered by real part, then imaginary part.
    pub fn sorted(&self) -> Self {
        let mut roots = self.roots;
        roots.sort_by_key(|r| (OrderedFloat::<f64>(r.re.into()), OrderedFloat::<f64>(r.im.into())));
        RootSet { roots, degree: self.degree }
    }

    pub fn to_vec(&self) -> Vec<Complex<D>> {
        self.roots.to_vec()
    }
}

impl<D: Tolerance + Into<f64>, const N: usize> RootSet<D, N> {
    /// Real parts of the effective roots classified as real, in slot order.
    pub fn reals(&self) -> Vec<D> {
        self.effective().iter().filter(|r| r.is_real()).map(|r| r.re).collect()
    }

    pub fn num_reals(&self) -> usize {
        self.effective().iter().filter(|r| r.is_real()).count()
    }
}

impl<D: Float + Into<f64> + fmt::Debug, const N: usize> RootSet<D, N> {
    /// Permutation of `self`'s effective roots that minimizes the total distance to `other`'s, slot
    /// for slot.
    pub fn align(&self, other: &Self) -> Vec<Complex<D>> {
        let effective = self.effective();
        let aligned = effective.iter().permutations(effective.len()).map(|perm| {
            let total_distance = perm.iter().zip(other.effective().iter()).fold(D::zero(), |sum, (c0, c1)| sum + (**c0 - *c1).norm());
            (total_distance, perm)
        }).min_by_key(|(total_distance, _)| OrderedFloat::<f64>((*total_distance).into()));
        match aligned {
            Some((distance, perm)) => {
                debug!("aligned: {:?}", distance);
                debug!("  {:?}", perm);
                debug!("  {:?}", other.effective());
                perm.into_iter().copied().collect()
            },
            None => effective.to_vec(),
        }
    }
}

impl<D: Serialize, const N: usize> Serialize for RootSet<D, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RootSet", 2)?;
        s.serialize_field("degree", &self.degree)?;
        s.serialize_field("roots", &self.roots[..])?;
        s.end()
    }
}

impl<D: fmt::Display + Float, const N: usize> fmt::Display for RootSet<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.roots.iter().map(|r| r.to_string()).join(", "))
    }
}

impl<D: Float + Into<f64> + fmt::Debug + complex::Eq, const N: usize> AbsDiffEq for RootSet<D, N> {
    type Epsilon = D::Epsilon;
    fn default_epsilon() -> Self::Epsilon {
        D::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if self.degree != other.degree {
            return false;
        }
        let aligned = self.align(other);
        let rv = aligned.iter().zip(other.effective().iter()).all(|(l, r)| l.abs_diff_eq(r, epsilon));
        if !rv {
            debug!("abs_diff_eq: roots not equal: {:?} vs {:?}", aligned, other.effective());
        }
        rv
    }
}

impl<D: Float + Into<f64> + fmt::Debug + complex::Eq, const N: usize> RelativeEq for RootSet<D, N> {
    fn default_max_relative() -> Self::Epsilon {
        D::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        if self.degree != other.degree {
            return false;
        }
        let aligned = self.align(other);
        let rv = aligned.iter().zip(other.effective().iter()).all(|(l, r)| l.relative_eq(r, epsilon, max_relative));
        if !rv {
            debug!("relative_eq: roots not equal:");
            debug!("  {:?}", aligned);
            debug!("  {:?}", other.effective());
        }
        rv
    }
}
