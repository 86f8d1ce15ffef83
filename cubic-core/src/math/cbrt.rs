use num_traits::Float;

/// Real cube root that keeps the operand's sign: `cbrt(-8) == -2`.
pub fn cbrt<D: Float>(x: D) -> D {
    if x >= D::zero() {
        x.cbrt()
    } else {
        -(-x).cbrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn signs() {
        assert_eq!(cbrt(8.), 2.);
        assert_eq!(cbrt(-8.), -2.);
        assert_eq!(cbrt(0.), 0.);
        assert_relative_eq!(cbrt(-1e-9), -1e-3, max_relative = 1e-15);
        assert_relative_eq!(cbrt(-27f32), -3f32);
    }

    #[test]
    fn non_finite() {
        assert!(cbrt(f64::NAN).is_nan());
        assert_eq!(cbrt(f64::INFINITY), f64::INFINITY);
        assert_eq!(cbrt(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
