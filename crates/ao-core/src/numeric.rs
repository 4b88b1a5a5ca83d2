//! Float comparison and input guards shared by every formula.

use crate::AoError;

/// Scalar type of every formula input and result
pub type Real = f64;

/// Absolute and relative comparison tolerance.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely relative tolerance.
    pub const fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
}

/// |a − b| within `tol.abs`, or within `tol.rel` of the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AoError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AoError::NonFinite { what, value: v })
    }
}

/// Reject non-finite and non-positive values.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, AoError> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(AoError::Domain { what, value: v });
    }
    Ok(v)
}

/// Reject non-finite and negative values (zero allowed).
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, AoError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(AoError::Domain { what, value: v });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn relative_tolerance_scales_with_magnitude() {
        let tol = Tolerances::relative(1e-6);
        assert!(nearly_equal(1.0e25, 1.000_000_5e25, tol));
        assert!(!nearly_equal(0.0, 1e-30, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert_eq!(ensure_positive(300.0, "t").unwrap(), 300.0);
        assert!(matches!(
            ensure_positive(0.0, "t"),
            Err(AoError::Domain { .. })
        ));
        assert!(matches!(
            ensure_positive(-2.0, "t"),
            Err(AoError::Domain { .. })
        ));
        assert!(matches!(
            ensure_positive(f64::INFINITY, "t"),
            Err(AoError::NonFinite { .. })
        ));
    }

    #[test]
    fn ensure_non_negative_allows_zero() {
        assert_eq!(ensure_non_negative(0.0, "d").unwrap(), 0.0);
        assert!(ensure_non_negative(-1e-9, "d").is_err());
    }
}
