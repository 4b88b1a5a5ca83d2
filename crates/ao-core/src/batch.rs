//! Element-wise evaluation of scalar formulas over arrays.
//!
//! Every formula in the workspace is written once, for a scalar input. Array
//! inputs go through [`map_batch`], which applies the scalar form to each
//! element in parallel and enforces the same per-element invariants: any
//! failing element fails the whole batch.

use crate::AoResult;
use rayon::prelude::*;

/// Apply `f` to every element of `inputs`.
pub fn map_batch<F>(inputs: &[f64], f: F) -> AoResult<Vec<f64>>
where
    F: Fn(f64) -> AoResult<f64> + Sync,
{
    inputs.par_iter().map(|&x| f(x)).collect()
}

/// Apply `f` pairwise to two equally sized arrays.
pub fn zip_batch<F>(
    lhs: &[f64],
    rhs: &[f64],
    what: &'static str,
    f: F,
) -> AoResult<Vec<f64>>
where
    F: Fn(f64, f64) -> AoResult<f64> + Sync,
{
    if lhs.len() != rhs.len() {
        return Err(crate::AoError::ShapeMismatch {
            what,
            expected: lhs.len(),
            found: rhs.len(),
        });
    }
    lhs.par_iter()
        .zip(rhs.par_iter())
        .map(|(&a, &b)| f(a, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AoError, ensure_positive};

    #[test]
    fn map_preserves_order() {
        let out = map_batch(&[1.0, 2.0, 3.0], |x| Ok(x * 10.0)).unwrap();
        assert_eq!(out, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn map_fails_on_invalid_element() {
        let err = map_batch(&[300.0, -2.0, 400.0], |t| ensure_positive(t, "temperature"))
            .unwrap_err();
        assert!(matches!(err, AoError::Domain { .. }));
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = map_batch(&[], |x| Ok(x)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn zip_checks_shapes() {
        let err = zip_batch(&[1.0, 2.0], &[1.0, 2.0, 3.0], "distance", |a, b| Ok(a * b))
            .unwrap_err();
        assert_eq!(
            err,
            AoError::ShapeMismatch {
                what: "distance",
                expected: 2,
                found: 3
            }
        );
    }
}
