//! Linear operators that turn displacement into elongation and elongation into stress.

use nalgebra::DVector;
use nalgebra_sparse::{coo::CooMatrix, csr::CsrMatrix};

use crate::errors::AnalysisError;

/// Build the difference operator `A` mapping node displacement to spring elongation.
///
/// The operator has one row per spring and one column per mass. Spring `i`
/// stretches by the displacement of the node below it minus the displacement of
/// the node above it, where an anchor contributes no displacement.
///
/// # Examples
/// ```
/// use nalgebra::DMatrix;
/// use springchain::difference_operator;
///
/// let a = DMatrix::from(&difference_operator(3, 2));
/// assert_eq!(a, DMatrix::from_row_slice(3, 2, &[1.0, 0.0, -1.0, 1.0, 0.0, -1.0]));
/// ```
#[must_use]
pub fn difference_operator(springs: usize, masses: usize) -> CsrMatrix<f64> {
    let mut coo = CooMatrix::new(springs, masses);
    for node in 0..springs.min(masses) {
        coo.push(node, node, 1.0);
    }
    for node in 0..masses.min(springs.saturating_sub(1)) {
        coo.push(node + 1, node, -1.0);
    }
    CsrMatrix::from(&coo)
}

/// Build the diagonal stiffness operator `C` holding one spring constant per spring.
///
/// # Examples
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use springchain::stiffness_operator;
///
/// let c = DMatrix::from(&stiffness_operator(&DVector::from_vec(vec![2.0, 5.0])));
/// assert_eq!(c, DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 5.0]));
/// ```
#[must_use]
pub fn stiffness_operator(spring_constants: &DVector<f64>) -> CsrMatrix<f64> {
    let n = spring_constants.len();
    let mut coo = CooMatrix::new(n, n);
    for (i, &k) in spring_constants.iter().enumerate() {
        coo.push(i, i, k);
    }
    CsrMatrix::from(&coo)
}

/// Elongation of every spring, `e = A u`.
///
/// # Errors
///
/// Returns [`AnalysisError::DimensionMismatch`] when `displacement` does not have one
/// entry per column of `difference`.
///
/// # Examples
/// ```
/// use nalgebra::DVector;
/// use springchain::{difference_operator, elongation};
///
/// // Two springs hold one mass between two anchors.
/// let e = elongation(&difference_operator(2, 1), &DVector::from_vec(vec![0.5])).unwrap();
/// assert_eq!(e, DVector::from_vec(vec![0.5, -0.5]));
/// ```
pub fn elongation(
    difference: &CsrMatrix<f64>,
    displacement: &DVector<f64>,
) -> Result<DVector<f64>, AnalysisError> {
    apply("elongation", difference, displacement)
}

/// Internal force carried by every spring, `w = C e`.
///
/// # Errors
///
/// Returns [`AnalysisError::DimensionMismatch`] when `elongation` does not have one
/// entry per column of `stiffness`.
///
/// # Examples
/// ```
/// use nalgebra::DVector;
/// use springchain::{stiffness_operator, stress};
///
/// let c = stiffness_operator(&DVector::from_vec(vec![4.0, 2.0]));
/// let w = stress(&c, &DVector::from_vec(vec![0.5, -0.5])).unwrap();
/// assert_eq!(w, DVector::from_vec(vec![2.0, -1.0]));
/// ```
pub fn stress(
    stiffness: &CsrMatrix<f64>,
    elongation: &DVector<f64>,
) -> Result<DVector<f64>, AnalysisError> {
    apply("stress", stiffness, elongation)
}

/// Checked sparse matrix-vector product.
fn apply(
    operation: &'static str,
    operator: &CsrMatrix<f64>,
    vector: &DVector<f64>,
) -> Result<DVector<f64>, AnalysisError> {
    if operator.ncols() != vector.len() {
        return Err(AnalysisError::DimensionMismatch {
            operation,
            expected: operator.ncols(),
            found: vector.len(),
        });
    }
    Ok(operator * vector)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;

    use super::*;

    #[test]
    fn square_difference_operator_is_lower_bidiagonal() {
        let a = DMatrix::from(&difference_operator(3, 3));
        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[1.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, -1.0, 1.0],
        );
        assert_eq!(a, expected);
    }

    #[test]
    fn stiffness_operator_is_diagonal() {
        let c = DMatrix::from(&stiffness_operator(&DVector::from_vec(vec![2.0, 3.0])));
        assert_eq!(c, DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 3.0]));
    }

    #[test]
    fn elongation_is_relative_displacement() {
        let a = difference_operator(3, 2);
        let u = DVector::from_vec(vec![1.0, 4.0]);
        let e = elongation(&a, &u).expect("shapes agree");
        assert_relative_eq!(e, DVector::from_vec(vec![1.0, 3.0, -4.0]));
    }

    #[test]
    fn stress_scales_elongation_by_spring_constant() {
        let c = stiffness_operator(&DVector::from_vec(vec![2.0, 5.0, 0.5]));
        let e = DVector::from_vec(vec![1.0, 3.0, -4.0]);
        let w = stress(&c, &e).expect("shapes agree");
        assert_relative_eq!(w, DVector::from_vec(vec![2.0, 15.0, -2.0]));
    }

    #[test]
    fn derived_quantities_are_linear() {
        let a = difference_operator(4, 4);
        let c = stiffness_operator(&DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]));
        let u = DVector::from_vec(vec![0.3, -1.2, 2.5, 0.7]);
        let alpha = -2.75;

        let e = elongation(&a, &u).expect("shapes agree");
        let w = stress(&c, &e).expect("shapes agree");
        let e_scaled = elongation(&a, &(&u * alpha)).expect("shapes agree");
        let w_scaled = stress(&c, &e_scaled).expect("shapes agree");

        assert_relative_eq!(e_scaled, e * alpha, max_relative = 1.0e-12);
        assert_relative_eq!(w_scaled, w * alpha, max_relative = 1.0e-12);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let a = difference_operator(3, 2);
        let error = elongation(&a, &DVector::zeros(3)).expect_err("mismatch");
        assert_eq!(
            error,
            AnalysisError::DimensionMismatch {
                operation: "elongation",
                expected: 2,
                found: 3,
            }
        );
    }
}
