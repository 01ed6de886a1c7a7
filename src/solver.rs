//! Static solve for nodal displacements.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::errors::AnalysisError;

/// Direct method used to solve `K u = f`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolveMethod {
    /// Dense LU factorization with partial pivoting.
    #[default]
    Lu,
    /// Explicit inverse followed by a matrix-vector product.
    Inverse,
    /// Thomas algorithm on the three bands of the matrix.
    Tridiagonal,
}

/// Solve the static equilibrium `K u = f` for the displacement `u`.
///
/// # Errors
///
/// Returns [`AnalysisError::DimensionMismatch`] when `stiffness` is not square or
/// `load` does not match its dimension, [`AnalysisError::SingularStiffness`] when
/// the system has no unique solution and [`AnalysisError::NotTridiagonal`] when
/// [`SolveMethod::Tridiagonal`] is used on a matrix with fill outside the bands.
///
/// # Examples
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use springchain::{solve_displacements, SolveMethod};
///
/// let k = DMatrix::from_row_slice(2, 2, &[4.0, -2.0, -2.0, 2.0]);
/// let f = DVector::from_vec(vec![9.81, 9.81]);
/// let u = solve_displacements(&k, &f, SolveMethod::Lu).unwrap();
/// assert!((u[0] - 9.81).abs() < 1.0e-12);
/// ```
pub fn solve_displacements(
    stiffness: &DMatrix<f64>,
    load: &DVector<f64>,
    method: SolveMethod,
) -> Result<DVector<f64>, AnalysisError> {
    let n = stiffness.nrows();
    if stiffness.ncols() != n {
        return Err(AnalysisError::DimensionMismatch {
            operation: "stiffness matrix columns",
            expected: n,
            found: stiffness.ncols(),
        });
    }
    if load.len() != n {
        return Err(AnalysisError::DimensionMismatch {
            operation: "load vector length",
            expected: n,
            found: load.len(),
        });
    }
    if n == 0 {
        return Ok(DVector::zeros(0));
    }
    debug!("solving {n}x{n} system with {method:?}");

    match method {
        SolveMethod::Lu => stiffness
            .clone()
            .lu()
            .solve(load)
            .ok_or(AnalysisError::SingularStiffness),
        SolveMethod::Inverse => stiffness
            .clone()
            .try_inverse()
            .map(|inverse| inverse * load)
            .ok_or(AnalysisError::SingularStiffness),
        SolveMethod::Tridiagonal => solve_tridiagonal(stiffness, load),
    }
}

/// Forward elimination and back substitution over the sub-, main and super-diagonal.
fn solve_tridiagonal(
    stiffness: &DMatrix<f64>,
    load: &DVector<f64>,
) -> Result<DVector<f64>, AnalysisError> {
    let n = stiffness.nrows();
    for row in 0..n {
        for col in 0..n {
            if row.abs_diff(col) > 1 && stiffness[(row, col)] != 0.0 {
                return Err(AnalysisError::NotTridiagonal { row, col });
            }
        }
    }

    let mut upper = vec![0.0; n];
    let mut rhs = vec![0.0; n];
    let mut pivot = stiffness[(0, 0)];
    if pivot == 0.0 {
        return Err(AnalysisError::SingularStiffness);
    }
    if n > 1 {
        upper[0] = stiffness[(0, 1)] / pivot;
    }
    rhs[0] = load[0] / pivot;
    for i in 1..n {
        let lower = stiffness[(i, i - 1)];
        pivot = stiffness[(i, i)] - lower * upper[i - 1];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(AnalysisError::SingularStiffness);
        }
        if i + 1 < n {
            upper[i] = stiffness[(i, i + 1)] / pivot;
        }
        rhs[i] = (load[i] - lower * rhs[i - 1]) / pivot;
    }

    let mut solution = DVector::zeros(n);
    solution[n - 1] = rhs[n - 1];
    for i in (0..n - 1).rev() {
        solution[i] = rhs[i] - upper[i] * solution[i + 1];
    }
    Ok(solution)
}
