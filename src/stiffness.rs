//! Assembly of the tridiagonal stiffness matrix.

use log::debug;
use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::coo::CooMatrix;

use crate::problem::BoundaryCondition;

/// Number of free nodes implied by `springs` springs under `boundary`.
#[must_use]
pub fn stiffness_dimension(springs: usize, boundary: BoundaryCondition) -> usize {
    match boundary {
        BoundaryCondition::FixedFixed => springs.saturating_sub(1),
        BoundaryCondition::FixedOpen => springs,
    }
}

/// Build the stiffness matrix in banded triplet form.
///
/// Node `i` sits between spring `i` above and spring `i + 1` below, so the main
/// diagonal holds `k[i] + k[i + 1]` and both off-diagonals hold `-k[i + 1]`. In a
/// fixed-open chain the last node has no spring below it and its diagonal entry is
/// `k[i]` alone. The first and last springs of a fixed-fixed chain only touch the
/// anchors, which keeps them off the off-diagonals.
#[must_use]
pub fn stiffness_band(
    spring_constants: &DVector<f64>,
    boundary: BoundaryCondition,
) -> CooMatrix<f64> {
    let n = stiffness_dimension(spring_constants.len(), boundary);
    let below = |i: usize| spring_constants.get(i + 1).copied().unwrap_or(0.0);

    let mut band = CooMatrix::new(n, n);
    for i in 0..n {
        band.push(i, i, spring_constants[i] + below(i));
    }
    for i in 1..n {
        let coupling = -spring_constants[i];
        band.push(i, i - 1, coupling);
        band.push(i - 1, i, coupling);
    }
    band
}

/// Assemble the dense stiffness matrix `K` for a chain.
///
/// # Examples
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use springchain::{assemble_stiffness, BoundaryCondition};
///
/// let k = assemble_stiffness(&DVector::from_vec(vec![2.0, 2.0]), BoundaryCondition::FixedOpen);
/// assert_eq!(k, DMatrix::from_row_slice(2, 2, &[4.0, -2.0, -2.0, 2.0]));
/// ```
#[must_use]
pub fn assemble_stiffness(
    spring_constants: &DVector<f64>,
    boundary: BoundaryCondition,
) -> DMatrix<f64> {
    let band = stiffness_band(spring_constants, boundary);
    debug!(
        "assembled {boundary} stiffness band: {}x{} with {} stored entries",
        band.nrows(),
        band.ncols(),
        band.nnz()
    );
    DMatrix::from(&band)
}
