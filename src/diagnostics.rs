//! Singular values, eigenvalues and condition numbers of the chain operators.
//!
//! The spectrum is truncated to the largest `min(rows, cols) - 1` singular values,
//! which is what a partial (Krylov-type) singular value routine can deliver for a
//! matrix of that shape. The smallest singular value is therefore never part of
//! the reported spectrum, and the condition number is the ratio of the largest to
//! the smallest *retained* eigenvalue.

use log::{debug, warn};
use nalgebra::DMatrix;

use crate::errors::SpectrumError;

/// Condition numbers above this are logged as a warning.
pub const ILL_CONDITIONED: f64 = 1.0e12;

/// Truncated spectrum of a matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    /// Retained singular values in ascending order.
    pub singular_values: Vec<f64>,
    /// Squares of the retained singular values, in the same order.
    pub eigenvalues: Vec<f64>,
    /// Ratio of the largest to the smallest retained eigenvalue.
    pub condition_number: f64,
}

/// Compute the truncated spectrum of `matrix`.
///
/// # Errors
///
/// Returns [`SpectrumError::InsufficientRank`] when the smaller dimension of the
/// matrix is below two and [`SpectrumError::DegenerateSpectrum`] when the smallest
/// retained eigenvalue is zero, so the condition number is undefined. Large but
/// finite condition numbers are returned and logged as a warning.
///
/// # Examples
/// ```
/// use nalgebra::DMatrix;
/// use springchain::analyze_spectrum;
///
/// let m = DMatrix::from_diagonal(&nalgebra::DVector::from_vec(vec![1.0, 2.0, 3.0]));
/// let spectrum = analyze_spectrum(&m).unwrap();
/// assert_eq!(spectrum.singular_values.len(), 2);
/// assert!((spectrum.singular_values[1] - 3.0).abs() < 1.0e-12);
/// assert!((spectrum.condition_number - 2.25).abs() < 1.0e-12);
/// ```
pub fn analyze_spectrum(matrix: &DMatrix<f64>) -> Result<Spectrum, SpectrumError> {
    let (rows, cols) = matrix.shape();
    let retained = rows.min(cols).saturating_sub(1);
    if retained == 0 {
        return Err(SpectrumError::InsufficientRank { rows, cols });
    }

    let mut singular_values: Vec<f64> = matrix.singular_values().iter().copied().collect();
    singular_values.sort_by(f64::total_cmp);
    let singular_values = singular_values.split_off(singular_values.len() - retained);

    let eigenvalues: Vec<f64> = singular_values.iter().map(|s| s * s).collect();
    let condition_number = eigenvalues[retained - 1] / eigenvalues[0];
    if eigenvalues[0] == 0.0 || !condition_number.is_finite() {
        return Err(SpectrumError::DegenerateSpectrum {
            min_eigenvalue: eigenvalues[0],
        });
    }

    debug!(
        "{rows}x{cols} matrix: kept {retained} singular value(s), condition {condition_number:e}"
    );
    if condition_number > ILL_CONDITIONED {
        warn!("{rows}x{cols} matrix is ill-conditioned (condition number {condition_number:e})");
    }

    Ok(Spectrum {
        singular_values,
        eigenvalues,
        condition_number,
    })
}
