//! Error types produced while loading or analysing spring chains.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a problem definition cannot be loaded.
#[derive(Debug, Error)]
pub enum InputError {
    /// Returned when the spring and mass counts match neither supported anchoring.
    #[error(
        "input not supported: {springs} spring(s) and {masses} mass(es) match neither \
         fixed-fixed nor fixed-open conditions"
    )]
    UnsupportedBoundaryCondition {
        /// Number of springs in the input.
        springs: usize,
        /// Number of masses in the input.
        masses: usize,
    },
    /// Returned when a spring constant or mass is zero, negative or not finite.
    #[error("{field} entry {index} must be a positive finite number (received {value})")]
    NonPositiveValue {
        /// Name of the offending input vector.
        field: &'static str,
        /// Position of the rejected entry.
        index: usize,
        /// Rejected value.
        value: f64,
    },
    /// Returned when the input file cannot be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Location that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the input is not a valid problem record.
    #[error("malformed problem record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error returned when the static solve or a derived quantity cannot be computed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when the stiffness matrix cannot be inverted.
    #[error("stiffness matrix is singular; check spring constants and anchoring")]
    SingularStiffness,
    /// Returned when two stages hand over operands of incompatible shape.
    #[error("{operation}: expected dimension {expected}, found {found}")]
    DimensionMismatch {
        /// Stage that detected the mismatch.
        operation: &'static str,
        /// Dimension required by the stage.
        expected: usize,
        /// Dimension that was supplied.
        found: usize,
    },
    /// Returned when the banded solver is handed a matrix with fill outside three bands.
    #[error("matrix has a non-zero entry at ({row}, {col}) outside the tridiagonal band")]
    NotTridiagonal {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },
}

/// Error returned when spectral diagnostics cannot be produced for a matrix.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpectrumError {
    /// Returned when the truncated decomposition would retain no singular value.
    #[error("a {rows}x{cols} matrix is too small for a truncated decomposition")]
    InsufficientRank {
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },
    /// Returned when the smallest retained eigenvalue is zero.
    #[error(
        "degenerate spectrum: smallest retained eigenvalue {min_eigenvalue:e} leaves the \
         condition number undefined"
    )]
    DegenerateSpectrum {
        /// The eigenvalue that made the condition number undefined.
        min_eigenvalue: f64,
    },
}

/// Any failure that terminates a run of the pipeline.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Loading or classifying the input failed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The linear solve or a derived quantity failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    /// A diagnostic block could not be computed.
    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
}
