#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod chain;
pub mod diagnostics;
pub mod errors;
pub mod force;
pub mod operators;
pub mod problem;
pub mod solver;
pub mod stiffness;

pub use chain::{AnalyzedMatrix, ChainSolution, MatrixDiagnostics, SpringChain};
pub use diagnostics::{analyze_spectrum, Spectrum};
pub use errors::{AnalysisError, ChainError, InputError, SpectrumError};
pub use force::{gravitational_load, GRAVITY};
pub use operators::{difference_operator, elongation, stiffness_operator, stress};
pub use problem::{BoundaryCondition, Problem, ProblemRecord, DEFAULT_INPUT_PATH};
pub use solver::{solve_displacements, SolveMethod};
pub use stiffness::{assemble_stiffness, stiffness_band};
