//! The end-to-end pipeline for a hanging mass-spring chain.

use std::fmt;
use std::path::Path;

use log::info;
use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::csr::CsrMatrix;

use crate::diagnostics::{analyze_spectrum, Spectrum};
use crate::errors::{AnalysisError, InputError, SpectrumError};
use crate::force::gravitational_load;
use crate::operators::{difference_operator, elongation, stiffness_operator, stress};
use crate::problem::Problem;
use crate::solver::{solve_displacements, SolveMethod};
use crate::stiffness::assemble_stiffness;

/// A mass-spring chain ready to be solved.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringChain {
    /// Validated input.
    problem: Problem,
}

impl SpringChain {
    /// Wrap a validated problem.
    #[must_use]
    pub fn new(problem: Problem) -> Self {
        Self { problem }
    }

    /// Load a chain from a JSON problem record on disk.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the file cannot be read, parsed or classified.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        Problem::from_path(path).map(Self::new)
    }

    /// The problem this chain was built from.
    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Solve for displacement and propagate it to elongation and stress.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] when the stiffness matrix is singular or a stage
    /// receives operands of the wrong shape.
    ///
    /// # Examples
    /// ```
    /// use springchain::{Problem, SolveMethod, SpringChain};
    ///
    /// let chain = SpringChain::new(Problem::new(vec![2.0, 2.0], vec![1.0, 1.0]).unwrap());
    /// let solution = chain.evaluate(SolveMethod::Lu).unwrap();
    /// assert!((solution.stress[0] - 19.62).abs() < 1.0e-9);
    /// ```
    pub fn evaluate(&self, method: SolveMethod) -> Result<ChainSolution, AnalysisError> {
        let problem = &self.problem;
        let stiffness = assemble_stiffness(problem.spring_constants(), problem.boundary());
        let load = gravitational_load(problem.masses());
        let displacement = solve_displacements(&stiffness, &load, method)?;

        let difference = difference_operator(problem.spring_count(), problem.mass_count());
        let spring_stiffness = stiffness_operator(problem.spring_constants());
        let elongation = elongation(&difference, &displacement)?;
        let stress = stress(&spring_stiffness, &elongation)?;
        info!(
            "solved {} chain with {} node(s)",
            problem.boundary(),
            displacement.len()
        );

        Ok(ChainSolution {
            stiffness,
            load,
            displacement,
            difference,
            spring_stiffness,
            elongation,
            stress,
        })
    }
}

/// Every quantity produced by one pass through the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainSolution {
    /// Stiffness matrix `K`.
    pub stiffness: DMatrix<f64>,
    /// Gravitational load `f` on each mass.
    pub load: DVector<f64>,
    /// Displacement `u` of each mass.
    pub displacement: DVector<f64>,
    /// Difference operator `A`.
    pub difference: CsrMatrix<f64>,
    /// Diagonal spring stiffness operator `C`.
    pub spring_stiffness: CsrMatrix<f64>,
    /// Elongation `e` of each spring.
    pub elongation: DVector<f64>,
    /// Internal force `w` in each spring.
    pub stress: DVector<f64>,
}

/// The matrices whose conditioning is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyzedMatrix {
    /// Difference operator `A`.
    DifferenceOperator,
    /// Transpose of the difference operator.
    DifferenceTranspose,
    /// Spring stiffness operator `C`.
    StiffnessOperator,
    /// Stiffness matrix `K`.
    StiffnessMatrix,
}

impl AnalyzedMatrix {
    /// Report order.
    pub const ALL: [Self; 4] = [
        Self::DifferenceOperator,
        Self::DifferenceTranspose,
        Self::StiffnessOperator,
        Self::StiffnessMatrix,
    ];
}

impl fmt::Display for AnalyzedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DifferenceOperator => "Matrix A",
            Self::DifferenceTranspose => "Matrix A transpose",
            Self::StiffnessOperator => "Matrix C",
            Self::StiffnessMatrix => "Matrix K",
        };
        f.write_str(label)
    }
}

/// Spectrum of one of the chain matrices.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixDiagnostics {
    /// Which matrix was analysed.
    pub matrix: AnalyzedMatrix,
    /// Its truncated spectrum.
    pub spectrum: Spectrum,
}

impl ChainSolution {
    /// Dense copy of one of the analysed matrices.
    #[must_use]
    pub fn dense(&self, matrix: AnalyzedMatrix) -> DMatrix<f64> {
        match matrix {
            AnalyzedMatrix::DifferenceOperator => DMatrix::from(&self.difference),
            AnalyzedMatrix::DifferenceTranspose => DMatrix::from(&self.difference.transpose()),
            AnalyzedMatrix::StiffnessOperator => DMatrix::from(&self.spring_stiffness),
            AnalyzedMatrix::StiffnessMatrix => self.stiffness.clone(),
        }
    }

    /// Spectral diagnostics for `A`, `A` transpose, `C` and `K`, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first [`SpectrumError`] encountered.
    pub fn diagnostics(&self) -> Result<Vec<MatrixDiagnostics>, SpectrumError> {
        AnalyzedMatrix::ALL
            .iter()
            .map(|&matrix| {
                analyze_spectrum(&self.dense(matrix))
                    .map(|spectrum| MatrixDiagnostics { matrix, spectrum })
            })
            .collect()
    }
}
