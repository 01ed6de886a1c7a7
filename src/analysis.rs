use std::path::Path;

use springchain::{
    BoundaryCondition, ChainError, ChainSolution, MatrixDiagnostics, SolveMethod, SpringChain,
};

/// Everything the report needs from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    /// Anchoring the input was classified as.
    pub boundary: BoundaryCondition,
    /// Solved fields and operators.
    pub solution: ChainSolution,
    /// Spectral blocks for A, A transpose, C and K.
    pub diagnostics: Vec<MatrixDiagnostics>,
}

/// Load the chain at `input`, solve it and compute the conditioning of every operator.
pub fn run_analysis(input: &Path, method: SolveMethod) -> Result<AnalysisSummary, ChainError> {
    let chain = SpringChain::from_path(input)?;
    let solution = chain.evaluate(method)?;
    let diagnostics = solution.diagnostics()?;

    Ok(AnalysisSummary {
        boundary: chain.problem().boundary(),
        solution,
        diagnostics,
    })
}
