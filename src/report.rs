use crate::analysis::AnalysisSummary;
use std::fmt::Write;

/// Render a slice of values the way array printouts read: `[a b c]`.
fn format_values<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a f64>,
{
    let joined: Vec<String> = values.into_iter().map(|v| format!("{v:.8}")).collect();
    format!("[{}]", joined.join(" "))
}

/// Render the console report for one run.
///
/// One block is printed per analysed matrix, headed by the matrix name. When
/// `fields` is set the solved load, displacement, elongation and stress vectors
/// are listed first.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary, fields: bool) -> String {
    let mut output = String::new();

    if fields {
        let solution = &summary.solution;
        writeln!(&mut output, "-- {} chain --", summary.boundary)
            .expect("writing to string cannot fail");
        for (name, values) in [
            ("Force", &solution.load),
            ("Displacement", &solution.displacement),
            ("Elongation", &solution.elongation),
            ("Stress", &solution.stress),
        ] {
            writeln!(&mut output, "  {name}: {}", format_values(values.iter()))
                .expect("writing to string cannot fail");
        }
    }

    for block in &summary.diagnostics {
        let spectrum = &block.spectrum;
        writeln!(&mut output, "-- {} --", block.matrix).expect("writing to string cannot fail");
        writeln!(
            &mut output,
            "  Singular Values: {}",
            format_values(&spectrum.singular_values)
        )
        .expect("writing to string cannot fail");
        writeln!(
            &mut output,
            "  Eigenvalues: {}",
            format_values(&spectrum.eigenvalues)
        )
        .expect("writing to string cannot fail");
        writeln!(
            &mut output,
            "  Condition Number: {}",
            spectrum.condition_number
        )
        .expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use springchain::{Problem, SolveMethod, SpringChain};

    fn summary() -> AnalysisSummary {
        let chain = SpringChain::new(
            Problem::new(vec![2.0, 2.0, 2.0], vec![1.0, 1.0, 1.0]).expect("valid problem"),
        );
        let solution = chain.evaluate(SolveMethod::Lu).expect("solvable");
        let diagnostics = solution.diagnostics().expect("well conditioned");
        AnalysisSummary {
            boundary: chain.problem().boundary(),
            solution,
            diagnostics,
        }
    }

    #[test]
    fn prints_one_block_per_matrix() {
        let report = render_summary(&summary(), false);
        let headers: Vec<&str> = report.lines().filter(|l| l.starts_with("-- ")).collect();
        assert_eq!(
            headers,
            [
                "-- Matrix A --",
                "-- Matrix A transpose --",
                "-- Matrix C --",
                "-- Matrix K --"
            ]
        );
        assert_eq!(report.matches("Singular Values: [").count(), 4);
        assert_eq!(report.matches("Eigenvalues: [").count(), 4);
        assert_eq!(report.matches("Condition Number: ").count(), 4);
        assert!(!report.contains("Displacement"));
    }

    #[test]
    fn fields_are_listed_on_request() {
        let report = render_summary(&summary(), true);
        assert!(report.starts_with("-- fixed-open chain --"));
        assert!(report.contains("  Force: [9.81000000 9.81000000 9.81000000]"));
        assert!(report.contains("  Stress: [29.43000000 19.62000000 9.81000000]"));
    }

    #[test]
    fn values_are_space_separated() {
        assert_eq!(format_values(&[1.0, 2.5]), "[1.00000000 2.50000000]");
        assert_eq!(format_values(&[]), "[]");
    }
}
