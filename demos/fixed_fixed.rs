use springchain::{Problem, SolveMethod, SpringChain};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three masses held between two anchors by four springs.
    let problem = Problem::from_json_str(
        r#"{"Spring Constant(s) Vector": [10.0, 20.0, 20.0, 10.0], "Mass Vector": [1.0, 2.0, 1.0]}"#,
    )?;
    println!("boundary condition: {}", problem.boundary());

    let solution = SpringChain::new(problem).evaluate(SolveMethod::Tridiagonal)?;
    println!("elongation: {:?}", solution.elongation.as_slice());

    for block in solution.diagnostics()? {
        println!(
            "{}: condition number {:.3}",
            block.matrix, block.spectrum.condition_number
        );
    }

    Ok(())
}
