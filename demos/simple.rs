use springchain::{Problem, SolveMethod, SpringChain};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two equal springs holding two unit masses, anchored at the top only.
    let problem = Problem::new(vec![2.0, 2.0], vec![1.0, 1.0])?;
    let solution = SpringChain::new(problem).evaluate(SolveMethod::Lu)?;

    for (i, u) in solution.displacement.iter().enumerate() {
        println!("u{i} = {u:.4} m");
    }
    for (i, w) in solution.stress.iter().enumerate() {
        println!("w{i} = {w:.4} N");
    }

    Ok(())
}
