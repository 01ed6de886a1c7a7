mod analysis;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use analysis::run_analysis;
use clap::{Parser, ValueEnum};
use log::error;
use report::render_summary;
use springchain::{ChainError, SolveMethod, DEFAULT_INPUT_PATH};

/// Static analysis of a hanging mass-spring chain.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file holding the spring constants and masses.
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,
    /// Direct method used for the static solve.
    #[arg(long, value_enum, default_value_t = SolverArg::Lu)]
    solver: SolverArg,
    /// Also print load, displacement, elongation and stress.
    #[arg(long)]
    fields: bool,
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Command line spelling of [`SolveMethod`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SolverArg {
    /// Dense LU factorization.
    Lu,
    /// Explicit inverse.
    Inverse,
    /// Banded Thomas algorithm.
    Tridiagonal,
}

impl From<SolverArg> for SolveMethod {
    fn from(value: SolverArg) -> Self {
        match value {
            SolverArg::Lu => SolveMethod::Lu,
            SolverArg::Inverse => SolveMethod::Inverse,
            SolverArg::Tridiagonal => SolveMethod::Tridiagonal,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Load and classify the chain, solve it, and print the four spectral blocks.
fn run(cli: &Cli) -> Result<(), ChainError> {
    let summary = run_analysis(&cli.input, cli.solver.into())?;
    println!("{}", render_summary(&summary, cli.fields));
    Ok(())
}
