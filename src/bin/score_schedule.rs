//! 为已有的提交文件打分

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use traffic_sim::io::{parse_problem, parse_schedule};
use traffic_sim::sim::Simulator;
use traffic_sim::{Error, Result};
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "score-schedule", about = "Simulate a submission file against a problem input")]
struct Args {
    /// Problem input file
    #[arg(long)]
    input: PathBuf,

    /// Submission (schedule) file
    #[arg(long)]
    schedule: PathBuf,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn score(args: &Args) -> Result<(u64, usize, usize)> {
    let problem = parse_problem(&read(&args.input)?)?;
    let schedule = parse_schedule(&read(&args.schedule)?, &problem.network)?;
    let result = Simulator::new(&problem.network, problem.sim_config()).run(&schedule)?;
    Ok((result.score, result.finished_cars, result.total_cars))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();
    match score(&args) {
        Ok((score, finished, total)) => {
            println!("score={score} finished={finished}/{total}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "打分失败");
            ExitCode::FAILURE
        }
    }
}
