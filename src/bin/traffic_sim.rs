//! 批量求解
//!
//! 对每个输入文件运行固定轮数的重新加权循环，输出得分与提交文件。
//! 不同实例之间没有共享状态，每个文件一个线程；某个实例失败不影响其它实例。

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use traffic_sim::io::{RunReport, format_schedule, parse_problem};
use traffic_sim::refine::{DEFAULT_ROUNDS, RefineOpts, RefinementLoop};
use traffic_sim::schedule::DEFAULT_CYCLE_BUDGET;
use traffic_sim::{Error, Result};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "traffic-sim",
    about = "Build traffic-light schedules and refine them by simulation"
)]
struct Args {
    /// Problem input file (repeat for several instances)
    #[arg(long = "input", required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for `<stem>.out` submission files
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Number of build/simulate/reweight rounds
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Green-light budget per intersection for the initial schedule
    #[arg(long, default_value_t = DEFAULT_CYCLE_BUDGET)]
    cycle_budget: u32,

    /// Write a JSON report of every solved instance
    #[arg(long)]
    stats_json: Option<PathBuf>,
}

struct Solved {
    report: RunReport,
    submission: String,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[tracing::instrument(skip(opts), fields(input = %path.display()))]
fn solve_file(path: &Path, opts: RefineOpts) -> Result<Solved> {
    let problem = parse_problem(&read(path)?)?;
    let refinement = RefinementLoop::new(&problem, opts).run()?;
    info!(
        score = refinement.result.score,
        max_score = problem.max_score(),
        "实例求解完成"
    );
    Ok(Solved {
        submission: format_schedule(&refinement.schedule, &problem.network),
        report: RunReport::new(path.display().to_string(), &refinement, &problem.network),
    })
}

fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "out".into(), |s| s.to_string_lossy().into_owned());
    dir.join(format!("{stem}.out"))
}

fn main() -> ExitCode {
    // 初始化 tracing（输出到 stderr，stdout 只留结果行）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let opts = RefineOpts {
        rounds: args.rounds,
        cycle_budget: args.cycle_budget,
    };

    if let Some(dir) = &args.out_dir
        && let Err(e) = fs::create_dir_all(dir)
    {
        error!(dir = %dir.display(), error = %e, "无法创建输出目录");
        return ExitCode::FAILURE;
    }

    let results: Vec<Result<Solved>> = std::thread::scope(|s| {
        let handles: Vec<_> = args
            .inputs
            .iter()
            .map(|path| s.spawn(move || solve_file(path, opts)))
            .collect();
        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .unwrap_or_else(|_| Err(Error::Config("solver thread panicked".into())))
            })
            .collect()
    });

    let mut failed = 0usize;
    let mut reports = Vec::new();
    for (path, res) in args.inputs.iter().zip(results) {
        let solved = match res {
            Ok(solved) => solved,
            Err(e) => {
                failed += 1;
                error!(input = %path.display(), error = %e, "实例求解失败");
                continue;
            }
        };
        if let Some(dir) = &args.out_dir
            && let Err(e) = write(&output_path(dir, path), &solved.submission)
        {
            failed += 1;
            error!(input = %path.display(), error = %e, "无法写入提交文件");
            continue;
        }
        let r = &solved.report;
        println!(
            "instance={} score={} finished={}/{} rounds={}",
            r.input, r.score, r.finished_cars, r.total_cars, r.rounds
        );
        reports.push(solved.report);
    }

    if let Some(out) = &args.stats_json {
        let json = match serde_json::to_string_pretty(&reports) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "无法序列化报告");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = write(out, &json) {
            error!(error = %e, "无法写入报告");
            return ExitCode::FAILURE;
        }
    }

    if failed > 0 {
        error!(failed, total = args.inputs.len(), "部分实例失败");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
