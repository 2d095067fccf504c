//! 重新加权循环
//!
//! 第 0 轮使用初始构建的排程；之后每轮用上一轮的仿真结果重新加权，
//! 再从零开始仿真。循环不比较各轮得分，也不保留最好的排程：
//! 返回的永远是最后一轮的排程。

use tracing::info;

use super::observer::{NoopObserver, RoundObserver};
use crate::error::{Error, Result};
use crate::road::Problem;
use crate::schedule::{DEFAULT_CYCLE_BUDGET, Schedule, ScheduleBuilder};
use crate::sim::{SimulationResult, Simulator};

/// 默认轮数
pub const DEFAULT_ROUNDS: usize = 5;

/// 循环配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefineOpts {
    pub rounds: usize,
    pub cycle_budget: u32,
}

impl Default for RefineOpts {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            cycle_budget: DEFAULT_CYCLE_BUDGET,
        }
    }
}

/// 最后一轮的排程及其仿真结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refinement {
    pub schedule: Schedule,
    pub result: SimulationResult,
    pub rounds: usize,
}

pub struct RefinementLoop<'a> {
    problem: &'a Problem,
    opts: RefineOpts,
}

impl<'a> RefinementLoop<'a> {
    pub fn new(problem: &'a Problem, opts: RefineOpts) -> Self {
        Self { problem, opts }
    }

    pub fn run(&self) -> Result<Refinement> {
        self.run_observed(&mut NoopObserver)
    }

    #[tracing::instrument(skip_all, fields(rounds = self.opts.rounds, budget = self.opts.cycle_budget))]
    pub fn run_observed<O: RoundObserver>(&self, observer: &mut O) -> Result<Refinement> {
        if self.opts.rounds == 0 {
            return Err(Error::Config("refinement needs at least one round".into()));
        }

        let network = &self.problem.network;
        let builder =
            ScheduleBuilder::new(self.problem.duration).with_cycle_budget(self.opts.cycle_budget);
        let simulator = Simulator::new(network, self.problem.sim_config());

        let mut schedule = builder.build_for(network);
        let mut result = simulator.run(&schedule)?;
        info!(round = 0, score = result.score, finished = result.finished_cars, "完成一轮");
        observer.on_round(0, &schedule, &result);

        for round in 1..self.opts.rounds {
            schedule = builder.reweight(&schedule, &result);
            result = simulator.run(&schedule)?;
            info!(round, score = result.score, finished = result.finished_cars, "完成一轮");
            observer.on_round(round, &schedule, &result);
        }

        Ok(Refinement {
            schedule,
            result,
            rounds: self.opts.rounds,
        })
    }
}
