//! 每轮回调

use crate::schedule::Schedule;
use crate::sim::SimulationResult;

/// [`RefinementLoop`](super::RefinementLoop) 每完成一轮仿真调用一次。
///
/// 只用于观察（日志、测试），不影响下一轮使用哪个排程。
pub trait RoundObserver {
    fn on_round(&mut self, _round: usize, _schedule: &Schedule, _result: &SimulationResult) {}
}

/// 什么都不做的观察者
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
