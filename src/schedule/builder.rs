//! 排程构建器
//!
//! - 初始构建：按街道使用量在一个固定的“周期预算”内按比例分配绿灯时长
//! - 重新加权：根据上一轮仿真中每条街道的最大排队长度调整时长

use tracing::{debug, trace};

use super::table::Schedule;
use super::usage::StreetUsage;
use crate::road::{IntersectionId, RoadNetwork};
use crate::sim::SimulationResult;

/// 初始构建时每个路口分配的绿灯总预算（tick）
pub const DEFAULT_CYCLE_BUDGET: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleBuilder {
    duration: u32,
    cycle_budget: u32,
}

impl ScheduleBuilder {
    /// `duration` 为仿真总时长，所有时长都被截断到不超过它。
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            cycle_budget: DEFAULT_CYCLE_BUDGET,
        }
    }

    pub fn with_cycle_budget(mut self, cycle_budget: u32) -> Self {
        self.cycle_budget = cycle_budget;
        self
    }

    /// 直接从路网统计使用量并构建初始排程
    pub fn build_for(&self, network: &RoadNetwork) -> Schedule {
        self.build(&StreetUsage::from_network(network))
    }

    /// 初始构建：`ceil(budget * popularity / total)`，截断到 `duration`。
    #[tracing::instrument(skip(self, usage), fields(budget = self.cycle_budget, duration = self.duration))]
    pub fn build(&self, usage: &StreetUsage) -> Schedule {
        let mut schedule = Schedule::new(usage.n_intersections());
        for intersection in (0..usage.n_intersections()).map(IntersectionId) {
            let total = usage.total(intersection);
            if total == 0 {
                continue;
            }
            for &(street, popularity) in usage.at(intersection) {
                let green = (self.cycle_budget as u64 * popularity as u64).div_ceil(total);
                let green = green.min(self.duration as u64) as u32;
                if green == 0 {
                    continue;
                }
                trace!(intersection = intersection.0, street = street.0, popularity, green, "分配绿灯");
                schedule.intersection_mut(intersection).push(street, green);
            }
        }
        debug!(active = schedule.active_count(), "初始排程完成");
        schedule
    }

    /// 重新加权：排队越长（相对本路口平均值）的街道获得越多绿灯时间。
    ///
    /// 街道顺序保持不变，只调整时长；某路口排队总和为 0 时该路口不变。
    #[tracing::instrument(skip_all, fields(duration = self.duration))]
    pub fn reweight(&self, previous: &Schedule, stats: &SimulationResult) -> Schedule {
        let mut next = previous.clone();
        for intersection in (0..next.n_intersections()).map(IntersectionId) {
            let Some(queues) = stats.queues_at(intersection) else {
                continue;
            };
            let n = queues.len() as u128;
            let total = queues.total() as u128;
            if total == 0 {
                continue;
            }
            // scale = (T + (m - T/n)) / T = (nT + nm - T) / (nT)
            let denom = n * total;
            for slot in next.intersection_mut(intersection).slots_mut() {
                let m = queues.max_queue(slot.street) as u128;
                let numer = (slot.duration as u128) * (n * total + n * m - total);
                let green = numer.div_ceil(denom).min(self.duration as u128).max(1) as u32;
                trace!(
                    intersection = intersection.0,
                    street = slot.street.0,
                    max_queue = m as u64,
                    old = slot.duration,
                    new = green,
                    "重新加权"
                );
                slot.duration = green;
            }
        }
        next
    }
}
