//! 路口运行时状态
//!
//! 每条驶入街道一个 FIFO 队列（lane），加上信号灯状态机、每条街道的
//! 排队高水位，以及“本 tick 放行的车辆”记录。仅在一次仿真内有效。

use std::collections::VecDeque;

use super::error::SimResult;
use super::light::LightCycle;
use super::result::QueueStats;
use super::time::Tick;
use crate::road::{CarId, IntersectionId, StreetId};
use crate::schedule::IntersectionSchedule;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
struct Queued {
    car: CarId,
    /// 车辆到达街道末端、可以被放行的最早 tick
    ready_at: Tick,
}

#[derive(Debug, Clone)]
struct Lane {
    street: StreetId,
    queue: VecDeque<Queued>,
    high_water: usize,
    seen: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct IntersectionState {
    id: IntersectionId,
    light: LightCycle,
    lanes: Vec<Lane>,
    released: Option<CarId>,
}

impl IntersectionState {
    /// `incoming` 为驶入该路口的街道，其下标即 lane 下标。
    pub(crate) fn new(
        id: IntersectionId,
        incoming: &[StreetId],
        schedule: &IntersectionSchedule,
    ) -> Self {
        Self {
            id,
            light: LightCycle::new(id, schedule),
            lanes: incoming
                .iter()
                .map(|&street| Lane {
                    street,
                    queue: VecDeque::new(),
                    high_water: 0,
                    seen: false,
                })
                .collect(),
            released: None,
        }
    }

    pub(crate) fn light(&self) -> &LightCycle {
        &self.light
    }

    /// 车辆进入 lane 排队，并更新高水位
    pub(crate) fn enqueue(&mut self, lane: usize, car: CarId, ready_at: Tick) {
        let lane = &mut self.lanes[lane];
        lane.queue.push_back(Queued { car, ready_at });
        lane.seen = true;
        lane.high_water = lane.high_water.max(lane.queue.len());
    }

    /// 路口阶段：放行绿灯街道队首（若已到达末端），然后推进信号灯。
    ///
    /// 队首车辆仍在街道中途时不放行，它留在队首，等之后的绿灯再放行。
    pub(crate) fn step(&mut self, now: Tick, lane_of: &[usize]) -> SimResult<()> {
        self.released = None;
        if let Some(street) = self.light.green() {
            let lane = &mut self.lanes[lane_of[street.0]];
            if lane.queue.front().is_some_and(|q| q.ready_at <= now) {
                self.released = lane.queue.pop_front().map(|q| q.car);
                trace!(
                    intersection = self.id.0,
                    street = street.0,
                    car = ?self.released,
                    "放行"
                );
            }
        }
        self.light.advance()
    }

    /// 若 `car` 是本 tick 被放行的车辆，则消费该记录并返回 true。
    pub(crate) fn take_release(&mut self, car: CarId) -> bool {
        if self.released == Some(car) {
            self.released = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn pending_release(&self) -> Option<CarId> {
        self.released
    }

    pub(crate) fn queue_len(&self, lane: usize) -> usize {
        self.lanes[lane].queue.len()
    }

    pub(crate) fn high_water(&self, lane: usize) -> usize {
        self.lanes[lane].high_water
    }

    /// 只包含至少发生过一次入队的街道
    pub(crate) fn queue_stats(&self) -> QueueStats {
        QueueStats::from_entries(
            self.lanes
                .iter()
                .filter(|l| l.seen)
                .map(|l| (l.street, l.high_water))
                .collect(),
        )
    }
}
