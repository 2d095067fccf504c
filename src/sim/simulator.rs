//! 仿真器
//!
//! 逐 tick 推进：先推进所有路口（放行 + 信号灯），再推进所有车辆，
//! 最后移除已完成路线的车辆。这个顺序不可调换。

use super::error::{SimError, SimResult};
use super::intersection::IntersectionState;
use super::result::SimulationResult;
use super::time::Tick;
use crate::road::{CarId, IntersectionId, RoadNetwork, StreetId};
use crate::schedule::Schedule;
use tracing::{debug, trace};

/// 仿真配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// 总 tick 数
    pub duration: u32,
    /// 每辆完成路线的车得分
    pub points_per_car: u64,
}

/// 仿真器：持有只读路网与配置，每次 [`Simulator::run`] 都从零开始。
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    network: &'a RoadNetwork,
    config: SimConfig,
}

impl<'a> Simulator<'a> {
    pub fn new(network: &'a RoadNetwork, config: SimConfig) -> Self {
        Self { network, config }
    }

    /// 校验排程并准备一次新的仿真
    pub fn start(&self, schedule: &Schedule) -> SimResult<SimRun<'a>> {
        schedule.validate(self.network, self.config.duration)?;
        Ok(SimRun::new(self.network, self.config, schedule))
    }

    /// 完整运行 `duration` 个 tick
    #[tracing::instrument(skip_all, fields(duration = self.config.duration, cars = self.network.cars().len()))]
    pub fn run(&self, schedule: &Schedule) -> SimResult<SimulationResult> {
        let mut run = self.start(schedule)?;
        run.run_to_end()?;
        let result = run.finish();
        debug!(
            score = result.score,
            finished_cars = result.finished_cars,
            "仿真完成"
        );
        Ok(result)
    }
}

#[derive(Debug, Clone)]
struct CarState {
    car: CarId,
    leg: usize,
    position: u32,
    finished: bool,
}

/// 一次仿真的全部可变状态；结束后丢弃。
#[derive(Debug)]
pub struct SimRun<'a> {
    network: &'a RoadNetwork,
    config: SimConfig,
    now: Tick,
    intersections: Vec<IntersectionState>,
    /// 街道 -> 其终点路口中的 lane 下标
    lane_of: Vec<usize>,
    cars: Vec<CarState>,
    score: u64,
    finished: usize,
}

impl<'a> SimRun<'a> {
    fn new(network: &'a RoadNetwork, config: SimConfig, schedule: &Schedule) -> Self {
        let mut lane_of = vec![0; network.streets().len()];
        let intersections = network
            .intersections()
            .map(|id| {
                let incoming = network.incoming(id);
                for (lane, street) in incoming.iter().enumerate() {
                    lane_of[street.0] = lane;
                }
                IntersectionState::new(id, incoming, schedule.intersection(id))
            })
            .collect();

        let mut run = Self {
            network,
            config,
            now: Tick::ZERO,
            intersections,
            lane_of,
            cars: Vec::with_capacity(network.cars().len()),
            score: 0,
            finished: 0,
        };

        // 每辆车从第一条街道的末端出发，直接在终点路口排队。
        for car in network.cars() {
            let street = network.street(car.first());
            run.cars.push(CarState {
                car: car.id,
                leg: 0,
                position: street.length,
                finished: false,
            });
            let lane = run.lane_of[street.id.0];
            run.intersections[street.end.0].enqueue(lane, car.id, Tick::ZERO);
        }
        run
    }

    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn is_done(&self) -> bool {
        self.now.0 >= self.config.duration
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// 仍在路网中的车辆数
    pub fn active_cars(&self) -> usize {
        self.cars.len()
    }

    /// 当前亮绿灯的街道
    pub fn green(&self, intersection: IntersectionId) -> Option<StreetId> {
        self.intersections[intersection.0].light().green()
    }

    /// 某街道在其终点路口的当前排队长度
    pub fn queue_len(&self, street: StreetId) -> usize {
        let end = self.network.street(street).end;
        self.intersections[end.0].queue_len(self.lane_of[street.0])
    }

    /// 某街道到目前为止的排队高水位
    pub fn high_water(&self, street: StreetId) -> usize {
        let end = self.network.street(street).end;
        self.intersections[end.0].high_water(self.lane_of[street.0])
    }

    /// 推进一个 tick
    pub fn step(&mut self) -> SimResult<()> {
        let now = self.now;

        // (1) 所有路口
        for intersection in &mut self.intersections {
            intersection.step(now, &self.lane_of)?;
        }

        // (2) 所有车辆
        self.step_cars(now)?;

        // (3) 移除已完成路线的车辆
        self.cars.retain(|c| !c.finished);

        trace!(tick = now.0, active = self.cars.len(), score = self.score, "tick 完成");
        self.now = Tick(now.0 + 1);
        Ok(())
    }

    fn step_cars(&mut self, now: Tick) -> SimResult<()> {
        let network = self.network;
        for state in &mut self.cars {
            let car = network.car(state.car);
            let street = network.street(car.route[state.leg]);

            if state.position < street.length {
                state.position += 1;
                continue;
            }

            if !self.intersections[street.end.0].take_release(state.car) {
                continue;
            }

            if car.is_last(state.leg) {
                state.finished = true;
                self.finished += 1;
                self.score = self.score.saturating_add(self.config.points_per_car);
                trace!(tick = now.0, car = state.car.0, "车辆到达终点");
                continue;
            }

            state.leg += 1;
            state.position = 0;
            let next = network.street(car.route[state.leg]);
            let ready_at = now.plus(next.length).plus(1);
            self.intersections[next.end.0].enqueue(self.lane_of[next.id.0], state.car, ready_at);
        }

        // 每条放行记录都必须被对应车辆消费
        for (i, intersection) in self.intersections.iter().enumerate() {
            if let Some(car) = intersection.pending_release() {
                return Err(SimError::ReleaseNotConsumed {
                    intersection: IntersectionId(i),
                    car,
                    tick: now.0,
                });
            }
        }
        Ok(())
    }

    /// 运行到仿真结束
    pub fn run_to_end(&mut self) -> SimResult<()> {
        while !self.is_done() {
            self.step()?;
        }
        Ok(())
    }

    /// 结束仿真，生成只读结果
    pub fn finish(self) -> SimulationResult {
        SimulationResult::new(
            self.score,
            self.finished,
            self.network.cars().len(),
            self.intersections.iter().map(|i| i.queue_stats()).collect(),
        )
    }
}
