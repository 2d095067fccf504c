//! 问题实例

use super::network::RoadNetwork;
use crate::sim::SimConfig;

/// 一个完整的问题实例：仿真时长、每辆车的得分与路网。
#[derive(Debug, Clone)]
pub struct Problem {
    pub duration: u32,
    pub points_per_car: u64,
    pub network: RoadNetwork,
}

impl Problem {
    pub fn new(duration: u32, points_per_car: u64, network: RoadNetwork) -> Self {
        Self {
            duration,
            points_per_car,
            network,
        }
    }

    /// 该实例对应的仿真配置
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            duration: self.duration,
            points_per_car: self.points_per_car,
        }
    }

    /// 理论最高得分：所有车辆都到达终点
    pub fn max_score(&self) -> u64 {
        (self.network.cars().len() as u64).saturating_mul(self.points_per_car)
    }
}
