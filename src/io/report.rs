//! JSON 运行报告（每个问题实例一条）

use serde::{Deserialize, Serialize};

use crate::refine::Refinement;
use crate::road::RoadNetwork;

/// 最后一轮中某条街道的最大排队长度
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetCongestion {
    pub intersection: usize,
    pub street: String,
    pub max_queue: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub input: String,
    pub rounds: usize,
    pub score: u64,
    pub finished_cars: usize,
    pub total_cars: usize,
    /// 按 `max_queue` 降序、街道名升序
    pub congestion: Vec<StreetCongestion>,
}

impl RunReport {
    pub fn new(input: impl Into<String>, refinement: &Refinement, network: &RoadNetwork) -> Self {
        let result = &refinement.result;
        let mut congestion: Vec<StreetCongestion> = result
            .queues()
            .flat_map(|(intersection, stats)| {
                stats.entries().iter().map(move |&(street, max_queue)| StreetCongestion {
                    intersection: intersection.0,
                    street: network.street(street).name.clone(),
                    max_queue,
                })
            })
            .collect();
        congestion.sort_by(|a, b| {
            b.max_queue
                .cmp(&a.max_queue)
                .then_with(|| a.street.cmp(&b.street))
        });

        Self {
            input: input.into(),
            rounds: refinement.rounds,
            score: result.score,
            finished_cars: result.finished_cars,
            total_cars: result.total_cars,
            congestion,
        }
    }
}
