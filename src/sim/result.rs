//! 仿真结果
//!
//! 得分以及每个路口每条街道的最大排队长度。这是反馈给重新加权的唯一通道，
//! 仿真结束后只读。

use serde::{Deserialize, Serialize};

use crate::road::{IntersectionId, StreetId};

/// 单个路口的排队高水位：街道 -> 最大排队长度
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    entries: Vec<(StreetId, usize)>,
}

impl QueueStats {
    pub fn from_entries(entries: Vec<(StreetId, usize)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(StreetId, usize)] {
        &self.entries
    }

    /// 未出现过排队的街道返回 0
    pub fn max_queue(&self, street: StreetId) -> usize {
        self.entries
            .iter()
            .find(|(s, _)| *s == street)
            .map_or(0, |(_, n)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| *n as u64).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub score: u64,
    pub finished_cars: usize,
    pub total_cars: usize,
    queues: Vec<QueueStats>,
}

impl SimulationResult {
    pub fn new(score: u64, finished_cars: usize, total_cars: usize, queues: Vec<QueueStats>) -> Self {
        Self {
            score,
            finished_cars,
            total_cars,
            queues,
        }
    }

    pub fn queues_at(&self, intersection: IntersectionId) -> Option<&QueueStats> {
        self.queues.get(intersection.0)
    }

    pub fn queues(&self) -> impl Iterator<Item = (IntersectionId, &QueueStats)> {
        self.queues
            .iter()
            .enumerate()
            .map(|(i, q)| (IntersectionId(i), q))
    }
}
