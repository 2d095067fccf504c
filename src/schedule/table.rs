//! 排程表
//!
//! 每个路口一个有序的 (街道, 绿灯时长) 列表。顺序即信号灯的循环顺序，
//! 构建时按首次出现的顺序插入，之后从不重新排序。

use serde::{Deserialize, Serialize};

use super::error::{ScheduleError, ScheduleResult};
use crate::road::{IntersectionId, RoadNetwork, StreetId};

/// 一个绿灯时段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreenSlot {
    pub street: StreetId,
    pub duration: u32,
}

/// 单个路口的排程
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionSchedule {
    slots: Vec<GreenSlot>,
}

impl IntersectionSchedule {
    /// 在循环末尾追加一个时段。重复街道由 [`Schedule::validate`] 报告。
    pub fn push(&mut self, street: StreetId, duration: u32) {
        self.slots.push(GreenSlot { street, duration });
    }

    pub fn slots(&self) -> &[GreenSlot] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [GreenSlot] {
        &mut self.slots
    }

    /// 查询某条街道的绿灯时长
    pub fn duration_of(&self, street: StreetId) -> Option<u32> {
        self.slots
            .iter()
            .find(|s| s.street == street)
            .map(|s| s.duration)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// 全路网的排程：按路口 id 索引
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    intersections: Vec<IntersectionSchedule>,
}

impl Schedule {
    /// 创建 `n_intersections` 个空排程
    pub fn new(n_intersections: usize) -> Self {
        Self {
            intersections: vec![IntersectionSchedule::default(); n_intersections],
        }
    }

    pub fn n_intersections(&self) -> usize {
        self.intersections.len()
    }

    pub fn intersection(&self, id: IntersectionId) -> &IntersectionSchedule {
        &self.intersections[id.0]
    }

    pub fn intersection_mut(&mut self, id: IntersectionId) -> &mut IntersectionSchedule {
        &mut self.intersections[id.0]
    }

    /// 按路口 id 升序遍历
    pub fn iter(&self) -> impl Iterator<Item = (IntersectionId, &IntersectionSchedule)> {
        self.intersections
            .iter()
            .enumerate()
            .map(|(i, s)| (IntersectionId(i), s))
    }

    /// 排程非空的路口个数
    pub fn active_count(&self) -> usize {
        self.intersections.iter().filter(|s| !s.is_empty()).count()
    }

    /// 校验排程与路网、仿真时长是否一致。
    pub fn validate(&self, network: &RoadNetwork, duration: u32) -> ScheduleResult<()> {
        if self.intersections.len() != network.n_intersections() {
            return Err(ScheduleError::IntersectionCount {
                expected: network.n_intersections(),
                got: self.intersections.len(),
            });
        }
        for (intersection, sched) in self.iter() {
            for (i, slot) in sched.slots().iter().enumerate() {
                let end = network.streets().get(slot.street.0).map(|s| s.end);
                if end != Some(intersection) {
                    return Err(ScheduleError::StreetNotIncoming {
                        intersection,
                        street: slot.street,
                    });
                }
                if sched.slots()[..i].iter().any(|s| s.street == slot.street) {
                    return Err(ScheduleError::DuplicateStreet {
                        intersection,
                        street: slot.street,
                    });
                }
                if slot.duration == 0 || slot.duration > duration {
                    return Err(ScheduleError::DurationOutOfRange {
                        intersection,
                        street: slot.street,
                        duration: slot.duration,
                        max: duration,
                    });
                }
            }
        }
        Ok(())
    }
}
