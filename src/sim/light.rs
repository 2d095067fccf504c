//! 信号灯状态机
//!
//! 状态 = (当前绿灯时段下标, 已亮绿灯的 tick 数)。每个 tick 调用一次
//! [`LightCycle::advance`]。

use super::error::{SimError, SimResult};
use crate::road::{IntersectionId, StreetId};
use crate::schedule::{GreenSlot, IntersectionSchedule};

#[derive(Debug, Clone)]
pub struct LightCycle {
    intersection: IntersectionId,
    slots: Vec<GreenSlot>,
    cursor: usize,
    elapsed: u32,
}

impl LightCycle {
    pub fn new(intersection: IntersectionId, schedule: &IntersectionSchedule) -> Self {
        Self {
            intersection,
            slots: schedule.slots().to_vec(),
            cursor: 0,
            elapsed: 0,
        }
    }

    /// 当前亮绿灯的街道；空排程永远没有绿灯。
    pub fn green(&self) -> Option<StreetId> {
        self.slots.get(self.cursor).map(|s| s.street)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// 推进一个 tick：绿灯时长用完后切换到下一条街道（循环）。
    pub fn advance(&mut self) -> SimResult<()> {
        if self.slots.is_empty() {
            return Ok(());
        }
        let slot = self.slots.get(self.cursor).ok_or(SimError::CursorOutOfRange {
            intersection: self.intersection,
            cursor: self.cursor,
            len: self.slots.len(),
        })?;
        self.elapsed += 1;
        if self.elapsed >= slot.duration {
            self.elapsed = 0;
            self.cursor = (self.cursor + 1) % self.slots.len();
        }
        Ok(())
    }
}
