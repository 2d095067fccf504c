//! 车辆类型

use super::id::{CarId, StreetId};

/// 车辆：拥有一条非空的街道序列作为路线。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: CarId,
    pub route: Vec<StreetId>,
}

impl Car {
    /// 路线上的第一条街道（车辆的初始位置）
    pub fn first(&self) -> StreetId {
        self.route[0]
    }

    /// 第 `leg` 条街道是否为路线终点
    pub fn is_last(&self, leg: usize) -> bool {
        leg + 1 >= self.route.len()
    }
}
