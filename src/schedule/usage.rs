//! 街道使用量（popularity）统计
//!
//! 对每个路口，记录每条驶入街道被车辆路线使用的次数。按车辆 id、
//! 再按路线顺序扫描，首次出现的顺序即后续信号循环的顺序。

use crate::road::{IntersectionId, RoadNetwork, StreetId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetUsage {
    /// 路口 -> 按插入顺序排列的 (街道, 次数)
    per_intersection: Vec<Vec<(StreetId, u32)>>,
    /// 街道 -> 在其终点路口列表中的位置
    slot_of: Vec<Option<usize>>,
}

impl StreetUsage {
    /// 扫描路网中所有车辆路线
    pub fn from_network(network: &RoadNetwork) -> Self {
        let mut usage = Self {
            per_intersection: vec![Vec::new(); network.n_intersections()],
            slot_of: vec![None; network.streets().len()],
        };
        for car in network.cars() {
            for &street in &car.route {
                let end = network.street(street).end;
                usage.record(end, street);
            }
        }
        usage
    }

    fn record(&mut self, intersection: IntersectionId, street: StreetId) {
        let counts = &mut self.per_intersection[intersection.0];
        match self.slot_of[street.0] {
            Some(pos) => counts[pos].1 += 1,
            None => {
                self.slot_of[street.0] = Some(counts.len());
                counts.push((street, 1));
            }
        }
    }

    pub fn n_intersections(&self) -> usize {
        self.per_intersection.len()
    }

    /// 某路口的 (街道, 次数)，按首次出现顺序
    pub fn at(&self, intersection: IntersectionId) -> &[(StreetId, u32)] {
        &self.per_intersection[intersection.0]
    }

    /// 某条街道被使用的次数
    pub fn count(&self, intersection: IntersectionId, street: StreetId) -> u32 {
        self.slot_of
            .get(street.0)
            .copied()
            .flatten()
            .and_then(|pos| self.per_intersection[intersection.0].get(pos))
            .filter(|(s, _)| *s == street)
            .map_or(0, |(_, n)| *n)
    }

    pub fn total(&self, intersection: IntersectionId) -> u64 {
        self.at(intersection).iter().map(|(_, n)| *n as u64).sum()
    }
}
