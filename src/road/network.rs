//! 路网拓扑管理
//!
//! 定义静态路网结构：街道、车辆路线，以及仅在边界使用的街道名索引。

use std::collections::HashMap;

use super::car::Car;
use super::error::{NetworkError, NetworkResult};
use super::id::{CarId, IntersectionId, StreetId};
use super::street::Street;
use tracing::{debug, warn};

/// 路网：构建完成后只读
#[derive(Debug, Default, Clone)]
pub struct RoadNetwork {
    n_intersections: usize,
    streets: Vec<Street>,
    cars: Vec<Car>,
    /// 每个路口的驶入街道，按街道 id 升序
    incoming: Vec<Vec<StreetId>>,
    by_name: HashMap<String, StreetId>,
}

impl RoadNetwork {
    /// 创建包含 `n_intersections` 个路口的空路网
    pub fn new(n_intersections: usize) -> Self {
        Self {
            n_intersections,
            incoming: vec![Vec::new(); n_intersections],
            ..Self::default()
        }
    }

    /// 添加一条单向街道
    pub fn add_street(
        &mut self,
        start: usize,
        end: usize,
        name: impl Into<String>,
        length: u32,
    ) -> NetworkResult<StreetId> {
        let name = name.into();
        for intersection in [start, end] {
            if intersection >= self.n_intersections {
                return Err(NetworkError::IntersectionOutOfRange {
                    name,
                    intersection,
                    count: self.n_intersections,
                });
            }
        }
        if length == 0 {
            return Err(NetworkError::ZeroLength(name));
        }
        if self.by_name.contains_key(&name) {
            return Err(NetworkError::DuplicateStreet(name));
        }

        let id = StreetId(self.streets.len());
        self.by_name.insert(name.clone(), id);
        self.incoming[end].push(id);
        self.streets.push(Street {
            id,
            start: IntersectionId(start),
            end: IntersectionId(end),
            name,
            length,
        });
        Ok(id)
    }

    /// 添加一辆车，路线以街道 id 给出
    pub fn add_car(&mut self, route: Vec<StreetId>) -> NetworkResult<CarId> {
        let id = CarId(self.cars.len());
        if route.is_empty() {
            return Err(NetworkError::EmptyRoute(id));
        }
        if let Some(bad) = route.iter().find(|s| s.0 >= self.streets.len()) {
            return Err(NetworkError::StreetOutOfRange {
                car: id,
                street: bad.0,
                count: self.streets.len(),
            });
        }

        // 路线连通性不在此处强制。
        if let Some(w) = route
            .windows(2)
            .find(|w| self.streets[w[0].0].end != self.streets[w[1].0].start)
        {
            warn!(
                car = id.0,
                from = %self.streets[w[0].0].name,
                to = %self.streets[w[1].0].name,
                "车辆路线不连通"
            );
        }

        self.cars.push(Car { id, route });
        Ok(id)
    }

    /// 添加一辆车，路线以街道名给出
    pub fn add_car_by_names<S: AsRef<str>>(&mut self, names: &[S]) -> NetworkResult<CarId> {
        let route = names
            .iter()
            .map(|n| {
                self.street_id(n.as_ref())
                    .ok_or_else(|| NetworkError::UnknownStreet(n.as_ref().to_string()))
            })
            .collect::<NetworkResult<Vec<_>>>()?;
        let id = self.add_car(route)?;
        debug!(car = id.0, legs = names.len(), "添加车辆");
        Ok(id)
    }

    pub fn n_intersections(&self) -> usize {
        self.n_intersections
    }

    /// 所有路口 id
    pub fn intersections(&self) -> impl Iterator<Item = IntersectionId> + '_ {
        (0..self.n_intersections).map(IntersectionId)
    }

    pub fn streets(&self) -> &[Street] {
        &self.streets
    }

    pub fn street(&self, id: StreetId) -> &Street {
        &self.streets[id.0]
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, id: CarId) -> &Car {
        &self.cars[id.0]
    }

    /// 驶入某路口的全部街道
    pub fn incoming(&self, intersection: IntersectionId) -> &[StreetId] {
        &self.incoming[intersection.0]
    }

    /// 按名字查找街道
    pub fn street_id(&self, name: &str) -> Option<StreetId> {
        self.by_name.get(name).copied()
    }
}
