//! 问题输入解析
//!
//! ```text
//! duration nIntersections nStreets nCars pointsPerCar
//! start end name length          (nStreets 行)
//! k name_1 ... name_k            (nCars 行)
//! ```

use tracing::{debug, info};

use super::error::ParseError;
use super::tokens::Tokens;
use crate::road::{Problem, RoadNetwork};

/// 路口数上限：每个路口都要预先分配驶入街道索引
pub const MAX_INTERSECTIONS: usize = 1 << 20;

#[tracing::instrument(skip_all, fields(bytes = text.len()))]
pub fn parse_problem(text: &str) -> Result<Problem, ParseError> {
    let mut t = Tokens::new(text);

    let duration: u32 = t.number("duration")?;
    let line = t.line();
    let n_intersections: usize = t.number("intersection count")?;
    if n_intersections > MAX_INTERSECTIONS {
        return Err(ParseError::OutOfRange {
            line,
            what: "intersection count",
            value: n_intersections,
            limit: MAX_INTERSECTIONS,
        });
    }
    let n_streets: usize = t.number("street count")?;
    let n_cars: usize = t.number("car count")?;
    let points_per_car: u64 = t.number("points per car")?;
    debug!(duration, n_intersections, n_streets, n_cars, points_per_car, "读取头部");

    let mut network = RoadNetwork::new(n_intersections);

    for _ in 0..n_streets {
        let line = t.line();
        let start: usize = t.number("street start")?;
        let end: usize = t.number("street end")?;
        let name = t.word("street name")?;
        let length: u32 = t.number("street length")?;
        network
            .add_street(start, end, name, length)
            .map_err(|source| ParseError::Network { line, source })?;
    }

    for _ in 0..n_cars {
        let line = t.line();
        let k: usize = t.number("route length")?;
        let names = (0..k)
            .map(|_| t.word("route street"))
            .collect::<Result<Vec<_>, _>>()?;
        network
            .add_car_by_names(&names)
            .map_err(|source| ParseError::Network { line, source })?;
    }

    t.finish()?;

    info!(
        intersections = n_intersections,
        streets = n_streets,
        cars = n_cars,
        "问题解析完成"
    );
    Ok(Problem::new(duration, points_per_car, network))
}
