//! 提交文件（排程）格式
//!
//! ```text
//! 排程非空的路口个数
//! id
//! k
//! name duration            (k 行)
//! ```

use super::error::ParseError;
use super::tokens::Tokens;
use crate::road::{IntersectionId, NetworkError, RoadNetwork};
use crate::schedule::Schedule;

/// 只输出排程非空的路口，按路口 id 升序，街道保持循环顺序。
pub fn format_schedule(schedule: &Schedule, network: &RoadNetwork) -> String {
    let mut out = format!("{}\n", schedule.active_count());
    for (id, sched) in schedule.iter().filter(|(_, s)| !s.is_empty()) {
        out.push_str(&format!("{}\n{}\n", id.0, sched.len()));
        for slot in sched.slots() {
            out.push_str(&format!("{} {}\n", network.street(slot.street).name, slot.duration));
        }
    }
    out
}

/// 读取提交文件。不做时长范围校验，交给 [`Schedule::validate`]。
pub fn parse_schedule(text: &str, network: &RoadNetwork) -> Result<Schedule, ParseError> {
    let mut t = Tokens::new(text);
    let mut schedule = Schedule::new(network.n_intersections());
    let mut listed = vec![false; network.n_intersections()];

    let line = t.line();
    let n: usize = t.number("intersection count")?;
    if n > network.n_intersections() {
        return Err(ParseError::OutOfRange {
            line,
            what: "intersection count",
            value: n,
            limit: network.n_intersections(),
        });
    }

    for _ in 0..n {
        let line = t.line();
        let id: usize = t.number("intersection id")?;
        if id >= network.n_intersections() {
            return Err(ParseError::OutOfRange {
                line,
                what: "intersection id",
                value: id,
                limit: network.n_intersections(),
            });
        }
        if std::mem::replace(&mut listed[id], true) {
            return Err(ParseError::DuplicateIntersection {
                line,
                intersection: id,
            });
        }

        let k: usize = t.number("street count")?;
        for _ in 0..k {
            let line = t.line();
            let name = t.word("street name")?;
            let street = network.street_id(name).ok_or_else(|| ParseError::Network {
                line,
                source: NetworkError::UnknownStreet(name.to_string()),
            })?;
            let duration: u32 = t.number("green duration")?;
            schedule.intersection_mut(IntersectionId(id)).push(street, duration);
        }
    }

    t.finish()?;
    Ok(schedule)
}
