//! 仿真错误
//!
//! 除排程校验失败外，这里的错误都表示内部不变量被破坏。

use thiserror::Error;

use crate::road::{CarId, IntersectionId};
use crate::schedule::ScheduleError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("light cursor {cursor} out of range at intersection {intersection} ({len} slots)")]
    CursorOutOfRange {
        intersection: IntersectionId,
        cursor: usize,
        len: usize,
    },

    #[error("car {car} released at intersection {intersection} on tick {tick} was not waiting there")]
    ReleaseNotConsumed {
        intersection: IntersectionId,
        car: CarId,
        tick: u32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
