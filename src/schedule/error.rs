//! 排程校验错误

use thiserror::Error;

use crate::road::{IntersectionId, StreetId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule covers {got} intersections, network has {expected}")]
    IntersectionCount { expected: usize, got: usize },

    #[error("street {street} does not end at intersection {intersection}")]
    StreetNotIncoming {
        intersection: IntersectionId,
        street: StreetId,
    },

    #[error("street {street} is scheduled twice at intersection {intersection}")]
    DuplicateStreet {
        intersection: IntersectionId,
        street: StreetId,
    },

    #[error("street {street} at intersection {intersection} has duration {duration}, expected 1..={max}")]
    DurationOutOfRange {
        intersection: IntersectionId,
        street: StreetId,
        duration: u32,
        max: u32,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
