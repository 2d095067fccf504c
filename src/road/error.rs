//! 路网构建错误

use thiserror::Error;

use super::id::CarId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("unknown street name {0:?}")]
    UnknownStreet(String),

    #[error("duplicate street name {0:?}")]
    DuplicateStreet(String),

    #[error("street {name:?} references intersection {intersection}, but the network has {count}")]
    IntersectionOutOfRange {
        name: String,
        intersection: usize,
        count: usize,
    },

    #[error("street {0:?} has zero length")]
    ZeroLength(String),

    #[error("car {0} has an empty route")]
    EmptyRoute(CarId),

    #[error("car {car} references street index {street}, but the network has {count}")]
    StreetOutOfRange {
        car: CarId,
        street: usize,
        count: usize,
    },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
